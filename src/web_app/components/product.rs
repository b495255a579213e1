// web_app/components/product.rs - Marketplace display components
//
// Components for the marketplace page including:
// - ProductCard: One listing in the grid
// - ProductGrid: Grid layout for the filtered listings
// - CategoryTabs: [ALL] / [ELECTRONICS] / [COLLECTIBLES] switch
// - EmptySector: Shown when no listing matches the current tab
// - MarketplaceHeader: Title bar with the item counter

use leptos::prelude::*;
use leptos_router::components::A;

use crate::web_app::flows::item_count_label;
use crate::web_app::model::{CategoryFilter, Product};
use crate::web_app::paths;

/// Product card for the marketplace grid
///
/// The whole card is a router link to the listing's detail route.
#[component]
pub fn ProductCard(
    /// The listing to display
    product: Product,
) -> impl IntoView {
    let href = paths::product(&product.id);
    let price_display = format!("${}", product.price_display());
    let seller_display = format!("@{}", product.seller_display());
    let icon = product.category_icon();
    let image = product.display_image().map(str::to_string);
    let alt = product.name.clone();

    view! {
        <A
            href={href}
            {..}
            class="group relative bg-slate-900 rounded-xl border border-slate-800 hover:border-emerald-500/60 \
                   transition-all duration-300 flex flex-col h-full overflow-hidden transform hover:-translate-y-1"
        >
            // Image or category glyph
            <div class="relative h-48 bg-slate-950 flex items-center justify-center overflow-hidden">
                {match image {
                    Some(src) => view! {
                        <img src=src alt=alt class="h-full w-full object-cover opacity-90 group-hover:opacity-100" />
                    }.into_any(),
                    None => view! {
                        <span class="text-6xl text-emerald-400/70 group-hover:text-emerald-300">{icon}</span>
                    }.into_any(),
                }}
                <span class="absolute top-2 right-2 flex items-center gap-1 rounded bg-black/60 px-2 py-0.5 \
                             text-[10px] font-mono font-bold tracking-widest text-emerald-400">
                    <span class="w-1.5 h-1.5 bg-emerald-400 rounded-full animate-pulse"></span>
                    "LIVE"
                </span>
            </div>

            <div class="p-5 flex flex-col flex-1 font-mono">
                // Title and price
                <div class="flex justify-between items-start gap-3 mb-3">
                    <h3 class="font-bold text-slate-100 line-clamp-2 group-hover:text-emerald-300 transition-colors">
                        {product.name.clone()}
                    </h3>
                    <span class="text-emerald-400 font-bold whitespace-nowrap">{price_display}</span>
                </div>

                // Category and seller
                <div class="mt-auto flex justify-between items-center text-xs text-slate-500 pt-3 border-t border-slate-800">
                    <span>"■ " {product.category.clone()}</span>
                    <span class="text-slate-400">{seller_display}</span>
                </div>
            </div>
        </A>
    }
}

/// Grid of product cards
#[component]
pub fn ProductGrid(
    /// Listings to display, already filtered
    products: Vec<Product>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
            {products
                .into_iter()
                .map(|product| view! { <ProductCard product=product /> })
                .collect_view()}
        </div>
    }
}

/// Class of a category tab
pub fn tab_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 font-mono text-sm rounded-lg bg-emerald-500 text-slate-950 font-bold"
    } else {
        "px-4 py-2 font-mono text-sm rounded-lg text-slate-400 hover:text-emerald-300 hover:bg-slate-800 transition-colors"
    }
}

/// Category selector
///
/// Reports every click through `on_select`; deciding whether the click
/// changes anything is up to the owner of the filter.
#[component]
pub fn CategoryTabs(
    /// The currently applied filter
    #[prop(into)]
    selected: Signal<CategoryFilter>,
    on_select: Callback<CategoryFilter>,
) -> impl IntoView {
    view! {
        <nav class="flex flex-wrap gap-2" aria-label="Categories">
            {CategoryFilter::tabs()
                .into_iter()
                .map(|tab| {
                    let caption = tab.tab_caption();
                    let active_tab = tab.clone();
                    let is_active = move || selected.with(|current| *current == active_tab);
                    let pressed = is_active.clone();
                    view! {
                        <button
                            type="button"
                            class=move || tab_class(is_active())
                            aria-pressed=move || pressed().to_string()
                            on:click=move |_| on_select.run(tab.clone())
                        >
                            {caption}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Empty state for a tab with no listings
#[component]
pub fn EmptySector() -> impl IntoView {
    view! {
        <div class="text-center py-20 rounded-2xl border border-dashed border-slate-700 font-mono">
            <div class="text-7xl font-bold text-emerald-500/40 mb-4">"404"</div>
            <p class="text-slate-400">">_ No products found in this sector"</p>
        </div>
    }
}

/// Page title bar with the live item counter
#[component]
pub fn MarketplaceHeader(
    /// Number of listings currently shown
    count: Signal<usize>,
) -> impl IntoView {
    view! {
        <header class="flex flex-col md:flex-row md:items-end md:justify-between gap-4 mb-8">
            <div>
                <p class="font-mono text-xs tracking-widest text-emerald-500">"// BLACK MARKET TERMINAL"</p>
                <h1 class="text-4xl font-bold text-slate-100 font-mono">"Marketplace"</h1>
            </div>
            <span class="font-mono text-sm text-slate-400 border border-slate-700 rounded px-3 py-1">
                {move || item_count_label(count.get())}
            </span>
        </header>
    }
}
