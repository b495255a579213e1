// web_app/pages/marketplace.rs - Marketplace page component
//
// Binds a `SignalCatalog` to a `MarketplaceFlow`. The flow fetches the feed
// once after mount; the tabs only change the filter signal, and the view is
// recomputed from the already-fetched list.

use leptos::prelude::*;

use crate::web_app::api::HttpApi;
use crate::web_app::app::use_app_config;
use crate::web_app::components::*;
use crate::web_app::flows::{
    render_state, shows_header, MarketplaceFlow, MarketplaceRender, SignalCatalog,
};
use crate::web_app::model::CategoryFilter;

/// Marketplace page
#[component]
pub fn MarketplacePage() -> impl IntoView {
    let config = use_app_config();
    let catalog = SignalCatalog::new();
    let flow = MarketplaceFlow::new(HttpApi::new(&config), catalog);

    let load_flow = flow.clone();
    let load_action = Action::new_local(move |_: &()| {
        let flow = load_flow.clone();
        async move { flow.load().await }
    });

    // Effects only run in the browser, once per mount
    Effect::new(move |_| {
        load_action.dispatch(());
    });

    let on_select = Callback::new(move |selected: CategoryFilter| {
        flow.select(selected);
    });

    let view_state = Memo::new(move |_| {
        catalog
            .fetched
            .with(|fetched| catalog.filter.with(|current| render_state(fetched.as_ref(), current)))
    });
    let loaded = Memo::new(move |_| view_state.with(shows_header));
    let count = Signal::derive(move || view_state.with(MarketplaceRender::item_count));

    view! {
        <div class="min-h-screen bg-slate-950 text-slate-100">
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
                // Header and filters appear once the feed is in
                <Show when=move || loaded.get()>
                    <MarketplaceHeader count=count />
                    <div class="mb-8">
                        <CategoryTabs selected=Signal::from(catalog.filter) on_select=on_select />
                    </div>
                </Show>

                // Content
                {move || match view_state.get() {
                    MarketplaceRender::Loading => {
                        view! { <Loading message=">_ SCANNING MARKETPLACE..." /> }.into_any()
                    }
                    MarketplaceRender::Failed(message) => {
                        view! { <ErrorDisplay error=message /> }.into_any()
                    }
                    MarketplaceRender::Empty => view! { <EmptySector /> }.into_any(),
                    MarketplaceRender::Grid(visible) => {
                        view! { <ProductGrid products=visible /> }.into_any()
                    }
                }}
            </main>
        </div>
    }
}
