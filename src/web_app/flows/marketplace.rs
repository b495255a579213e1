// web_app/flows/marketplace.rs - Product list fetch and category filtering
//
// The list is fetched once per page mount. Filtering runs over the fetched
// list in memory and never triggers another request.
//
// `MarketplaceFlow` holds the API and a `CatalogState`; the page backs the
// state with signals, the tests with plain cells.

use crate::web_app::api::MarketplaceApi;
use crate::web_app::error::ApiError;
use crate::web_app::model::{CategoryFilter, Product};

/// Shown in place of the grid when the product feed could not be loaded
pub const CATALOG_UNAVAILABLE: &str = "Marketplace feed unavailable";

/// The mutually exclusive states of the marketplace page
#[derive(Clone, Debug, PartialEq)]
pub enum MarketplaceRender {
    /// Fetch still in flight
    Loading,
    /// Fetch failed; kept distinct from an empty result
    Failed(String),
    /// Fetch done, nothing matches the current filter
    Empty,
    Grid(Vec<Product>),
}

impl MarketplaceRender {
    /// Number of products shown, zero for the non-grid states
    pub fn item_count(&self) -> usize {
        match self {
            MarketplaceRender::Grid(products) => products.len(),
            _ => 0,
        }
    }
}

/// Fetched product list plus the selected category, as the page sees them
pub trait CatalogState {
    /// Marks the fetch as started; `false` when it already was
    fn claim_fetch(&self) -> bool;
    fn store(&self, fetched: Result<Vec<Product>, ApiError>);
    fn with_fetched<R>(&self, f: impl FnOnce(Option<&Result<Vec<Product>, ApiError>>) -> R) -> R;
    fn filter(&self) -> CategoryFilter;
    fn set_filter(&self, filter: CategoryFilter);
}

/// Marketplace page logic over an API and a catalog state
#[derive(Clone)]
pub struct MarketplaceFlow<A, S> {
    pub api: A,
    pub state: S,
}

impl<A: MarketplaceApi, S: CatalogState> MarketplaceFlow<A, S> {
    pub fn new(api: A, state: S) -> Self {
        Self { api, state }
    }

    /// Fetches the product list unless a fetch was already started
    pub async fn load(&self) {
        if !self.state.claim_fetch() {
            tracing::debug!("marketplace products already requested");
            return;
        }
        let fetched = fetch_products(&self.api).await;
        self.state.store(fetched);
    }

    /// Applies a tab click; returns whether the filter changed
    pub fn select(&self, selected: CategoryFilter) -> bool {
        match next_filter(&self.state.filter(), selected) {
            Some(next) => {
                self.state.set_filter(next);
                true
            }
            None => false,
        }
    }

    pub fn render(&self) -> MarketplaceRender {
        let filter = self.state.filter();
        self.state.with_fetched(|fetched| render_state(fetched, &filter))
    }
}

/// Fetches the full product list, logging the outcome
pub async fn fetch_products<A: MarketplaceApi>(api: &A) -> Result<Vec<Product>, ApiError> {
    match api.list_products().await {
        Ok(products) => {
            tracing::info!(count = products.len(), "marketplace products loaded");
            Ok(products)
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to load marketplace products");
            Err(err)
        }
    }
}

/// Products that pass the category filter, in fetch order
pub fn filter_products(products: &[Product], filter: &CategoryFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|product| filter.matches(product))
        .cloned()
        .collect()
}

/// Maps the fetch state and the current filter onto what the page shows
pub fn render_state(
    fetched: Option<&Result<Vec<Product>, ApiError>>,
    filter: &CategoryFilter,
) -> MarketplaceRender {
    match fetched {
        None => MarketplaceRender::Loading,
        Some(Err(err)) => MarketplaceRender::Failed(err.user_message(CATALOG_UNAVAILABLE)),
        Some(Ok(products)) => {
            let visible = filter_products(products, filter);
            if visible.is_empty() {
                MarketplaceRender::Empty
            } else {
                MarketplaceRender::Grid(visible)
            }
        }
    }
}

/// New filter to store, `None` when the selection is already active
pub fn next_filter(current: &CategoryFilter, selected: CategoryFilter) -> Option<CategoryFilter> {
    (*current != selected).then_some(selected)
}

/// Whether the page header is shown; it appears once the fetch succeeded
pub fn shows_header(render: &MarketplaceRender) -> bool {
    matches!(render, MarketplaceRender::Empty | MarketplaceRender::Grid(_))
}

/// Header counter, e.g. `1 ITEM` / `12 ITEMS`
pub fn item_count_label(count: usize) -> String {
    if count == 1 {
        "1 ITEM".to_string()
    } else {
        format!("{} ITEMS", count)
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use signals::SignalCatalog;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
mod signals {
    use leptos::prelude::*;

    use super::CatalogState;
    use crate::web_app::error::ApiError;
    use crate::web_app::model::{CategoryFilter, Product};

    /// `CatalogState` backed by Leptos signals
    ///
    /// The trait reads are untracked; views subscribe to the signals directly.
    #[derive(Clone, Copy)]
    pub struct SignalCatalog {
        pub requested: RwSignal<bool>,
        pub fetched: RwSignal<Option<Result<Vec<Product>, ApiError>>>,
        pub filter: RwSignal<CategoryFilter>,
    }

    impl SignalCatalog {
        pub fn new() -> Self {
            Self {
                requested: RwSignal::new(false),
                fetched: RwSignal::new(None),
                filter: RwSignal::new(CategoryFilter::All),
            }
        }
    }

    impl Default for SignalCatalog {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogState for SignalCatalog {
        fn claim_fetch(&self) -> bool {
            if self.requested.get_untracked() {
                return false;
            }
            self.requested.set(true);
            true
        }

        fn store(&self, fetched: Result<Vec<Product>, ApiError>) {
            self.fetched.set(Some(fetched));
        }

        fn with_fetched<R>(&self, f: impl FnOnce(Option<&Result<Vec<Product>, ApiError>>) -> R) -> R {
            self.fetched.with_untracked(|fetched| f(fetched.as_ref()))
        }

        fn filter(&self) -> CategoryFilter {
            self.filter.get_untracked()
        }

        fn set_filter(&self, filter: CategoryFilter) {
            self.filter.set(filter);
        }
    }
}
