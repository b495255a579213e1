// web_app/flows/mod.rs - View logic without the view
//
// Each page delegates its submit / fetch handling to a flow that only knows
// the collaborator traits (MarketplaceApi, SessionStore, Navigator,
// FormStatus, CatalogState). The pages bind signals to them; the tests bind fakes.

pub mod login;
pub mod marketplace;
pub mod register;
pub mod status;

pub use login::{LoginFlow, LoginOutcome, LOGIN_FAILED};
pub use marketplace::{
    fetch_products, filter_products, item_count_label, next_filter, render_state, shows_header,
    CatalogState, MarketplaceFlow, MarketplaceRender, CATALOG_UNAVAILABLE,
};
pub use register::{RegisterFlow, RegisterOutcome, REGISTERED_MESSAGE, REGISTRATION_FAILED};
pub use status::{FormStatus, LoadingGuard};

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use marketplace::SignalCatalog;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use status::SignalFormStatus;
