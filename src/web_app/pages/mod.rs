// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - LoginPage: Credential form, session commit and post-login redirect
// - RegisterPage: Account creation with client-side password confirmation
// - MarketplacePage: Product feed with category tabs

pub mod login;
pub mod marketplace;
pub mod register;

// Re-export page components
pub use login::LoginPage;
pub use marketplace::MarketplacePage;
pub use register::RegisterPage;
