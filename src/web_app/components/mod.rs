// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Reusable atomic components (inputs, buttons, alerts, Loading)
// - auth.rs: Branding and layout shared by the login and register pages
// - product.rs: Marketplace components (ProductCard, CategoryTabs, etc.)

pub mod auth;
pub mod common;
pub mod product;

// Re-export commonly used components for convenience
pub use auth::*;
pub use common::*;
pub use product::*;
