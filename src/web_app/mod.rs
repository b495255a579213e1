// web_app/mod.rs - Root module for the Leptos web application
//
// This module contains all the components and logic for the Pentest Lab
// front end: login, registration and the marketplace.
//
// Architecture:
// - model/, error.rs, config.rs, paths.rs: Plain data and settings (no Leptos)
// - api/: Backend REST client behind the `MarketplaceApi` trait
// - session/, navigation.rs: Collaborators a successful login talks to
// - flows/: Submit and fetch logic, testable without a browser
// - theme.rs, components/, pages/, app.rs: Leptos views (SSR and hydrate)

pub mod api;
pub mod config;
pub mod error;
pub mod flows;
pub mod model;
pub mod navigation;
pub mod paths;
pub mod session;

// Views are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod theme;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
