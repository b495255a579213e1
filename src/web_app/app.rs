// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, the session and theme providers, and the client
// configuration every page reads its endpoints and timings from.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::config::AppConfig;
use crate::web_app::pages::{LoginPage, MarketplacePage, RegisterPage};
use crate::web_app::paths;
use crate::web_app::session::SessionProvider;
use crate::web_app::theme::ThemeProvider;

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Client configuration context
/// - Session and theme providers
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();
    provide_context(AppConfig::load());

    view! {
        // HTML meta tags
        <Title text="Pentest Lab" />
        <Meta name="description" content="Pentest Lab marketplace and member access" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link (Tailwind CSS)
        <Stylesheet id="leptos" href="/pkg/pentest_lab_web.css" />

        <SessionProvider>
            <ThemeProvider>
                // Router setup
                <Router>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=MarketplacePage />
                        <Route path=path!("/marketplace") view=MarketplacePage />
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/register") view=RegisterPage />
                    </Routes>
                </Router>
            </ThemeProvider>
        </SessionProvider>
    }
}

/// Client configuration provided by `App`, or the defaults outside of it
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::load)
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-950 flex items-center justify-center font-mono">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-emerald-500/40 mb-4">"404"</h1>
                <p class="text-xl text-slate-400 mb-8">">_ Route not found"</p>
                <a
                    href=paths::MARKETPLACE
                    class="px-6 py-3 bg-emerald-600 text-white rounded-lg hover:bg-emerald-500 transition-colors"
                >
                    "Back to Marketplace"
                </a>
            </div>
        </div>
    }
}

/// HTML document the server renders around `App`
#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options=options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
