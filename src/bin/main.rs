// Leptos web application server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering)
// - A forwarding proxy from /api/* to the REST backend
// - Static file serving

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use anyhow::Context;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use pentest_lab_web::server::{self, proxy, ServerConfig};
    use pentest_lab_web::web_app::app::{shell, App as WebApp};

    // Initialize logging
    server::init_tracing();

    // Load environment variables (.env included)
    let config = ServerConfig::from_env().context("invalid server configuration")?;
    let client = proxy::build_client(&config).context("failed to build backend HTTP client")?;

    tracing::info!(backend = %config.backend_url, "forwarding /api to backend");

    // Leptos configuration
    let conf = leptos_config::get_configuration(None).context("could not read leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    let config_data = web::Data::new(config);
    let client_data = web::Data::new(client);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options = leptos_options.clone();
        let site_root_str = site_root.to_string();

        App::new()
            .app_data(config_data.clone())
            .app_data(client_data.clone())
            // Backend calls from the browser
            .route("/api/{tail:.*}", web::to(proxy::forward))
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            // Leptos routes for SSR
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(web::Data::new(leptos_options))
    })
    .bind(&addr)
    .with_context(|| format!("failed to bind {addr}"))?
    .run()
    .await
    .context("server terminated with an error")
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
