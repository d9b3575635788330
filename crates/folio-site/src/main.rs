//! Folio portfolio server
//!
//! Serves the server-rendered page, the compiled client bundle and a health
//! check.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::{routing::get, Router};
    use folio_core::SiteContent;
    use folio_site::{app::App, config::SiteConfig, routes};
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::{services::ServeDir, trace::TraceLayer};
    use tracing::info;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let config = SiteConfig::default();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let content = SiteContent::bundled().context("Bundled site content is invalid")?;
    info!(
        "Loaded content for {} ({} projects)",
        content.brand,
        content.work.projects.len()
    );

    let conf = get_configuration(None)
        .await
        .context("Failed to read Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app = move || view! { <App content=content.clone()/> };
    let route_list = generate_route_list(app.clone());

    let router = Router::new()
        .route("/health", get(routes::health_check))
        .leptos_routes(&leptos_options, route_list, app.clone())
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .fallback(leptos_axum::file_and_error_handler(app))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Portfolio listening on http://{}", addr);
    axum::serve(listener, router.into_make_service())
        .await
        .context("Server error")?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // The browser bundle starts from `folio_site::hydrate`.
}
