#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio_site::{app::*, content::SITE_CONTENT};
    use tower::ServiceBuilder;
    use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // parse embedded content up front so a bad build fails at startup, not on first request
    log::info!(
        "loaded content for {} ({} sections)",
        SITE_CONTENT.profile.full_name(),
        SITE_CONTENT.navigation.len()
    );

    let conf = get_configuration(None).expect("Leptos configuration should be readable");
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
        .on_response(DefaultOnResponse::new().level(tracing::Level::INFO));

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(ServiceBuilder::new().layer(trace))
        .with_state(leptos_options);

    log::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("Couldn't bind {addr}: {e}"));
    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        log::error!("server exited: {e}");
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
