//! TrademarkDesk Marketing Site
//!
//! A Leptos SSR marketing website.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use leptos::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower::ServiceExt;
use tower_http::services::ServeDir;

mod app;
mod components;
mod pages;

use app::App;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).await.unwrap();
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, App)
        .fallback(file_and_error_handler)
        .nest_service("/assets", ServeDir::new("assets"))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Marketing site listening on http://{}", addr);
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

/// Serve a static file from the site root when one matches the URI,
/// otherwise render the app (which shows its own not-found view).
async fn file_and_error_handler(
    uri: Uri,
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> Response {
    let root = options.site_root.clone();

    match get_static_file(uri, &root).await {
        Ok(res) if res.status() == StatusCode::OK => res,
        _ => {
            let handler = leptos_axum::render_app_to_stream(options.to_owned(), App);
            handler(req).await.into_response()
        }
    }
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response, StatusCode> {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .map_err(|_| StatusCode::BAD_REQUEST)?;

    ServeDir::new(root)
        .oneshot(req)
        .await
        .map(IntoResponse::into_response)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}
