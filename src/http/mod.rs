use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use axum::extract::Request;
use hyper::Response;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::{CompressionBody, CompressionLayer};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer, MaxAge};
use tower_http::trace::TraceLayer;
use tracing::field::Empty;
use tracing::Span;

use crate::global::Global;

pub mod error;
pub mod routes;

/// The dashboard only ever reads, so CORS is open for `GET`.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(AllowMethods::list([hyper::Method::GET]))
        .allow_headers(AllowHeaders::any())
        .max_age(MaxAge::exact(Duration::from_secs(3600)))
}

pub fn app(global: Arc<Global>) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request| {
                    tracing::info_span!(
                        "gateway",
                        method = %req.method(),
                        path = %req.uri().path(),
                        status = Empty,
                        latency_ms = Empty,
                    )
                })
                .on_request(())
                .on_response(|res: &Response<CompressionBody<axum::body::Body>>, latency: Duration, span: &Span| {
                    let status = res.status();
                    span.record("status", status.as_u16());
                    span.record("latency_ms", latency.as_millis() as u64);

                    if status.is_server_error() {
                        tracing::warn!("request failed");
                    } else {
                        tracing::info!("request served");
                    }
                })
                .on_failure(()),
        )
        .layer(CompressionLayer::new().gzip(true))
        .layer(cors_layer());

    Router::new()
        .merge(routes::routes())
        .fallback(not_found)
        .with_state(global)
        .layer(middleware)
}

async fn not_found() -> error::ApiError {
    error::ApiError::not_found(error::ApiErrorCode::RouteNotFound, "route not found")
}

/// Serve the gateway until the listener fails. Returns at once when the api
/// is disabled in the configuration.
#[tracing::instrument(name = "HTTP", skip_all)]
pub async fn run(global: Arc<Global>) -> anyhow::Result<()> {
    let api = &global.config.api;
    if !api.enabled {
        tracing::warn!("http api is disabled, nothing to serve");
        return Ok(());
    }

    let listener = tokio::net::TcpListener::bind(api.bind)
        .await
        .with_context(|| format!("failed to bind {}", api.bind))?;

    tracing::info!(bind = %api.bind, "gateway listening");

    let service = app(global.clone()).into_make_service_with_connect_info::<SocketAddr>();
    axum::serve(listener, service).await.context("gateway stopped")
}
