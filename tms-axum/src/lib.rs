#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the tms-core crate.
//! [tms_core]: https://docs.rs/tms_core/latest/tms_core/index.html
#![doc = include_str!("../README.md")]

mod bid_routes;
mod guard;
mod tender_routes;

use aide::{
    axum::{ApiRouter, routing::get_with},
    openapi::OpenApi,
    transform::TransformOperation,
};
use axum::Extension;
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tms_core::{
    models::{Filter, Page},
    ports::Application,
};
use tower_http::cors::CorsLayer;
use tracing::{Level, event};

mod openapi;
pub use openapi::document;
use openapi::{api_docs, docs_routes};

pub mod config;
use config::AxumConfig;

pub mod error;
pub mod extract;

/// The identity a request claims. There is no authentication beyond looking
/// the username up in the directory.
#[derive(Deserialize, JsonSchema, validator::Validate)]
pub(crate) struct Caller {
    /// The username of the employee making the request
    #[validate(length(min = 1, max = 50))]
    username: String,
}

pub(crate) fn default_limit() -> u32 {
    Page::DEFAULT_LIMIT
}

/// An optional filter from a repeated query parameter; absent means any value.
pub(crate) fn any_of<T>(values: Vec<T>) -> Option<Filter<T>> {
    if values.is_empty() {
        None
    } else {
        Some(Filter::from(values))
    }
}

/// Liveness probe
async fn ping() -> String {
    "ok".to_owned()
}

fn ping_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Check server availability")
        .description("Answers `ok` as long as the server is able to handle requests.")
}

/// The documented routes, without state or documentation endpoints
fn api_router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route_with("/ping", get_with(ping, ping_docs), |route| {
            route.tag("health")
        })
        .nest("/tenders", tender_routes::router())
        .nest("/bids", bid_routes::router())
}

/// Construct a full API router with the given state and config
pub fn router<T: ApiApplication>(state: T, config: AxumConfig) -> axum::Router {
    let mut api = OpenApi::default();
    api_router::<T>()
        .nest_api_service("/docs", docs_routes())
        .finish_api_with(&mut api, api_docs)
        .layer(Extension(Arc::new(api))) // Arc is very important here or you will face massive memory and performance issues
        .layer(Extension(Arc::new(config)))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Starts the HTTP server with the provided configuration
pub async fn start_server<T: ApiApplication>(
    config: AxumConfig,
    app: T,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    event!(
        Level::INFO,
        "Listening for requests on {}",
        listener.local_addr()?
    );

    let service = router(app, config);
    axum::serve(listener, service).await
}

/// Axum imposes all sorts of constraints on what can pass for state. This
/// trait, coupled with a blanket implementation, specifies it all upfront and
/// in one place. If a function takes a generic `T: ApiApplication`, then
/// everything one might reasonably want to do should work.
pub trait ApiApplication:
    Clone + Send + Sync + 'static + Application<Repository: Send + Sync + 'static>
{
}

// this is the blanket implementation
impl<T> ApiApplication for T where
    T: Clone + Send + Sync + 'static + Application<Repository: Send + Sync + 'static>
{
}
