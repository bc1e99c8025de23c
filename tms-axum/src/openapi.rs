//! OpenAPI documentation generation and serving.

use std::sync::Arc;

use aide::{
    axum::{ApiRouter, IntoApiResponse, routing::get},
    openapi::{OpenApi, Tag},
    transform::TransformOpenApi,
};
use axum::{
    Extension, Json,
    response::{Html, IntoResponse},
};

/// Serve the RapiDoc viewer for the OpenAPI document.
async fn serve_rapidoc() -> impl IntoApiResponse {
    let html = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8">
    <script src="https://cdnjs.cloudflare.com/ajax/libs/rapidoc/9.3.8/rapidoc-min.js" integrity="sha512-0ES6eX4K9J1PrIEjIizv79dTlN5HwI2GW9Ku6ymb8dijMHF5CIplkS8N0iFJ/wl3GybCSqBJu8HDhiFkZRAf0g==" crossorigin="anonymous" referrerpolicy="no-referrer"></script>
  </head>
  <body>
    <rapi-doc spec-url="/docs/api.json"
        show-method-in-nav-bar="as-colored-text"
        use-path-in-nav-bar="true"
    ></rapi-doc>
  </body>
</html>"#;
    Html(html).into_response()
}

/// Creates a router for documentation endpoints.
pub(crate) fn docs_routes() -> ApiRouter {
    ApiRouter::new()
        .route("/", get(serve_rapidoc))
        .route("/api.json", get(serve_docs))
}

/// Serve the raw OpenAPI document.
async fn serve_docs(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(api).into_response()
}

/// Configure the OpenAPI documentation metadata.
pub(crate) fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Tender Management API")
        .summary("A REST API for publishing tenders and bidding on them.")
        .description(
            "Organizations publish tenders; employees and organizations answer them with bids. \
             Every edit of a tender or bid is versioned and can be rolled back.",
        )
        .version("1.0")
        .tag(Tag {
            name: "tenders".into(),
            description: Some("Creating, listing, editing and rolling back tenders".into()),
            ..Default::default()
        })
        .tag(Tag {
            name: "bids".into(),
            description: Some("Creating, listing, editing and reviewing bids".into()),
            ..Default::default()
        })
        .tag(Tag {
            name: "health".into(),
            description: Some("Liveness of the server".into()),
            ..Default::default()
        })
}

/// Generate the OpenAPI document without serving anything.
pub fn document<T: crate::ApiApplication>() -> OpenApi {
    let mut api = OpenApi::default();
    let _ = crate::api_router::<T>().finish_api_with(&mut api, api_docs);
    api
}
