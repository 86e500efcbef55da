//! OpenAPI document and an interactive viewer. Mounted in development only.

use crate::error::{ErrorBody, ErrorDetail};
use crate::model::{Address, Customer, CustomerRequest, CustomerRequestAddress, CustomerResponse};
use axum::{
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::customers::get_customer,
        crate::handlers::customers::create_customer
    ),
    components(schemas(
        Customer,
        Address,
        CustomerRequest,
        CustomerRequestAddress,
        CustomerResponse,
        ErrorBody,
        ErrorDetail
    )),
    tags((name = "customers", description = "Customer records"))
)]
pub struct ApiDoc;

const DOCS_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Customers API</title>
    <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
    <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
  </head>
  <body>
    <elements-api apiDescriptionUrl="/openapi.json" router="hash" layout="sidebar"></elements-api>
  </body>
</html>
"#;

/// GET /openapi.json, GET /docs.
pub fn docs_routes() -> Router {
    // Built once, served as static JSON.
    let doc = Arc::new(ApiDoc::openapi());
    Router::new()
        .route(
            "/openapi.json",
            get(move || {
                let doc = doc.clone();
                async move { ([(header::CACHE_CONTROL, "no-store")], Json(doc.as_ref().clone())).into_response() }
            }),
        )
        .route("/docs", get(|| async { Html(DOCS_HTML) }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_customer_paths() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert!(doc["paths"]["/api/customers"]["post"].is_object());
        assert!(doc["paths"]["/api/customers/{id}"]["get"].is_object());
        assert!(doc["components"]["schemas"]["Customer"].is_object());
    }

    #[test]
    fn use_alt_path_is_documented_as_deprecated() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let params = doc["paths"]["/api/customers/{id}"]["get"]["parameters"]
            .as_array()
            .unwrap();
        let flag = params.iter().find(|p| p["name"] == "useAltPath").unwrap();
        assert_eq!(flag["in"], "query");
        assert!(flag["description"]
            .as_str()
            .unwrap()
            .starts_with("Deprecated"));
    }
}
