//! REST API helpers for the code-generation endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Generation returns `Result` so callers can log transport failures;
//! the inventory fetch returns `Option` so a failed load degrades to an
//! empty table list without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{GenerateKind, TableItem};
#[cfg(any(test, feature = "hydrate"))]
use super::types::CodegenRequest;

#[cfg(any(test, feature = "hydrate"))]
fn generate_request_failed_message(kind: GenerateKind, detail: &str) -> String {
    format!("generate request to {} failed: {detail}", kind.endpoint())
}

#[cfg(any(test, feature = "hydrate"))]
fn codegen_request_body(dbtype: &str, tableids: &[String]) -> CodegenRequest {
    CodegenRequest {
        dbtype: dbtype.to_owned(),
        tableids: tableids.to_vec(),
    }
}

/// Fetch the project's table inventory from `./codegen/tables`.
/// Returns `None` on failure or on the server.
pub async fn fetch_tables() -> Option<Vec<TableItem>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("./codegen/tables")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<TableItem>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Run a generation request and return the artifact path the server
/// produced.
///
/// The body is JSON `{"dbtype", "tableids"}`; the response body is read
/// as plain text. The HTTP status is deliberately not inspected: the
/// server answers 200 even for failed generation and signals errors
/// in-band through the returned path.
///
/// # Errors
///
/// Returns an error string only on transport-level failure (request
/// construction, network, or body read).
pub async fn generate(kind: GenerateKind, dbtype: &str, tableids: &[String]) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = codegen_request_body(dbtype, tableids);
        let resp = gloo_net::http::Request::post(kind.endpoint())
            .json(&body)
            .map_err(|e| generate_request_failed_message(kind, &e.to_string()))?
            .send()
            .await
            .map_err(|e| generate_request_failed_message(kind, &e.to_string()))?;
        resp.text()
            .await
            .map_err(|e| generate_request_failed_message(kind, &e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (kind, dbtype, tableids);
        Err("not available on server".to_owned())
    }
}
