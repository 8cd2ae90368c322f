//! Client-side download of server-produced artifacts.
//!
//! The generation endpoints answer with a path under the server's `/tmp/`
//! directory. Downloading means synthesizing a transient anchor element
//! with the `download` attribute set and clicking it; the element is never
//! attached to the document and is garbage-collected once unreferenced.
//!
//! TRADE-OFFS
//! ==========
//! Triggering a download is browser-only behavior; SSR paths safely no-op.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// Derive the suggested download filename from a server artifact path.
///
/// Takes the last path segment, so `/tmp/out_report.sql` suggests
/// `out_report.sql`. A path with a trailing slash or an empty path yields
/// an empty name; the path itself is never validated.
pub fn download_file_name(path: &str) -> String {
    path.rsplit('/').next().unwrap_or_default().to_owned()
}

/// Start a browser download of `path`, suggesting `filename`.
pub fn trigger_download(path: &str, filename: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(element) = document.create_element("a") else {
            return;
        };
        let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() else {
            return;
        };
        anchor.set_href(path);
        anchor.set_download(filename);
        anchor.click();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, filename);
    }
}
