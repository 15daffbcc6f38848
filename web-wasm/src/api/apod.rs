//! APOD dataset loading
//!
//! One GET against a fixed CDN URL, cache bypassed so repeat fetches
//! see dataset updates. Errors come back as [`FetchError`] so the UI
//! can show them verbatim.

use apod_gallery_common::{ApodEntry, FetchError, FetchResult};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

const APOD_DATA_URL: &str = "https://cdn.jsdelivr.net/gh/GCA-Classroom/apod/data.json";

/// Fetches the full APOD dataset.
pub async fn fetch_dataset() -> FetchResult<Vec<ApodEntry>> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_cache(RequestCache::NoStore);

    let request = Request::new_with_str_and_init(APOD_DATA_URL, &opts).map_err(js_error)?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| FetchError::Network("fetch returned a non-Response value".to_string()))?;

    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;

    serde_wasm_bindgen::from_value(json).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Maps a thrown JS value onto [`FetchError::Network`], keeping the
/// `Error.message` text when one is present.
fn js_error(value: JsValue) -> FetchError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .unwrap_or_else(|| format!("{value:?}"));
    FetchError::Network(message)
}
