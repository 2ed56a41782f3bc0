//! Network fetching with timeout support.

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

/// Outcome of racing a promise against a timer.
#[derive(Debug)]
pub enum RaceResult {
    Completed(JsValue),
    TimedOut,
    Error(String),
}

/// Race a promise against a `setTimeout` of `timeout_ms`.
///
/// The timer promise resolves to `undefined`, which is how a timeout is told
/// apart from a completed fetch.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    let timer = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let contenders = Array::of2(&promise, &timer);
    match JsFuture::from(Promise::race(&contenders)).await {
        Ok(value) if value.is_undefined() => RaceResult::TimedOut,
        Ok(value) => RaceResult::Completed(value),
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

/// Fetch a URL and parse the body as JSON.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let text = fetch_text(url).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// GET a URL as text, giving up after `FETCH_TIMEOUT_MS`.
async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| FetchError::RequestCreationFailed)?;

    let response = match race_with_timeout(window.fetch_with_request(&request), FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => return Err(FetchError::Timeout),
        RaceResult::Error(msg) => return Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(value) => value
            .dyn_into::<Response>()
            .map_err(|_| FetchError::InvalidContent)?,
    };

    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    let body = response.text().map_err(|_| FetchError::ResponseReadFailed)?;
    JsFuture::from(body)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?
        .as_string()
        .ok_or(FetchError::InvalidContent)
}
