use log::debug;
use poi_core::FetchError;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, RequestInit, Response, Window};

use crate::utils::describe;

/// Fetch a text resource, giving up after `timeout_ms`.
///
/// The timer aborts the request through an `AbortController`, which also
/// cancels a body that is still streaming.
pub async fn fetch_text(window: &Window, url: &str, timeout_ms: u32) -> Result<String, FetchError> {
    let controller = AbortController::new().map_err(|e| FetchError::Network(describe(&e)))?;
    let init = RequestInit::new();
    init.set_signal(Some(&controller.signal()));

    let abort = controller.clone();
    let on_timeout = Closure::<dyn FnMut()>::wrap(Box::new(move || abort.abort()));
    let timer = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            on_timeout.as_ref().unchecked_ref(),
            timeout_ms.min(i32::MAX as u32) as i32,
        )
        .map_err(|e| FetchError::Network(describe(&e)))?;

    let result = read_text(window, url, &init).await;
    window.clear_timeout_with_handle(timer);
    drop(on_timeout);

    match result {
        Err(FetchError::Network(_) | FetchError::Body(_)) if controller.signal().aborted() => {
            Err(FetchError::Timeout(timeout_ms))
        }
        other => other,
    }
}

async fn read_text(window: &Window, url: &str, init: &RequestInit) -> Result<String, FetchError> {
    let resp_value = JsFuture::from(window.fetch_with_str_and_init(url, init))
        .await
        .map_err(|e| FetchError::Network(describe(&e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| FetchError::Network(describe(&e)))?;
    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }
    let text_promise = resp.text().map_err(|e| FetchError::Body(describe(&e)))?;
    let text_js = JsFuture::from(text_promise)
        .await
        .map_err(|e| FetchError::Body(describe(&e)))?;
    let text = text_js
        .as_string()
        .ok_or_else(|| FetchError::Body("response body is not text".to_string()))?;
    debug!("fetched {} ({} bytes)", url, text.len());
    Ok(text)
}

/// Try each URL in order and return the first body that loads.
pub async fn fetch_text_with_fallbacks(
    window: &Window,
    urls: &[String],
    timeout_ms: u32,
) -> Result<String, FetchError> {
    let mut last = FetchError::Status(404);
    for url in urls {
        match fetch_text(window, url, timeout_ms).await {
            Ok(text) => return Ok(text),
            Err(e) => {
                debug!("{}: {}", url, e);
                last = e;
            }
        }
    }
    Err(last)
}
