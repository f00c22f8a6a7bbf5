//! Portfolio API Bindings
//!
//! Frontend bindings to the portfolio backend, organized by domain.
//! Everything goes through the browser fetch API with credentials
//! included, and every payload is unwrapped from the `{ data }` envelope
//! before it reaches a caller.

mod apps;
mod messages;
mod profile;
mod projects;
mod skills;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, RequestCredentials, RequestInit, Response};

use crate::models::Envelope;

// Re-export all public items
pub use apps::*;
pub use messages::*;
pub use profile::*;
pub use projects::*;
pub use skills::*;

/// Backend base URL
pub const API_BASE: &str = "https://portfolio-backend-deploy-jj0i.onrender.com/api/v1";

/// Error payload the backend sends alongside non-2xx statuses
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Human-readable message for a rejected JS promise
fn js_error_message(value: JsValue) -> String {
    match value.dyn_into::<js_sys::Error>() {
        Ok(error) => String::from(error.message()),
        Err(other) => format!("{other:?}"),
    }
}

async fn request(method: &str, path: &str, body: Option<String>) -> Result<JsValue, String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;

    let init = RequestInit::new();
    init.set_method(method);
    init.set_credentials(RequestCredentials::Include);
    if let Some(body) = body {
        let headers = Headers::new().map_err(js_error_message)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(js_error_message)?;
        init.set_headers(headers.as_ref());
        init.set_body(&JsValue::from_str(&body));
    }

    let url = format!("{API_BASE}{path}");
    let response = JsFuture::from(window.fetch_with_str_and_init(&url, &init))
        .await
        .map_err(js_error_message)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch returned a non-Response value".to_string())?;

    if !response.ok() {
        // Surface the backend's own message when the error body carries one.
        let fallback = format!("Request failed with status code {}", response.status());
        let message = match response.json() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|json| serde_wasm_bindgen::from_value::<ErrorBody>(json).ok())
                .and_then(|body| body.message),
            Err(_) => None,
        };
        return Err(message.unwrap_or(fallback));
    }

    let json = JsFuture::from(response.json().map_err(js_error_message)?)
        .await
        .map_err(js_error_message)?;
    Ok(json)
}

/// GET an envelope-wrapped payload
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let json = request("GET", path, None).await?;
    let envelope: Envelope<T> =
        serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())?;
    Ok(envelope.data)
}
