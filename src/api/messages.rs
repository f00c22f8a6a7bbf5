//! Message Bindings
//!
//! Frontend bindings for the contact form endpoint.

use crate::models::{ContactMessage, MessageAck};

/// POST the contact form. The acknowledgement is not envelope-wrapped;
/// the backend answers `{ message }` directly.
pub async fn send_message(message: &ContactMessage) -> Result<MessageAck, String> {
    let body = serde_json::to_string(message).map_err(|e| e.to_string())?;
    let json = super::request("POST", "/messages/send", Some(body)).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}
