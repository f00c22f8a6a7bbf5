//! Software Application Bindings
//!
//! Frontend bindings for software application documents.

use crate::models::SoftwareApp;

pub async fn list_apps() -> Result<Vec<SoftwareApp>, String> {
    super::get_json("/softwareapplications/getall").await
}
