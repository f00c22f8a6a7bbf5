//! Profile Bindings
//!
//! Frontend bindings for the site owner's profile document.

use crate::models::Profile;

/// Owner profile shared by the About section and the footer
pub async fn get_profile() -> Result<Profile, String> {
    super::get_json("/user/portfolio").await
}
