//! Skill Bindings
//!
//! Frontend bindings for skill documents.

use crate::models::Skill;

pub async fn list_skills() -> Result<Vec<Skill>, String> {
    super::get_json("/skill/getall").await
}
