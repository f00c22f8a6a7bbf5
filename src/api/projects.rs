//! Project Bindings
//!
//! Frontend bindings for project documents.

use crate::models::Project;

pub async fn list_projects() -> Result<Vec<Project>, String> {
    super::get_json("/project/getall").await
}

pub async fn get_project(id: &str) -> Result<Project, String> {
    super::get_json(&format!("/project/get/{id}")).await
}
