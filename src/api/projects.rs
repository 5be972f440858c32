use super::client::ProttClient;
use super::types::{Project, ProjectsResponse};
use crate::error::{Error, Result};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use std::collections::HashMap;

impl ProttClient {
    /// Get every project of every account the user belongs to
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let response = self
            .http()
            .get(self.endpoints().projects.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;

        decode_projects(status, &body)
    }
}

/// Decode a projects listing and flatten its accounts
///
/// Only an exact 200 is accepted. Project order across accounts follows the
/// map iteration and is not stable.
pub(crate) fn decode_projects(status: StatusCode, body: &[u8]) -> Result<Vec<Project>> {
    if status != StatusCode::OK {
        return Err(Error::Fetch(format!("HTTP {}", status)));
    }
    if body.is_empty() {
        return Err(Error::Fetch("empty response body".to_string()));
    }

    let accounts: ProjectsResponse =
        serde_json::from_slice(body).map_err(|e| Error::Fetch(format!("invalid JSON: {}", e)))?;

    Ok(accounts
        .into_values()
        .flat_map(|account| account.projects)
        .collect())
}

/// Index projects by name; on duplicate names the later project wins
pub fn index_projects(projects: Vec<Project>) -> HashMap<String, Project> {
    projects
        .into_iter()
        .map(|project| (project.name.clone(), project))
        .collect()
}
