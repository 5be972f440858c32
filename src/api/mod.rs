pub mod client;
pub mod cookies;
pub mod projects;
pub mod screens;
pub mod session;
pub mod types;
pub mod url;

#[cfg(test)]
pub(crate) mod test_server;

pub use client::ProttClient;
pub use projects::index_projects;
pub use types::Project;

use crate::error::Result;
use reqwest::StatusCode;
use std::path::Path;

/// Operations of the Prott API used by the upload command
#[allow(async_fn_in_trait)]
pub trait ProttApi {
    async fn login(&self, email: &str, password: &str) -> Result<()>;

    async fn list_projects(&self) -> Result<Vec<Project>>;

    async fn upload_screen(
        &self,
        project: &Project,
        screen_name: &str,
        path: &Path,
    ) -> Result<StatusCode>;
}

impl ProttApi for ProttClient {
    async fn login(&self, email: &str, password: &str) -> Result<()> {
        ProttClient::login(self, email, password).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        ProttClient::list_projects(self).await
    }

    async fn upload_screen(
        &self,
        project: &Project,
        screen_name: &str,
        path: &Path,
    ) -> Result<StatusCode> {
        ProttClient::upload_screen(self, project, screen_name, path).await
    }
}
