use super::client::ProttClient;
use super::types::Project;
use crate::error::{Error, Result};
use crate::output;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use std::path::Path;

impl ProttClient {
    /// Upload an artboard image as a new screen of `project`
    ///
    /// The response status is printed and returned but not checked: a
    /// rejected upload does not stop the run.
    pub async fn upload_screen(
        &self,
        project: &Project,
        screen_name: &str,
        path: &Path,
    ) -> Result<StatusCode> {
        let upload_error = |reason: String| Error::Upload {
            path: path.display().to_string(),
            reason,
        };

        let content = tokio::fs::read(path)
            .await
            .map_err(|e| upload_error(e.to_string()))?;
        let form = screen_form(project, screen_name, path, content)
            .map_err(|e| upload_error(e.to_string()))?;

        let response = self
            .http()
            .post(self.endpoints().screens.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| upload_error(e.to_string()))?;

        let status = response.status();
        output::print_status(&status_line(status));
        output::print_status(&format!("{} {}", project.name, screen_name));
        Ok(status)
    }
}

/// Build the multipart body of a screen upload
///
/// Field names and the file name are sent verbatim, not percent-encoded.
pub(crate) fn screen_form(
    project: &Project,
    screen_name: &str,
    path: &Path,
    content: Vec<u8>,
) -> reqwest::Result<Form> {
    let file = Part::bytes(content)
        .file_name(path.display().to_string())
        .mime_str("application/octet-stream")?;

    Ok(Form::new()
        .percent_encode_noop()
        .text("project_id", project.id.clone())
        // TODO: send the Sketch artboard id once the export exposes it
        .text("screen[sketch_artboard_id]", screen_name.to_string())
        .text("screen[name]", screen_name.to_string())
        .part("screen[file]", file))
}

/// Status line in the form `201 Created`
pub(crate) fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
