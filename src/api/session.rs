use super::client::ProttClient;
use super::types::LoginRequest;
use crate::error::{Error, Result};
use reqwest::StatusCode;

impl ProttClient {
    /// Sign in with email and password
    ///
    /// The response body is ignored; the session cookie it sets stays in the
    /// client's cookie store for later requests.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let response = self
            .http()
            .post(self.endpoints().sign_in.clone())
            .json(&LoginRequest::new(email, password))
            .send()
            .await
            .map_err(|e| Error::Auth(e.to_string()))?;

        check_sign_in(response.status())
    }
}

/// Any 2xx status counts as a successful sign-in
pub(crate) fn check_sign_in(status: StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(Error::Auth(format!("invalid login (HTTP {})", status)))
    }
}
