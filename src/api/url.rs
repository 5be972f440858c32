use crate::error::{Error, Result};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://prottapp.com";

const SIGN_IN_PATH: &str = "users/sign_in.json";
const PROJECTS_PATH: &str = "api/sketch_app/projects.json";
const SCREENS_PATH: &str = "api/sketch_app/screens.json";

/// Resolved endpoint URLs of the Prott API
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub sign_in: Url,
    pub projects: Url,
    pub screens: Url,
}

impl Endpoints {
    /// Build the endpoints under a base URL
    ///
    /// Supports formats:
    /// - `https://prottapp.com`
    /// - `https://prottapp.com/`
    /// - `http://localhost:3000/prott` (endpoints are nested under the path)
    pub fn parse(base: &str) -> Result<Self> {
        let base = base.trim();
        let mut url =
            Url::parse(base).map_err(|e| Error::Argument(format!("base URL {:?}: {}", base, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Argument(format!(
                "base URL must be http or https, got {}",
                url.scheme()
            )));
        }
        if url.host_str().is_none() {
            return Err(Error::Argument(format!("base URL {:?} has no host", base)));
        }

        // Url::join drops the last segment unless the path ends with a slash
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        url.set_fragment(None);

        let join = |path: &str| {
            url.join(path)
                .map_err(|e| Error::Argument(format!("endpoint {}: {}", path, e)))
        };

        Ok(Self {
            sign_in: join(SIGN_IN_PATH)?,
            projects: join(PROJECTS_PATH)?,
            screens: join(SCREENS_PATH)?,
        })
    }
}
