use thiserror::Error;

/// Failures that abort a protter run.
///
/// Paths that are not exported artboards and artboards whose project is
/// unknown are not errors; the walker skips them.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad or missing command-line input
    #[error("invalid argument: {0}")]
    Argument(String),

    /// HTTP client or session cookie store could not be set up
    #[error("could not set up HTTP client: {0}")]
    Client(String),

    /// Sign-in rejected or the service was unreachable
    #[error("login failed: {0}")]
    Auth(String),

    /// Project listing unavailable or malformed
    #[error("failed to get projects: {0}")]
    Fetch(String),

    /// Artboard file unreadable or the upload request could not be sent
    #[error("failed to upload {path}: {reason}")]
    Upload { path: String, reason: String },

    /// Directory traversal failed
    #[error("failed to walk directory: {0}")]
    Walk(String),
}

pub type Result<T> = std::result::Result<T, Error>;
