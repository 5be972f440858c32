//! Recognizes exported artboard images by their location on disk
//!
//! Sketch exports artboards as `.../exportedArtboards/<project>/<screen>.png`.
//! The directory between `exportedArtboards` and the file names the Prott
//! project, the file stem names the screen.

use std::path::{Component, Path, PathBuf};

/// Directory Sketch exports artboards into
pub const EXPORT_DIR: &str = "exportedArtboards";

/// Extension of exported artboard images
pub const IMAGE_EXTENSION: &str = ".png";

/// An exported artboard image found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artboard {
    /// Path relative to the export directory without the file name, joined
    /// with `/`; empty when the image sits directly in the export directory
    pub project_name: String,
    /// File name without the image extension
    pub screen_name: String,
    pub path: PathBuf,
}

/// Matches paths against the artboard export layout
#[derive(Debug, Clone)]
pub struct ArtboardMatcher {
    export_dir: String,
    extension: String,
}

impl Default for ArtboardMatcher {
    fn default() -> Self {
        Self::new(EXPORT_DIR, IMAGE_EXTENSION)
    }
}

impl ArtboardMatcher {
    pub fn new(export_dir: &str, extension: &str) -> Self {
        Self {
            export_dir: export_dir.to_string(),
            extension: extension.to_string(),
        }
    }

    /// Match a path, returning `None` if it is not an exported artboard
    ///
    /// The first component named exactly like the export directory anchors
    /// the match. Everything after it must be plain names, and the last one
    /// must end in the image extension.
    pub fn matches(&self, path: &Path) -> Option<Artboard> {
        let mut components = path.components();

        components
            .by_ref()
            .find(|c| c.as_os_str() == self.export_dir.as_str())?;

        let mut rest = components
            .map(|c| match c {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;

        let file_name = rest.pop()?;
        let screen_name = file_name.strip_suffix(self.extension.as_str())?;

        Some(Artboard {
            project_name: rest.join("/"),
            screen_name: screen_name.to_string(),
            path: path.to_path_buf(),
        })
    }
}
