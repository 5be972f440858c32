use crate::artboard::{Artboard, ArtboardMatcher};
use crate::error::{Error, Result};
use glob::{Paths, Pattern};
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Recursive scan of a directory yielding the exported artboards under it
///
/// Entries that are not artboards are skipped. A traversal error is yielded
/// as `Err`; callers stop at the first one.
pub struct ArtboardWalker<I = Paths> {
    entries: I,
    matcher: ArtboardMatcher,
}

impl ArtboardWalker {
    pub fn new(root: &Path, matcher: ArtboardMatcher) -> Result<Self> {
        let pattern = format!("{}/**/*", Pattern::escape(&root.to_string_lossy()));
        let entries = glob::glob(&pattern).map_err(|e| Error::Walk(e.to_string()))?;
        Ok(Self { entries, matcher })
    }
}

impl<I, E> ArtboardWalker<I>
where
    I: Iterator<Item = std::result::Result<PathBuf, E>>,
{
    /// Match artboards from an already listed sequence of paths
    pub fn from_entries(entries: I, matcher: ArtboardMatcher) -> Self {
        Self { entries, matcher }
    }
}

impl<I, E> Iterator for ArtboardWalker<I>
where
    I: Iterator<Item = std::result::Result<PathBuf, E>>,
    E: Display,
{
    type Item = Result<Artboard>;

    fn next(&mut self) -> Option<Self::Item> {
        for entry in self.entries.by_ref() {
            match entry {
                Ok(path) => {
                    if let Some(artboard) = self.matcher.matches(&path) {
                        return Some(Ok(artboard));
                    }
                }
                Err(e) => return Some(Err(Error::Walk(e.to_string()))),
            }
        }
        None
    }
}
