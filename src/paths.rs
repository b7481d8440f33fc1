//! Project path resolution.
//!
//! Everything the generator touches hangs off one root directory (by default
//! the process working directory): the `photos/` tree it reads and the
//! `index.html` it writes. Resolving all three up front means the rest of the
//! pipeline works with absolute paths and never consults the cwd again.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory under the root that holds one subdirectory per section.
pub const PHOTOS_DIR_NAME: &str = "photos";

/// Output document written at the root.
pub const OUTPUT_FILE_NAME: &str = "index.html";

#[derive(Error, Debug)]
pub enum PathsError {
    #[error("cannot resolve project root {root}: {source}")]
    Root {
        root: PathBuf,
        source: std::io::Error,
    },
}

/// The three absolute paths the pipeline operates on.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub photos_dir: PathBuf,
    pub output_file: PathBuf,
}

impl ProjectPaths {
    /// Resolve the project paths from a root argument.
    ///
    /// Fails only when the root itself cannot be canonicalized (absent or
    /// unreadable). The photos directory is allowed to be missing — the
    /// scanner treats that as an empty gallery, not an error.
    pub fn resolve(root: &Path) -> Result<Self, PathsError> {
        let root = root.canonicalize().map_err(|source| PathsError::Root {
            root: root.to_path_buf(),
            source,
        })?;
        Ok(Self {
            photos_dir: root.join(PHOTOS_DIR_NAME),
            output_file: root.join(OUTPUT_FILE_NAME),
            root,
        })
    }
}
