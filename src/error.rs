//! Error types for site generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a site build.
///
/// Nothing is recovered internally: any of these propagates up to `main`
/// and ends the run.
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("chapter file name does not match `NN <name>.md`: {0:?}")]
    ChapterName(String),

    #[error("part directory name does not match `Part<d> <description>`: {0:?}")]
    PartName(String),

    #[error("expected a directory: {0}")]
    NotADirectory(PathBuf),
}

impl SiteError {
    /// Attach the offending path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SiteError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
