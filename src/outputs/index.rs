//! Root document transform.
//!
//! The root document (usually `README.md`) becomes the site's `index.md`.
//! Only the repository link rewrite is applied: no front matter, no
//! navigation links.

use crate::error::{Result, SiteError};
use crate::rewrite::RewriteRules;
use crate::utils::normalize_newlines;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

/// File name of the generated index page.
pub const INDEX_FILE_NAME: &str = "index.md";

/// Copy the root document to `<output_dir>/index.md`, rewriting its links.
///
/// Line endings are normalised to `\n`.
///
/// # Returns
///
/// The path of the written index page.
///
/// # Errors
///
/// Returns [`SiteError::Io`] if the root document cannot be read as UTF-8
/// or the index page cannot be written.
#[instrument(level = "info", skip_all, fields(root = %root_document.display()))]
pub async fn write_index(
    root_document: &Path,
    output_dir: &Path,
    rules: &RewriteRules,
) -> Result<PathBuf> {
    let source = fs::read_to_string(root_document)
        .await
        .map_err(|e| SiteError::io(root_document, e))?;

    let rewritten = rules.rewrite_repository_link(&normalize_newlines(&source));

    let index_path = output_dir.join(INDEX_FILE_NAME);
    fs::write(&index_path, rewritten)
        .await
        .map_err(|e| SiteError::io(&index_path, e))?;
    info!(path = %index_path.display(), "Wrote index page");
    Ok(index_path)
}
