//! Naming helpers and file system utilities.
//!
//! This module provides helper functions used throughout the generator:
//! - Label extraction from chapter file names and part directory names
//! - Directory listing in a deterministic order
//! - Line-ending normalisation of document text
//! - File system validation for the output directory

use crate::error::{Result, SiteError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ffi::OsString;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument};

static CHAPTER_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{2} (.*)\.md$").expect("chapter name pattern"));

static PART_DESCRIPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Part\d (.*)").expect("part description pattern"));

/// Extract the chapter name from a `NN <name>.md` file name.
///
/// # Errors
///
/// Returns [`SiteError::ChapterName`] when the file name does not match.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(extract_chapter_name("01 Introduction.md")?, "Introduction");
/// assert!(extract_chapter_name("bad-name.md").is_err());
/// ```
pub fn extract_chapter_name(file_name: &str) -> Result<String> {
    CHAPTER_NAME
        .captures(file_name)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| SiteError::ChapterName(file_name.to_string()))
}

/// Extract the description from a `Part<d> <description>` directory name.
///
/// # Errors
///
/// Returns [`SiteError::PartName`] when the directory name does not match.
pub fn extract_part_description(dir_name: &str) -> Result<String> {
    PART_DESCRIPTION
        .captures(dir_name)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| SiteError::PartName(dir_name.to_string()))
}

/// Drop a trailing `.md` extension, if any.
pub fn strip_md_extension(file_name: &str) -> &str {
    file_name.strip_suffix(".md").unwrap_or(file_name)
}

/// Turn `\r\n` and lone `\r` line endings into `\n`.
pub fn normalize_newlines(text: &str) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    }
}

/// An entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryName {
    /// Raw file name; not necessarily valid UTF-8.
    pub name: OsString,
    pub is_dir: bool,
}

impl DirEntryName {
    /// The name as UTF-8, or `None` if it is not valid UTF-8.
    pub fn to_str(&self) -> Option<&str> {
        self.name.to_str()
    }

    /// The name with invalid UTF-8 replaced, for logs and errors.
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }
}

/// List a directory, sorted lexicographically by entry name.
///
/// The platform's enumeration order is not portable; sorting makes the
/// `NN ` prefixes of chapters (and `Part<d>` prefixes) decide the order.
///
/// # Errors
///
/// Returns [`SiteError::Io`] if the directory cannot be read. Names are
/// not checked here; callers decide which entries they need as UTF-8.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub async fn list_dir_sorted(path: &Path) -> Result<Vec<DirEntryName>> {
    let mut reader = fs::read_dir(path)
        .await
        .map_err(|e| SiteError::io(path, e))?;

    let mut entries = Vec::new();
    while let Some(entry) = reader
        .next_entry()
        .await
        .map_err(|e| SiteError::io(path, e))?
    {
        let is_dir = entry
            .file_type()
            .await
            .map_err(|e| SiteError::io(entry.path(), e))?
            .is_dir();
        entries.push(DirEntryName {
            name: entry.file_name(),
            is_dir,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(count = entries.len(), "Listed directory");
    Ok(entries)
}

/// Ensure a directory exists and is writable.
///
/// This function creates the directory if it doesn't exist, then performs
/// a write test by creating and immediately deleting a probe file.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The directory is not writable (permission denied, read-only filesystem, etc.)
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| SiteError::io(path, e))?;
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = path.join("..__probe_write__");
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(SiteError::io(path, e)),
    }
}
