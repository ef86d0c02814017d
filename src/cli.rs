//! Command-line interface definitions for the site generator.
//!
//! Every option defaults to the repository layout convention, so running
//! the binary with no arguments from the repository root builds `docs/`
//! from `README.md` and `content/`.

use crate::rewrite::{DEFAULT_REPOSITORY_URL, RewriteRules};
use crate::site::SiteLayout;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the site generator.
///
/// # Examples
///
/// ```sh
/// # Conventional layout
/// chapter_site
///
/// # Different output root
/// chapter_site -o ./site
///
/// # Another repository's absolute links
/// chapter_site --repository-url https://github.com/OWNER/REPO/blob/master/
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Document copied to `<output-dir>/index.md`
    #[arg(short, long, env = "CHAPTER_SITE_ROOT_DOCUMENT", default_value = "README.md")]
    pub root_document: PathBuf,

    /// Directory holding the `Part<d> <description>` directories
    #[arg(short, long, env = "CHAPTER_SITE_CONTENT_DIR", default_value = "content")]
    pub content_dir: PathBuf,

    /// Output root for the generated site
    #[arg(short, long, env = "CHAPTER_SITE_OUTPUT_DIR", default_value = "docs")]
    pub output_dir: PathBuf,

    /// Repository blob URL prefix stripped from absolute links
    #[arg(long, env = "CHAPTER_SITE_REPOSITORY_URL", default_value = DEFAULT_REPOSITORY_URL)]
    pub repository_url: String,
}

impl Cli {
    pub fn layout(&self) -> SiteLayout {
        SiteLayout {
            root_document: self.root_document.clone(),
            content_dir: self.content_dir.clone(),
            output_dir: self.output_dir.clone(),
        }
    }

    /// Rewrite rules; the content prefix is the content directory's last
    /// component followed by `/`.
    pub fn rewrite_rules(&self) -> RewriteRules {
        let content_prefix = self
            .content_dir
            .file_name()
            .map(|n| format!("{}/", n.to_string_lossy()))
            .unwrap_or_default();
        RewriteRules {
            repository_url: self.repository_url.clone(),
            content_prefix,
        }
    }
}
