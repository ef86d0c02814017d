//! # Chapter Site
//!
//! Builds the input tree of a static documentation site from a book laid
//! out as numbered Markdown chapters.
//!
//! ## Input Layout
//!
//! ```text
//! README.md                      -> docs/index.md
//! content/
//! ├── Part1 Basics/
//! │   ├── 01 Function Templates.md
//! │   └── 02 Class Templates.md
//! └── Part2 Advanced/
//!     └── 01 Traits.md
//! ```
//!
//! ## Usage
//!
//! ```sh
//! chapter_site            # from the repository root
//! chapter_site -o ./site
//! ```
//!
//! ## Pipeline
//!
//! 1. **Index**: rewrite the root document's links into `index.md`
//! 2. **Parts**: for each part, in name order, write every chapter with a
//!    front-matter header and previous/next navigation
//!
//! The output is Markdown with front matter; a downstream static-site
//! renderer turns it into HTML.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod error;
mod models;
mod outputs;
mod rewrite;
mod site;
mod utils;

use cli::Cli;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("chapter_site starting up");

    let args = Cli::parse();
    debug!(?args.root_document, ?args.content_dir, ?args.output_dir, "Parsed CLI arguments");

    let layout = args.layout();
    let rules = args.rewrite_rules();

    if let Err(e) = ensure_writable_dir(&layout.output_dir).await {
        error!(
            path = %layout.output_dir.display(),
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e.into());
    }

    let summary = match site::build_site(&layout, &rules).await {
        Ok(summary) => summary,
        Err(e) => {
            error!(error = %e, "Site build failed");
            return Err(e.into());
        }
    };

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        parts = summary.parts_written,
        skipped = summary.parts_skipped,
        chapters = summary.chapters_written,
        "Execution complete"
    );

    Ok(())
}
