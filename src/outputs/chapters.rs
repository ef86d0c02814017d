//! Part walker: writes every chapter of a part with navigation links.
//!
//! # Page Layout
//!
//! ```text
//! ---                                   front matter
//! layout: default
//! title: 02 Class Templates
//! description: Basics-Class Templates
//! ---
//!
//! **[Back: 01 Function Templates](01%20Function%20Templates.html)**
//! <chapter body>
//! **[Next: 03 Nontype Parameters](03%20Nontype%20Parameters.html)**
//! ```
//!
//! The first chapter's back link and the last chapter's next link point
//! home instead.

use crate::error::{Result, SiteError};
use crate::models::{Chapter, NavLink, Part};
use crate::outputs::front_matter::front_matter;
use crate::rewrite::RewriteRules;
use crate::utils::{list_dir_sorted, normalize_newlines};
use itertools::Itertools;
use std::fmt::Write;
use std::iter;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument};

/// A chapter together with its neighbours in navigation order.
pub type ChapterWindow<'a> = (Option<&'a Chapter>, &'a Chapter, Option<&'a Chapter>);

/// Walk chapters as `(previous, current, next)` windows.
pub fn chapter_windows(chapters: &[Chapter]) -> impl Iterator<Item = ChapterWindow<'_>> {
    iter::once(None)
        .chain(chapters.iter().map(Some))
        .chain(iter::once(None))
        .tuple_windows()
        .filter_map(|(previous, current, next)| current.map(|c| (previous, c, next)))
}

/// Render one chapter page from its body.
pub fn render_chapter(
    part: &Part,
    (previous, chapter, next): ChapterWindow<'_>,
    body: &str,
    rules: &RewriteRules,
) -> String {
    let mut page = front_matter(&chapter.title, &part.chapter_description(chapter));

    let back = NavLink::back(previous);
    if previous.is_some() {
        write!(page, "{back}    ").unwrap();
    } else {
        write!(page, "{back}").unwrap();
    }
    page.push('\n');
    page.push_str(&rules.rewrite_external_reference(body));
    page.push('\n');
    write!(page, "{}", NavLink::next(next)).unwrap();
    page
}

/// Read a part directory into a [`Part`] with its chapters in sorted order.
///
/// # Errors
///
/// Fails if the directory cannot be listed, or if the directory name or any
/// entry name breaks the naming convention.
#[instrument(level = "debug", skip_all, fields(part = %dir_name))]
pub async fn load_part(content_dir: &Path, dir_name: &str) -> Result<Part> {
    let entries = list_dir_sorted(&content_dir.join(dir_name)).await?;
    let names = entries
        .iter()
        .map(|e| e.to_str().ok_or_else(|| SiteError::ChapterName(e.display_name())))
        .collect::<Result<Vec<_>>>()?;
    Part::new(dir_name, &names)
}

/// Write every chapter of `part` to `<output_dir>/<part dir>/`.
///
/// The part's output directory is created if missing, even for a part
/// with no chapters.
///
/// # Returns
///
/// The number of chapter pages written.
#[instrument(level = "info", skip_all, fields(part = %part.dir_name, chapters = part.chapters.len()))]
pub async fn write_part(
    part: &Part,
    content_dir: &Path,
    output_dir: &Path,
    rules: &RewriteRules,
) -> Result<usize> {
    let input_dir = content_dir.join(&part.dir_name);
    let part_output_dir = output_dir.join(&part.dir_name);
    fs::create_dir_all(&part_output_dir)
        .await
        .map_err(|e| SiteError::io(&part_output_dir, e))?;

    let mut written = 0;
    for window in chapter_windows(&part.chapters) {
        let (_, chapter, _) = window;
        let input_path = input_dir.join(&chapter.file_name);
        let output_path = part_output_dir.join(&chapter.file_name);

        let body = fs::read_to_string(&input_path)
            .await
            .map_err(|e| SiteError::io(&input_path, e))?;
        let body = normalize_newlines(&body);
        let page = render_chapter(part, window, &body, rules);
        fs::write(&output_path, page)
            .await
            .map_err(|e| SiteError::io(&output_path, e))?;

        debug!(path = %output_path.display(), "Wrote chapter");
        written += 1;
    }

    info!(written, "Wrote part");
    Ok(written)
}
