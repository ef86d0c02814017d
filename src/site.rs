//! The single forward pass that builds the site tree.

use crate::error::{Result, SiteError};
use crate::outputs::{chapters, index};
use crate::rewrite::RewriteRules;
use crate::utils::list_dir_sorted;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info, instrument, warn};

/// Where the inputs live and where the site is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    /// Document that becomes `index.md`.
    pub root_document: PathBuf,
    /// Directory holding one subdirectory per part.
    pub content_dir: PathBuf,
    /// Output root, mirroring `content_dir`.
    pub output_dir: PathBuf,
}

impl Default for SiteLayout {
    fn default() -> Self {
        Self {
            root_document: PathBuf::from("README.md"),
            content_dir: PathBuf::from("content"),
            output_dir: PathBuf::from("docs"),
        }
    }
}

/// Counts reported at the end of a build.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub parts_written: usize,
    pub parts_skipped: usize,
    pub chapters_written: usize,
}

/// Build the whole site.
///
/// Writes the index page, then walks every part under the content
/// directory in sorted order. Parts without chapters get an empty output
/// directory and are otherwise skipped. Entries of the content directory
/// that are not directories are ignored.
///
/// Output files are overwritten, so running twice over unchanged input
/// yields identical output.
///
/// # Errors
///
/// The first I/O failure or naming violation aborts the build; files
/// written before it are left in place.
#[instrument(level = "info", skip_all, fields(output = %layout.output_dir.display()))]
pub async fn build_site(layout: &SiteLayout, rules: &RewriteRules) -> Result<BuildSummary> {
    fs::create_dir_all(&layout.output_dir)
        .await
        .map_err(|e| SiteError::io(&layout.output_dir, e))?;

    index::write_index(&layout.root_document, &layout.output_dir, rules).await?;

    if !fs::metadata(&layout.content_dir)
        .await
        .map_err(|e| SiteError::io(&layout.content_dir, e))?
        .is_dir()
    {
        return Err(SiteError::NotADirectory(layout.content_dir.clone()));
    }

    let mut summary = BuildSummary::default();
    for entry in list_dir_sorted(&layout.content_dir).await? {
        if !entry.is_dir {
            debug!(name = %entry.display_name(), "Ignoring non-directory entry in content root");
            continue;
        }

        let dir_name = entry
            .to_str()
            .ok_or_else(|| SiteError::PartName(entry.display_name()))?;
        let part = chapters::load_part(&layout.content_dir, dir_name).await?;
        let written =
            chapters::write_part(&part, &layout.content_dir, &layout.output_dir, rules).await?;
        if written == 0 {
            warn!(part = %part.dir_name, "Part has no chapters; skipping");
            summary.parts_skipped += 1;
        } else {
            summary.parts_written += 1;
            summary.chapters_written += written;
        }
    }

    info!(
        parts = summary.parts_written,
        skipped = summary.parts_skipped,
        chapters = summary.chapters_written,
        "Site built"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;
    use std::path::Path;
    use tempfile::TempDir;

    fn layout_in(dir: &Path) -> SiteLayout {
        SiteLayout {
            root_document: dir.join("README.md"),
            content_dir: dir.join("content"),
            output_dir: dir.join("docs"),
        }
    }

    fn fixture() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        stdfs::write(
            root.join("README.md"),
            "* [x](https://github.com/downdemo/Cpp-Templates-2ed/blob/master/content/PartA/01 foo.md)\n",
        )
        .unwrap();

        let basics = root.join("content/Part1 Basics");
        stdfs::create_dir_all(&basics).unwrap();
        stdfs::write(basics.join("02 Class Templates.md"), "## Stack\n").unwrap();
        stdfs::write(
            basics.join("01 Function Templates.md"),
            "See https://en.cppreference.com/w/cpp/language/function_template\n",
        )
        .unwrap();
        stdfs::write(basics.join("03 Nontype Parameters.md"), "## Arrays\n").unwrap();

        let single = root.join("content/Part2 Advanced");
        stdfs::create_dir_all(&single).unwrap();
        stdfs::write(single.join("01 Traits.md"), "traits\n").unwrap();

        stdfs::create_dir_all(root.join("content/Part3 Empty")).unwrap();
        stdfs::write(root.join("content/.nojekyll"), "").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_build_site_end_to_end() {
        let dir = fixture();
        let layout = layout_in(dir.path());

        let summary = build_site(&layout, &RewriteRules::default()).await.unwrap();
        assert_eq!(
            summary,
            BuildSummary {
                parts_written: 2,
                parts_skipped: 1,
                chapters_written: 4,
            }
        );

        let docs = dir.path().join("docs");
        let index = stdfs::read_to_string(docs.join("index.md")).unwrap();
        assert!(index.contains("[x](PartA/01 foo.html)"));

        let first = stdfs::read_to_string(docs.join("Part1 Basics/01 Function Templates.md")).unwrap();
        assert!(first.contains("description: Basics-Function Templates\n"));
        assert!(first.contains("**[Home](../../index.html)**\nSee https://zh.cppreference.com/"));
        assert!(first.ends_with("**[Next: 02 Class Templates](02%20Class%20Templates.html)**"));

        let middle = stdfs::read_to_string(docs.join("Part1 Basics/02 Class Templates.md")).unwrap();
        assert!(middle.contains("**[Back: 01 Function Templates](01%20Function%20Templates.html)**"));
        assert!(middle.ends_with("**[Next: 03 Nontype Parameters](03%20Nontype%20Parameters.html)**"));

        let last = stdfs::read_to_string(docs.join("Part1 Basics/03 Nontype Parameters.md")).unwrap();
        assert!(last.contains("**[Back: 02 Class Templates](02%20Class%20Templates.html)**"));
        assert!(last.ends_with("**[Home](../../index.html)**"));

        let only = stdfs::read_to_string(docs.join("Part2 Advanced/01 Traits.md")).unwrap();
        assert_eq!(only.matches("**[Home](../../index.html)**").count(), 2);

        assert!(docs.join("Part3 Empty").is_dir());
        assert!(!docs.join(".nojekyll").exists());
    }

    #[tokio::test]
    async fn test_build_site_twice_is_byte_identical() {
        let dir = fixture();
        let layout = layout_in(dir.path());
        let rules = RewriteRules::default();
        let page = dir.path().join("docs/Part1 Basics/02 Class Templates.md");

        build_site(&layout, &rules).await.unwrap();
        let first_index = stdfs::read(dir.path().join("docs/index.md")).unwrap();
        let first_page = stdfs::read(&page).unwrap();

        build_site(&layout, &rules).await.unwrap();
        assert_eq!(stdfs::read(dir.path().join("docs/index.md")).unwrap(), first_index);
        assert_eq!(stdfs::read(&page).unwrap(), first_page);
    }

    #[tokio::test]
    async fn test_build_site_bad_part_name_aborts() {
        let dir = fixture();
        stdfs::create_dir_all(dir.path().join("content/Appendix")).unwrap();

        let result = build_site(&layout_in(dir.path()), &RewriteRules::default()).await;
        assert!(matches!(result, Err(SiteError::PartName(name)) if name == "Appendix"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_build_site_ignores_non_utf8_stray_file() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = fixture();
        stdfs::write(
            dir.path().join("content").join(OsStr::from_bytes(b"stray\xff.txt")),
            "",
        )
        .unwrap();

        let summary = build_site(&layout_in(dir.path()), &RewriteRules::default())
            .await
            .unwrap();
        assert_eq!(summary.chapters_written, 4);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_build_site_non_utf8_part_is_part_name_error() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = fixture();
        stdfs::create_dir(dir.path().join("content").join(OsStr::from_bytes(b"Part4 \xff")))
            .unwrap();

        let result = build_site(&layout_in(dir.path()), &RewriteRules::default()).await;
        assert!(matches!(result, Err(SiteError::PartName(name)) if name == "Part4 \u{fffd}"));
    }

    #[tokio::test]
    async fn test_build_site_missing_content_dir() {
        let dir = tempfile::tempdir().unwrap();
        stdfs::write(dir.path().join("README.md"), "# hi\n").unwrap();

        let result = build_site(&layout_in(dir.path()), &RewriteRules::default()).await;
        assert!(matches!(result, Err(SiteError::Io { .. })));
    }

    #[tokio::test]
    async fn test_build_site_content_path_is_file() {
        let dir = tempfile::tempdir().unwrap();
        stdfs::write(dir.path().join("README.md"), "# hi\n").unwrap();
        stdfs::write(dir.path().join("content"), "").unwrap();

        let result = build_site(&layout_in(dir.path()), &RewriteRules::default()).await;
        assert!(matches!(result, Err(SiteError::NotADirectory(_))));
    }
}
