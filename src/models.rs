//! Data models for the content tree.
//!
//! - [`Chapter`]: one Markdown document inside a part
//! - [`Part`]: a content directory holding an ordered list of chapters
//! - [`NavLink`]: a previous/next link between chapters, or back home
//!
//! Labels are derived from file system names, so constructing a model
//! validates the naming convention.

use crate::error::Result;
use crate::utils::{extract_chapter_name, extract_part_description, strip_md_extension};
use std::fmt;

/// A chapter file such as `01 Introduction.md`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    /// File name as found on disk; also the output file name.
    pub file_name: String,
    /// File name without `.md`, used as the page title.
    pub title: String,
    /// Name after the two-digit prefix (`Introduction`).
    pub name: String,
}

impl Chapter {
    /// Build a chapter from its file name.
    ///
    /// # Errors
    ///
    /// Fails with [`SiteError::ChapterName`](crate::error::SiteError::ChapterName)
    /// if the name is not `NN <name>.md`.
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let name = extract_chapter_name(file_name)?;
        Ok(Self {
            file_name: file_name.to_string(),
            title: strip_md_extension(file_name).to_string(),
            name,
        })
    }

    /// Rendered page name, e.g. `01 Introduction.html`.
    pub fn html_name(&self) -> String {
        format!("{}.html", self.title)
    }
}

/// A part directory such as `Part1 Basics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub dir_name: String,
    /// Text after `Part<d> `, used as the description prefix of each chapter.
    pub description: String,
    /// Chapters in navigation order.
    pub chapters: Vec<Chapter>,
}

impl Part {
    /// Build a part from its directory name and the chapter file names it holds.
    pub fn new<S: AsRef<str>>(dir_name: &str, chapter_files: &[S]) -> Result<Self> {
        let description = extract_part_description(dir_name)?;
        let chapters = chapter_files
            .iter()
            .map(|f| Chapter::from_file_name(f.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            dir_name: dir_name.to_string(),
            description,
            chapters,
        })
    }

    /// Front-matter description for one of this part's chapters.
    pub fn chapter_description(&self, chapter: &Chapter) -> String {
        format!("{}-{}", self.description, chapter.name)
    }
}

/// Relative target of the home link, seen from a chapter page.
pub const HOME_TARGET: &str = "../../index.html";

/// A navigation link rendered as bold Markdown: `**[label](target)**`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub target: String,
}

impl NavLink {
    pub fn home() -> Self {
        Self {
            label: "Home".to_string(),
            target: HOME_TARGET.to_string(),
        }
    }

    /// Link to the previous chapter, or home when there is none.
    pub fn back(previous: Option<&Chapter>) -> Self {
        match previous {
            Some(c) => Self::to_chapter("Back", c),
            None => Self::home(),
        }
    }

    /// Link to the next chapter, or home when there is none.
    pub fn next(next: Option<&Chapter>) -> Self {
        match next {
            Some(c) => Self::to_chapter("Next", c),
            None => Self::home(),
        }
    }

    fn to_chapter(direction: &str, chapter: &Chapter) -> Self {
        Self {
            label: format!("{}: {}", direction, chapter.title),
            target: urlencoding::encode(&chapter.html_name()).into_owned(),
        }
    }
}

impl fmt::Display for NavLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**[{}]({})**", self.label, self.target)
    }
}
