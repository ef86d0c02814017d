//! Front-matter header prefixed to every chapter page.

/// Render the front-matter block for a page.
///
/// `title` and `description` are inserted verbatim; the downstream site
/// renderer decides what to make of characters it treats specially.
pub fn front_matter(title: &str, description: &str) -> String {
    format!("---\nlayout: default\ntitle: {title}\ndescription: {description}\n---\n\n")
}
