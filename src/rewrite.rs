//! Literal link rewriting applied to every page before it is written.
//!
//! Rewriting is plain substring replacement, not URL or Markdown parsing:
//! only the exact literal prefixes in [`RewriteRules`] are touched.
//!
//! - [`RewriteRules::rewrite_external_reference`]: point reference-site links
//!   at the regional mirror
//! - [`RewriteRules::rewrite_repository_link`]: turn absolute repository links
//!   into site-relative `.html` links

/// Host prefix of the external reference documentation.
pub const EXTERNAL_REFERENCE_HOST: &str = "https://en.cppreference.com";

/// Regional mirror that replaces [`EXTERNAL_REFERENCE_HOST`].
pub const EXTERNAL_REFERENCE_MIRROR: &str = "https://zh.cppreference.com";

/// Blob URL prefix of the source repository.
pub const DEFAULT_REPOSITORY_URL: &str =
    "https://github.com/downdemo/Cpp-Templates-2ed/blob/master/";

/// Content directory prefix stripped from repository-relative links.
pub const DEFAULT_CONTENT_PREFIX: &str = "content/";

/// The set of literal substitutions used for a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRules {
    /// Absolute blob URL prefix removed from links (e.g. `https://github.com/o/r/blob/master/`).
    pub repository_url: String,
    /// Content directory prefix removed after the repository prefix.
    pub content_prefix: String,
}

impl Default for RewriteRules {
    fn default() -> Self {
        Self {
            repository_url: DEFAULT_REPOSITORY_URL.to_string(),
            content_prefix: DEFAULT_CONTENT_PREFIX.to_string(),
        }
    }
}

impl RewriteRules {
    /// Replace every occurrence of the reference host with its mirror.
    ///
    /// Everything else in `text` is left untouched.
    pub fn rewrite_external_reference(&self, text: &str) -> String {
        text.replace(EXTERNAL_REFERENCE_HOST, EXTERNAL_REFERENCE_MIRROR)
    }

    /// Convert absolute repository links into site-relative page links.
    ///
    /// Applies [`rewrite_external_reference`](Self::rewrite_external_reference),
    /// strips the repository prefix, strips the content prefix, then turns
    /// `.md)` into `.html)`. A link like `(…/x.md#anchor)` keeps its `.md`
    /// since only the literal `.md)` is matched.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let rules = RewriteRules::default();
    /// let line = "[x](https://github.com/downdemo/Cpp-Templates-2ed/blob/master/content/PartA/01 foo.md)";
    /// assert_eq!(rules.rewrite_repository_link(line), "[x](PartA/01 foo.html)");
    /// ```
    pub fn rewrite_repository_link(&self, text: &str) -> String {
        let text = self.rewrite_external_reference(text);
        let text = strip_all(&text, &self.repository_url);
        let text = strip_all(&text, &self.content_prefix);
        text.replace(".md)", ".html)")
    }
}

fn strip_all(text: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        text.to_string()
    } else {
        text.replace(prefix, "")
    }
}
