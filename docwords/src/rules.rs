//! Exclusion rules applied while counting
//!
//! Three kinds of exclusion are supported:
//! - regular expressions whose matches are stripped from a paragraph before
//!   its words are counted,
//! - paragraph styles whose paragraphs are ignored entirely,
//! - a pair of outline titles delimiting the counted region of the document.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// In-text citation such as `(Smith, 2014)` or `(see Doe et al. 1999, p. 4)`:
/// a parenthesized span containing a four digit year starting with 1 or 2
pub const CITATIONS: &str = r"\([^\)]*?[12][0-9]{3}.*?\)";

static CITATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CITATIONS).expect("citation pattern is a valid regex"));

/// Errors that can occur while building a rule set
#[derive(Error, Debug)]
pub enum RulesError {
    /// A configured exclusion pattern does not compile
    #[error("Invalid exclusion pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Compilation error from the regex engine
        #[source]
        source: regex::Error,
    },
}

/// Immutable set of exclusion rules, built before counting starts
#[derive(Debug, Clone, Default)]
pub struct ExclusionRules {
    patterns: Vec<Regex>,
    styles: Vec<String>,
    start_after: Option<String>,
    stop_before: Option<String>,
}

impl ExclusionRules {
    /// Create an empty rule set: nothing is stripped or excluded
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rule set that strips in-text citations
    pub fn with_default_citations() -> Self {
        Self::new().ignore(CITATION_PATTERN.clone())
    }

    /// Strip every match of `pattern` before counting
    ///
    /// Patterns are applied in the order they were added.
    pub fn ignore(mut self, pattern: Regex) -> Self {
        self.patterns.push(pattern);
        self
    }

    /// Compile `pattern` and strip its matches before counting
    pub fn ignore_pattern(self, pattern: &str) -> Result<Self, RulesError> {
        let regex = Regex::new(pattern).map_err(|source| RulesError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(self.ignore(regex))
    }

    /// Ignore every paragraph with the given style identifier
    ///
    /// Style identifiers are compared case-insensitively.
    pub fn ignore_style(mut self, style_id: impl Into<String>) -> Self {
        self.styles.push(style_id.into());
        self
    }

    /// Only start counting once an outline paragraph with this title is seen
    pub fn start_after(mut self, title: &str) -> Self {
        self.start_after = Some(title.trim().to_string());
        self
    }

    /// Stop counting at the outline paragraph with this title
    pub fn stop_before(mut self, title: &str) -> Self {
        self.stop_before = Some(title.trim().to_string());
        self
    }

    /// Configured exclusion patterns, in application order
    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    /// Configured excluded style identifiers
    pub fn ignored_styles(&self) -> &[String] {
        &self.styles
    }

    /// Title of the outline paragraph that opens the counted region
    pub fn start_title(&self) -> Option<&str> {
        self.start_after.as_deref()
    }

    /// Title of the outline paragraph that closes the counted region
    pub fn stop_title(&self) -> Option<&str> {
        self.stop_before.as_deref()
    }

    /// Remove every match of every pattern from `text`
    ///
    /// Each pattern runs over the output of the previous one, in configured
    /// order.
    pub fn strip_ignored_substrings(&self, text: &str) -> String {
        let mut stripped = text.to_string();
        for pattern in &self.patterns {
            let replaced = pattern.replace_all(&stripped, "").into_owned();
            stripped = replaced;
        }
        stripped
    }

    /// Whether paragraphs of this style are excluded
    pub fn is_excluded_style(&self, style_id: &str) -> bool {
        self.styles
            .iter()
            .any(|excluded| eq_ignore_case(excluded, style_id))
    }

    /// Every substring of `text` matched by any pattern, pattern by pattern
    pub fn matches<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.patterns
            .iter()
            .flat_map(|pattern| pattern.find_iter(text).map(|m| m.as_str()))
            .collect()
    }
}

/// Unicode case-insensitive comparison of style identifiers and titles
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
