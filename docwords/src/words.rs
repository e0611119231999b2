//! Word counting primitive

use crate::rules::ExclusionRules;

/// Number of whitespace-delimited tokens in `text`
///
/// Leading, trailing and repeated whitespace produce no empty tokens, so an
/// empty or whitespace-only string counts as zero words.
pub fn count_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Counts words after stripping the substrings the rule set ignores
#[derive(Debug, Clone, Copy)]
pub struct WordCounter<'a> {
    rules: &'a ExclusionRules,
}

impl<'a> WordCounter<'a> {
    /// Create a counter that strips with `rules`
    pub fn new(rules: &'a ExclusionRules) -> Self {
        Self { rules }
    }

    /// Word count of `text` once ignored substrings are removed
    pub fn count(&self, text: &str) -> usize {
        count_tokens(&self.rules.strip_ignored_substrings(text))
    }
}
