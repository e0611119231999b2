//! The counting pass
//!
//! A single fold over the document's body paragraphs. Every paragraph lands
//! in exactly one of three buckets (counted, ignored because it lies outside
//! the counted region, ignored because of its style) and additionally
//! contributes the words of its text boxes to the text box total.

use crate::boundary::BoundaryTracker;
use crate::document::{Document, Paragraph};
use crate::outline;
use crate::rules::ExclusionRules;
use crate::textbox::words_in_textboxes;
use crate::trace::{Trace, TraceEntry, TraceReason};
use crate::words::WordCounter;

/// Word count per top-level section, in order of first appearance
///
/// Paragraphs before the first depth-0 heading are filed under the empty
/// title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionBreakdown {
    entries: Vec<(String, usize)>,
}

impl SectionBreakdown {
    /// Add `words` to the section, creating it at the end if new
    pub fn add(&mut self, title: &str, words: usize) {
        match self.entries.iter_mut().find(|(t, _)| t == title) {
            Some((_, count)) => *count += words,
            None => self.entries.push((title.to_string(), words)),
        }
    }

    /// Count for a section title
    pub fn get(&self, title: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, count)| *count)
    }

    /// Sections and counts in order of first appearance
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no paragraph was counted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum over all sections
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }
}

/// Outcome of a counting pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountingResult {
    /// Words in counted paragraphs
    pub counted: usize,
    /// Words in paragraphs outside the counted region or with excluded styles
    pub ignored: usize,
    /// Words inside text boxes
    pub textbox: usize,
    /// Per-section breakdown of `counted`
    pub sections: SectionBreakdown,
    /// Trace lines, empty unless the pass was traced
    pub trace: Vec<TraceEntry>,
}

impl CountingResult {
    /// `counted + ignored + textbox`
    pub fn total(&self) -> usize {
        self.counted + self.ignored + self.textbox
    }

    /// `[counted, ignored, textbox, total]`
    pub fn as_array(&self) -> [usize; 4] {
        [self.counted, self.ignored, self.textbox, self.total()]
    }
}

/// Which bucket a paragraph's words went to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Counted towards the total and the section breakdown
    Counted,
    /// Ignored, the paragraph is outside the counted region
    OutsideRegion,
    /// Ignored, the paragraph's style is excluded
    ExcludedStyle(String),
}

/// Count the words of `document` under `rules`
pub fn run(document: &Document, rules: &ExclusionRules) -> CountingResult {
    count(document, rules, false)
}

/// Like [`run`], additionally recording a trace of everything ignored
pub fn run_traced(document: &Document, rules: &ExclusionRules) -> CountingResult {
    count(document, rules, true)
}

fn count(document: &Document, rules: &ExclusionRules, traced: bool) -> CountingResult {
    let counter = WordCounter::new(rules);
    let mut tracker = BoundaryTracker::new(rules);
    let mut trace = Trace::new(traced);
    let mut result = CountingResult::default();

    for paragraph in document.paragraphs() {
        let boxed = words_in_textboxes(paragraph);
        result.textbox += boxed.words;
        trace.record(TraceReason::Textbox, &boxed.text);

        if let Some(depth) = outline::outline_depth(paragraph, document.styles()) {
            tracker.observe_outline(paragraph.text(), depth);
        }

        let words = counter.count(paragraph.text());
        match dispose(paragraph, &tracker, rules) {
            Disposition::OutsideRegion => {
                result.ignored += words;
                trace.record(TraceReason::OutsideRegion, paragraph.text().trim());
            }
            Disposition::ExcludedStyle(style) => {
                result.ignored += words;
                trace.record(TraceReason::Style(style), paragraph.text().trim());
            }
            Disposition::Counted => {
                result.counted += words;
                result.sections.add(tracker.current_section(), words);
                if log::log_enabled!(log::Level::Debug) {
                    log::debug!(
                        "Counted {} words: {}",
                        words,
                        rules.strip_ignored_substrings(paragraph.text()).trim()
                    );
                }
            }
        }

        if trace.is_enabled() {
            for matched in rules.matches(paragraph.text()) {
                trace.record(TraceReason::Pattern, matched);
            }
        }
    }

    log::info!(
        "Counted {} words, ignored {}, {} in text boxes",
        result.counted,
        result.ignored,
        result.textbox
    );
    result.trace = trace.into_entries();
    result
}

/// Decide the bucket of a paragraph given the current boundary state
pub fn dispose(
    paragraph: &Paragraph,
    tracker: &BoundaryTracker<'_>,
    rules: &ExclusionRules,
) -> Disposition {
    if !tracker.is_counting() {
        return Disposition::OutsideRegion;
    }
    match paragraph.style_id() {
        Some(style) if rules.is_excluded_style(style) => {
            Disposition::ExcludedStyle(style.to_string())
        }
        _ => Disposition::Counted,
    }
}
