//! Section boundary tracking
//!
//! The counted region of a document is delimited by two optional outline
//! titles. The tracker is fed every outline paragraph in document order and
//! reports whether the paragraphs that follow are inside the counted region.
//! It also remembers the most recent top-level heading, which keys the
//! per-section breakdown.

use crate::rules::{eq_ignore_case, ExclusionRules};

/// Where the pass currently is relative to the configured boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// A start-after title is configured and has not been seen yet
    BeforeStart,
    /// Paragraphs are counted
    Counting,
    /// The stop-before title was seen
    AfterStop,
}

impl Region {
    /// Whether paragraphs in this region are counted
    pub fn is_counting(self) -> bool {
        matches!(self, Region::Counting)
    }
}

/// Boundary state for one counting pass
#[derive(Debug, Clone)]
pub struct BoundaryTracker<'a> {
    start_after: Option<&'a str>,
    stop_before: Option<&'a str>,
    region: Region,
    current_section: String,
}

impl<'a> BoundaryTracker<'a> {
    /// Create the tracker for a fresh pass
    ///
    /// Starts in [`Region::BeforeStart`] when a start-after title is
    /// configured and in [`Region::Counting`] otherwise.
    pub fn new(rules: &'a ExclusionRules) -> Self {
        let start_after = rules.start_title();
        Self {
            start_after,
            stop_before: rules.stop_title(),
            region: if start_after.is_some() {
                Region::BeforeStart
            } else {
                Region::Counting
            },
            current_section: String::new(),
        }
    }

    /// Apply the transitions triggered by an outline paragraph
    ///
    /// In order: a depth-0 heading becomes the current section, a match of
    /// the start-after title opens the region, a match of the stop-before
    /// title closes it. A title matching both leaves the region closed.
    pub fn observe_outline(&mut self, text: &str, depth: u32) {
        let title = text.trim();

        if depth == 0 {
            self.current_section = title.to_string();
        }
        if self.start_after.is_some_and(|start| eq_ignore_case(title, start)) {
            self.region = Region::Counting;
        }
        if self.stop_before.is_some_and(|stop| eq_ignore_case(title, stop)) {
            self.region = Region::AfterStop;
        }
    }

    /// Current region
    pub fn region(&self) -> Region {
        self.region
    }

    /// Whether paragraphs are currently counted
    pub fn is_counting(&self) -> bool {
        self.region.is_counting()
    }

    /// Trimmed text of the most recent depth-0 heading, empty before the first
    pub fn current_section(&self) -> &str {
        &self.current_section
    }
}
