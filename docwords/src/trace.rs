//! Diagnostic trace of what a counting pass ignored
//!
//! Each entry renders as a single line: the reason label followed by the
//! affected text, cut so the whole line fits [`LINE_WIDTH`] columns.

use std::fmt;

/// Maximum rendered width of a trace line, excluding the ellipsis
pub const LINE_WIDTH: usize = 80;

/// Marker appended to truncated text
const ELLIPSIS: &str = "...";

/// Why a piece of text was left out of the counted total
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceReason {
    /// The paragraph lies outside the counted region
    OutsideRegion,
    /// The paragraph has an excluded style
    Style(String),
    /// An exclusion pattern matched this substring
    Pattern,
    /// Text box content, tallied separately
    Textbox,
}

impl TraceReason {
    /// Label printed in front of the text
    pub fn label(&self) -> String {
        match self {
            TraceReason::OutsideRegion => "IGNORED-OUTLINE:".to_string(),
            TraceReason::Style(style) => format!("IGNORED-{}:", style.to_uppercase()),
            TraceReason::Pattern => "IGNORED-PATTERN:".to_string(),
            TraceReason::Textbox => "IGNORED-TEXTBOX:".to_string(),
        }
    }
}

/// One trace line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    /// Why the text was ignored
    pub reason: TraceReason,
    /// The ignored text, untruncated
    pub text: String,
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.reason.label();
        let width = LINE_WIDTH.saturating_sub(label.chars().count());
        write!(f, "{} {}", label, truncate(&self.text, width))
    }
}

/// Cut `text` to `width` characters, marking the cut with an ellipsis
pub fn truncate(text: &str, width: usize) -> String {
    match text.char_indices().nth(width) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Collects trace entries during a pass; a disabled trace records nothing
#[derive(Debug, Clone, Default)]
pub(crate) struct Trace {
    enabled: bool,
    entries: Vec<TraceEntry>,
}

impl Trace {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            entries: Vec::new(),
        }
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record `text` unless tracing is off or the text is empty
    pub(crate) fn record(&mut self, reason: TraceReason, text: &str) {
        if self.enabled && !text.is_empty() {
            self.entries.push(TraceEntry {
                reason,
                text: text.to_string(),
            });
        }
    }

    pub(crate) fn into_entries(self) -> Vec<TraceEntry> {
        self.entries
    }
}
