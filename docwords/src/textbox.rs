//! Words inside floating text boxes
//!
//! Text box content is anchored to a paragraph but is not part of its inline
//! text. The document model keeps each text box run as a raw fragment; this
//! module decodes the fragments and counts their words. Exclusion patterns
//! are not applied to text box content.

use crate::document::{run_text, Paragraph, TextboxRun};
use crate::words::count_tokens;

/// Words found in the text boxes of one paragraph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextboxWords {
    /// Sum of the per-run word counts
    pub words: usize,
    /// Concatenated text of every decoded run
    pub text: String,
}

/// Count the words in every text box run anchored to `paragraph`
///
/// Runs are counted one by one, so a word split across two runs counts
/// twice. A run that cannot be decoded is logged and skipped; the remaining
/// runs are still counted.
pub fn words_in_textboxes(paragraph: &Paragraph) -> TextboxWords {
    let mut result = TextboxWords::default();

    for (index, run) in paragraph.textbox_runs().iter().enumerate() {
        match decode_run(run) {
            Ok(text) => {
                result.words += count_tokens(&text);
                result.text.push_str(&text);
            }
            Err(e) => {
                log::warn!("Skipping malformed text box run #{}: {}", index, e);
            }
        }
    }

    result
}

/// Text carried by a single text box run
pub fn decode_run(run: &TextboxRun) -> Result<String, quick_xml::Error> {
    run_text(run.xml())
}
