//! Outline (heading) classification of paragraphs
//!
//! A paragraph is part of the outline when its style declares an outline
//! level. Direct paragraph formatting is not consulted.

use crate::document::{Paragraph, StyleTable};

/// Outline depth of a paragraph, `None` when it has no style or the style
/// declares no outline level
pub fn outline_depth(paragraph: &Paragraph, styles: &StyleTable) -> Option<u32> {
    paragraph
        .style_id()
        .and_then(|style_id| styles.outline_depth(style_id))
}

/// Whether the paragraph is an outline paragraph
pub fn is_outline_paragraph(paragraph: &Paragraph, styles: &StyleTable) -> bool {
    outline_depth(paragraph, styles).is_some()
}
