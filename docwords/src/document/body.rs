//! Body paragraphs parsed from `word/document.xml`
//!
//! Only paragraphs that are direct children of `w:body` are collected; their
//! inline text is the concatenation of `w:t` content (plus `w:tab`, `w:br` and
//! `w:cr` as whitespace). Anything inside drawings, VML pictures, embedded
//! objects or markup-compatibility blocks is not inline text. Runs found under
//! `w:txbxContent/w:p` are captured verbatim as [`TextboxRun`] fragments so the
//! textbox extractor can decode them later.

use super::error::DocumentError;
use super::xml::{attr_value, resolve_entity};
use super::{Paragraph, TextboxRun};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Part name of the main document body inside the package
pub(crate) const DOCUMENT_PART: &str = "word/document.xml";

/// Elements whose content never belongs to a paragraph's inline text
const NON_INLINE: &[&str] = &["drawing", "pict", "object", "AlternateContent"];

/// Paragraph under construction
struct ParagraphBuilder {
    /// Depth of the `w:p` element in the element stack
    depth: usize,
    text: String,
    style_id: Option<String>,
    textbox_runs: Vec<TextboxRun>,
}

impl ParagraphBuilder {
    fn build(self) -> Paragraph {
        let mut paragraph = Paragraph::new(self.text, self.style_id);
        for run in self.textbox_runs {
            paragraph.push_textbox_run(run);
        }
        paragraph
    }
}

/// Parse the body paragraphs of `word/document.xml`
pub(crate) fn parse_body(xml: &[u8]) -> Result<Vec<Paragraph>, DocumentError> {
    let mut reader = Reader::from_reader(xml);
    let mut paragraphs = Vec::new();

    // Local names of the currently open elements
    let mut names: Vec<Vec<u8>> = Vec::new();
    let mut current: Option<ParagraphBuilder> = None;
    let mut non_inline = 0usize;
    let mut fallback = 0usize;
    // Byte offset and stack depth of the textbox run being captured
    let mut run_capture: Option<(usize, usize)> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let local = e.local_name().as_ref().to_vec();
                let tag_end = reader.buffer_position() as usize;

                if current.is_none() && local == b"p" && ends_with(&names, &["body"]) {
                    names.push(local);
                    current = Some(ParagraphBuilder {
                        depth: names.len(),
                        text: String::new(),
                        style_id: None,
                        textbox_runs: Vec::new(),
                    });
                    continue;
                }

                if current.is_some() {
                    if is_non_inline(&local) {
                        non_inline += 1;
                    }
                    if local == b"Fallback" {
                        fallback += 1;
                    }
                    if local == b"r"
                        && fallback == 0
                        && run_capture.is_none()
                        && ends_with(&names, &["txbxContent", "p"])
                    {
                        // The start tag spans `<` + content + `>`
                        let tag_start = tag_end.saturating_sub(e.len() + 2);
                        run_capture = Some((tag_start, names.len() + 1));
                    }
                }
                names.push(local);
            }
            Ok(Event::Empty(e)) => {
                let Some(paragraph) = current.as_mut() else {
                    if e.local_name().as_ref() == b"p" && ends_with(&names, &["body"]) {
                        paragraphs.push(Paragraph::new(String::new(), None));
                    }
                    continue;
                };
                match e.local_name().as_ref() {
                    b"pStyle"
                        if names.len() == paragraph.depth + 1
                            && names.last().map(Vec::as_slice) == Some(b"pPr".as_slice()) =>
                    {
                        paragraph.style_id = attr_value(&e, b"val");
                    }
                    b"tab" if non_inline == 0 && is_run(&names) => paragraph.text.push('\t'),
                    b"br" | b"cr" if non_inline == 0 && is_run(&names) => {
                        paragraph.text.push('\n')
                    }
                    _ => {}
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(paragraph) = current.as_mut() {
                    if non_inline == 0 && is_text(&names) {
                        paragraph.text.push_str(&String::from_utf8_lossy(e.as_ref()));
                    }
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if let Some(paragraph) = current.as_mut() {
                    if non_inline == 0 && is_text(&names) {
                        if let Some(c) = resolve_entity(&e) {
                            paragraph.text.push(c);
                        }
                    }
                }
            }
            Ok(Event::End(_)) => {
                let depth = names.len();
                let Some(local) = names.pop() else {
                    continue;
                };
                let Some(paragraph) = current.as_mut() else {
                    continue;
                };

                if let Some((start, run_depth)) = run_capture {
                    if run_depth == depth {
                        let end = reader.buffer_position() as usize;
                        let fragment = String::from_utf8_lossy(&xml[start..end]).into_owned();
                        paragraph.textbox_runs.push(TextboxRun::new(fragment));
                        run_capture = None;
                    }
                }

                if is_non_inline(&local) {
                    non_inline = non_inline.saturating_sub(1);
                }
                if local == b"Fallback" {
                    fallback = fallback.saturating_sub(1);
                }
                if depth == paragraph.depth {
                    if let Some(done) = current.take() {
                        paragraphs.push(done.build());
                    }
                    non_inline = 0;
                    fallback = 0;
                    run_capture = None;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DocumentError::Xml {
                    part: DOCUMENT_PART,
                    message: e.to_string(),
                })
            }
            _ => {}
        }
    }

    log::info!("Parsed {} body paragraphs", paragraphs.len());
    Ok(paragraphs)
}

/// Whether the open element stack ends with the given local names
fn ends_with(names: &[Vec<u8>], suffix: &[&str]) -> bool {
    names.len() >= suffix.len()
        && names[names.len() - suffix.len()..]
            .iter()
            .zip(suffix)
            .all(|(name, expected)| name.as_slice() == expected.as_bytes())
}

fn is_non_inline(local: &[u8]) -> bool {
    NON_INLINE.iter().any(|name| name.as_bytes() == local)
}

fn is_run(names: &[Vec<u8>]) -> bool {
    ends_with(names, &["r"])
}

fn is_text(names: &[Vec<u8>]) -> bool {
    ends_with(names, &["r", "t"])
}
