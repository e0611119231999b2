//! In-memory model of a WordprocessingML document
//!
//! The model is a read-only snapshot: the ordered body paragraphs and the
//! style table, loaded once from a `.docx` package.

mod body;
mod error;
mod package;
mod styles;
mod xml;

pub use error::DocumentError;
pub use styles::{StyleInfo, StyleTable};
pub(crate) use xml::run_text;

use crate::outline;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;

/// A single run of text found inside a floating text box
///
/// Holds the run's raw `w:r` markup; it is decoded on demand by
/// [`crate::textbox`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextboxRun {
    xml: String,
}

impl TextboxRun {
    /// Wrap a raw `<w:r>...</w:r>` fragment
    pub fn new(xml: impl Into<String>) -> Self {
        Self { xml: xml.into() }
    }

    /// Build a run holding a single piece of text
    pub fn from_text(text: &str) -> Self {
        Self::new(format!(
            r#"<w:r><w:t xml:space="preserve">{}</w:t></w:r>"#,
            quick_xml::escape::escape(text)
        ))
    }

    /// Raw run markup
    pub fn xml(&self) -> &str {
        &self.xml
    }
}

/// A body paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    text: String,
    style_id: Option<String>,
    textbox_runs: Vec<TextboxRun>,
}

impl Paragraph {
    /// Create a paragraph with inline text and an optional style identifier
    pub fn new(text: impl Into<String>, style_id: Option<String>) -> Self {
        Self {
            text: text.into(),
            style_id,
            textbox_runs: Vec::new(),
        }
    }

    /// Create a paragraph with a style
    pub fn styled(text: impl Into<String>, style_id: &str) -> Self {
        Self::new(text, Some(style_id.to_string()))
    }

    /// Builder-style helper that anchors a text box run to this paragraph
    pub fn with_textbox_run(mut self, run: TextboxRun) -> Self {
        self.push_textbox_run(run);
        self
    }

    pub(crate) fn push_textbox_run(&mut self, run: TextboxRun) {
        self.textbox_runs.push(run);
    }

    /// Inline text of the paragraph, excluding text box content
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Paragraph style identifier (`w:pStyle`)
    pub fn style_id(&self) -> Option<&str> {
        self.style_id.as_deref()
    }

    /// Text box runs anchored to this paragraph
    pub fn textbox_runs(&self) -> &[TextboxRun] {
        &self.textbox_runs
    }
}

/// A loaded document: body paragraphs in order plus the style table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    paragraphs: Vec<Paragraph>,
    styles: StyleTable,
}

impl Document {
    /// Assemble a document from already-parsed parts
    pub fn new(paragraphs: Vec<Paragraph>, styles: StyleTable) -> Self {
        Self { paragraphs, styles }
    }

    /// Open a `.docx` file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        package::open_package(path.as_ref())
    }

    /// Parse a `.docx` package held in memory or any other seekable reader
    pub fn from_reader<R: std::io::Read + std::io::Seek>(reader: R) -> Result<Self, DocumentError> {
        package::read_package(reader)
    }

    /// Body paragraphs in document order
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Style definitions
    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    /// Style identifiers referenced by body paragraphs
    pub fn used_styles(&self) -> BTreeSet<&str> {
        self.paragraphs
            .iter()
            .filter_map(Paragraph::style_id)
            .collect()
    }

    /// Trimmed text of every non-empty outline paragraph, in document order
    pub fn outline(&self) -> Vec<&str> {
        self.paragraphs
            .iter()
            .filter(|p| outline::is_outline_paragraph(p, &self.styles))
            .map(|p| p.text().trim())
            .filter(|text| !text.is_empty())
            .collect()
    }

    /// Every substring of the paragraphs' text matched by `pattern`
    ///
    /// Useful for checking what an exclusion pattern would strip.
    pub fn find_all<'a>(&'a self, pattern: &Regex) -> Vec<&'a str> {
        self.paragraphs
            .iter()
            .flat_map(|p| pattern.find_iter(p.text()).map(|m| m.as_str()))
            .collect()
    }
}
