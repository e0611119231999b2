//! Style table parsed from `word/styles.xml`
//!
//! Only the parts of a style definition that matter for outline detection are
//! kept: the display name and the outline level declared in the style's own
//! paragraph properties (`w:pPr/w:outlineLvl`).

use super::error::DocumentError;
use super::xml::attr_value;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;

/// Part name of the style definitions inside the package
pub(crate) const STYLES_PART: &str = "word/styles.xml";

/// Metadata for a single style definition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleInfo {
    /// Human-readable style name (`w:name`)
    pub name: Option<String>,
    /// Declared outline level, 0 for top-level headings
    pub outline_depth: Option<u32>,
}

/// Lookup table from style identifier to style metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleTable {
    styles: HashMap<String, StyleInfo>,
}

impl StyleTable {
    /// Create an empty style table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a style definition
    pub fn insert(&mut self, style_id: impl Into<String>, info: StyleInfo) {
        self.styles.insert(style_id.into(), info);
    }

    /// Builder-style helper that registers a style with an outline depth
    pub fn with_outline(mut self, style_id: &str, depth: u32) -> Self {
        self.insert(
            style_id,
            StyleInfo {
                name: Some(style_id.to_string()),
                outline_depth: Some(depth),
            },
        );
        self
    }

    /// Builder-style helper that registers a style without an outline depth
    pub fn with_plain(mut self, style_id: &str) -> Self {
        self.insert(
            style_id,
            StyleInfo {
                name: Some(style_id.to_string()),
                outline_depth: None,
            },
        );
        self
    }

    /// Resolve the declared outline depth of a style
    ///
    /// # Parameters
    /// * `style_id` - Style identifier as referenced by `w:pStyle`
    ///
    /// # Returns
    /// * `Some(depth)` - The style declares an outline level
    /// * `None` - The style is unknown or declares no outline level
    pub fn outline_depth(&self, style_id: &str) -> Option<u32> {
        match self.styles.get(style_id) {
            Some(info) => info.outline_depth,
            None => {
                log::warn!("Style not found: {}", style_id);
                None
            }
        }
    }

    /// Display name of a style, if it is defined and named
    pub fn display_name(&self, style_id: &str) -> Option<&str> {
        self.styles.get(style_id).and_then(|s| s.name.as_deref())
    }

    /// Whether the table defines the given style
    pub fn contains(&self, style_id: &str) -> bool {
        self.styles.contains_key(style_id)
    }

    /// Number of defined styles
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether no styles are defined
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// Parse the contents of `word/styles.xml`
pub(crate) fn parse_styles(xml: &[u8]) -> Result<StyleTable, DocumentError> {
    let mut reader = Reader::from_reader(xml);
    let mut table = StyleTable::new();

    let mut depth = 0usize;
    let mut style_depth = 0usize;
    let mut ppr_depth: Option<usize> = None;
    let mut current: Option<(String, StyleInfo)> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                depth += 1;
                match e.local_name().as_ref() {
                    b"style" => {
                        style_depth = depth;
                        ppr_depth = None;
                        current = attr_value(&e, b"styleId").map(|id| (id, StyleInfo::default()));
                    }
                    b"pPr" if current.is_some() && depth == style_depth + 1 => {
                        ppr_depth = Some(depth);
                    }
                    _ => {
                        if let Some((_, info)) = current.as_mut() {
                            read_style_property(&e, depth, style_depth, ppr_depth, info);
                        }
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() == b"style" {
                    if let Some(id) = attr_value(&e, b"styleId") {
                        table.insert(id, StyleInfo::default());
                    }
                } else if let Some((_, info)) = current.as_mut() {
                    read_style_property(&e, depth + 1, style_depth, ppr_depth, info);
                }
            }
            Ok(Event::End(e)) => {
                match e.local_name().as_ref() {
                    b"pPr" if ppr_depth == Some(depth) => ppr_depth = None,
                    b"style" if depth == style_depth => {
                        if let Some((id, info)) = current.take() {
                            table.insert(id, info);
                        }
                    }
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DocumentError::Xml {
                    part: STYLES_PART,
                    message: e.to_string(),
                })
            }
            _ => {}
        }
    }

    log::info!("Loaded {} style definitions", table.len());
    Ok(table)
}

/// Pick up `w:name` and `w:pPr/w:outlineLvl` of the style being parsed
///
/// `element_depth` is the depth the element sits at; children of the style
/// element are at `style_depth + 1`.
fn read_style_property(
    element: &BytesStart<'_>,
    element_depth: usize,
    style_depth: usize,
    ppr_depth: Option<usize>,
    info: &mut StyleInfo,
) {
    match element.local_name().as_ref() {
        b"name" if element_depth == style_depth + 1 => {
            info.name = attr_value(element, b"val");
        }
        b"outlineLvl" if ppr_depth.map(|d| d + 1) == Some(element_depth) => {
            info.outline_depth = attr_value(element, b"val").and_then(|v| v.parse().ok());
        }
        _ => {}
    }
}
