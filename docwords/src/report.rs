//! Printed report of a counting pass

use crate::document::Document;
use crate::engine::CountingResult;
use itertools::Itertools;
use std::io::{self, Write};

/// Render a list as `[a, b, c]`
pub fn bracketed<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    format!("[{}]", items.into_iter().join(", "))
}

/// Write the styles used by the document's paragraphs
pub fn write_styles<W: Write>(out: &mut W, document: &Document) -> io::Result<()> {
    writeln!(out, "Styles used:")?;
    writeln!(out, "{}", bracketed(document.used_styles()))
}

/// Write the document outline
pub fn write_outline<W: Write>(out: &mut W, document: &Document) -> io::Result<()> {
    writeln!(out, "Document Outline:")?;
    writeln!(out, "{}", bracketed(document.outline()))
}

/// Write trace lines, the section breakdown and the final counts
pub fn write_counts<W: Write>(out: &mut W, result: &CountingResult) -> io::Result<()> {
    for entry in &result.trace {
        writeln!(out, "{}", entry)?;
    }
    if !result.trace.is_empty() {
        writeln!(out)?;
    }

    writeln!(out, "Sections:")?;
    for (title, count) in result.sections.iter() {
        writeln!(out, "  {}: {}", title.trim(), count)?;
    }
    writeln!(out)?;

    writeln!(out, "Word Count [counted, ignored, textboxes, total]:")?;
    writeln!(out, "{}", bracketed(result.as_array()))
}

/// Write the complete report
pub fn write_report<W: Write>(
    out: &mut W,
    document: &Document,
    result: &CountingResult,
) -> io::Result<()> {
    write_styles(out, document)?;
    writeln!(out)?;
    write_outline(out, document)?;
    writeln!(out)?;
    write_counts(out, result)
}
