//! Reading a `.docx` package from disk
//!
//! A `.docx` file is a ZIP archive; the parts needed for counting are the
//! main document body and the style definitions.

use super::body::{parse_body, DOCUMENT_PART};
use super::error::DocumentError;
use super::styles::{parse_styles, StyleTable, STYLES_PART};
use super::Document;
use std::io::{Read, Seek};
use std::path::Path;
use zip::read::ZipArchive;
use zip::result::ZipError;

/// Open and parse a `.docx` file
///
/// # Parameters
/// * `path` - Path to the `.docx` package
///
/// # Returns
/// * `Ok(Document)` - All body paragraphs and the style table
/// * `Err(DocumentError)` - The file is unreadable or not a valid package
pub(crate) fn open_package(path: &Path) -> Result<Document, DocumentError> {
    log::info!("Opening document package {}", path.display());
    let file = std::fs::File::open(path)?;
    read_package(file)
}

/// Parse a `.docx` package from any seekable reader
pub(crate) fn read_package<R: Read + Seek>(reader: R) -> Result<Document, DocumentError> {
    let mut archive = ZipArchive::new(reader)?;

    let document_xml = read_part(&mut archive, DOCUMENT_PART)?
        .ok_or(DocumentError::MissingPart(DOCUMENT_PART))?;

    let styles = match read_part(&mut archive, STYLES_PART)? {
        Some(styles_xml) => parse_styles(&styles_xml)?,
        None => {
            log::info!("Package has no {}, using an empty style table", STYLES_PART);
            StyleTable::new()
        }
    };

    let paragraphs = parse_body(&document_xml)?;
    Ok(Document::new(paragraphs, styles))
}

/// Read a part by name, returning `None` when the archive does not contain it
fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Option<Vec<u8>>, DocumentError> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut contents = Vec::new();
    file.read_to_end(&mut contents)?;
    Ok(Some(contents))
}
