//! Builders for `.docx` fixtures used by the integration tests

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

/// Escape text for use inside `w:t`
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Builds the XML parts of a minimal WordprocessingML package
#[derive(Default)]
pub struct DocxBuilder {
    styles: Vec<String>,
    body: Vec<String>,
    include_styles: bool,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self {
            include_styles: true,
            ..Self::default()
        }
    }

    /// Leave `word/styles.xml` out of the package
    pub fn without_styles_part(mut self) -> Self {
        self.include_styles = false;
        self
    }

    /// Define a paragraph style with an outline level
    pub fn heading_style(mut self, style_id: &str, level: u32) -> Self {
        self.styles.push(format!(
            r#"<w:style w:type="paragraph" w:styleId="{id}"><w:name w:val="{id}"/><w:basedOn w:val="Normal"/><w:pPr><w:keepNext/><w:outlineLvl w:val="{level}"/></w:pPr></w:style>"#,
            id = style_id,
            level = level
        ));
        self
    }

    /// Define a paragraph style without an outline level
    pub fn plain_style(mut self, style_id: &str) -> Self {
        self.styles.push(format!(
            r#"<w:style w:type="paragraph" w:styleId="{id}"><w:name w:val="{id}"/><w:pPr><w:spacing w:after="120"/></w:pPr></w:style>"#,
            id = style_id
        ));
        self
    }

    /// Append a paragraph, optionally styled
    pub fn paragraph(mut self, style_id: Option<&str>, text: &str) -> Self {
        let ppr = style_id
            .map(|id| format!(r#"<w:pPr><w:pStyle w:val="{}"/></w:pPr>"#, id))
            .unwrap_or_default();
        self.body.push(format!(
            r#"<w:p>{}<w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
            ppr,
            escape(text)
        ));
        self
    }

    /// Append a paragraph whose text is split over several runs
    pub fn split_paragraph(mut self, runs: &[&str]) -> Self {
        let runs: String = runs
            .iter()
            .map(|text| {
                format!(
                    r#"<w:r><w:rPr><w:b/></w:rPr><w:t xml:space="preserve">{}</w:t></w:r>"#,
                    escape(text)
                )
            })
            .collect();
        self.body.push(format!("<w:p>{}</w:p>", runs));
        self
    }

    /// Append a paragraph anchoring a modern text box with a VML fallback
    pub fn textbox_paragraph(mut self, text: &str, boxed: &str) -> Self {
        let boxed = escape(boxed);
        self.body.push(format!(
            r#"<w:p><w:r><w:t xml:space="preserve">{text}</w:t></w:r><w:r><mc:AlternateContent><mc:Choice Requires="wps"><w:drawing><wp:anchor><wp:docPr id="1" name="Text Box 1"/><a:graphic><a:graphicData uri="http://schemas.microsoft.com/office/word/2010/wordprocessingShape"><wps:wsp><wps:txbx><w:txbxContent><w:p><w:pPr><w:pStyle w:val="Caption"/></w:pPr><w:r><w:t xml:space="preserve">{boxed}</w:t></w:r></w:p></w:txbxContent></wps:txbx></wps:wsp></a:graphicData></a:graphic></wp:anchor></w:drawing></mc:Choice><mc:Fallback><w:pict><v:shape><v:textbox><w:txbxContent><w:p><w:r><w:t xml:space="preserve">{boxed}</w:t></w:r></w:p></w:txbxContent></v:textbox></v:shape></w:pict></mc:Fallback></mc:AlternateContent></w:r></w:p>"#,
            text = escape(text),
            boxed = boxed
        ));
        self
    }

    /// Append a table with one cell
    pub fn table(mut self, cell_text: &str) -> Self {
        self.body.push(format!(
            r#"<w:tbl><w:tr><w:tc><w:p><w:r><w:t>{}</w:t></w:r></w:p></w:tc></w:tr></w:tbl>"#,
            escape(cell_text)
        ));
        self
    }

    fn document_xml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{w}" xmlns:mc="http://schemas.openxmlformats.org/markup-compatibility/2006" xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:wps="http://schemas.microsoft.com/office/word/2010/wordprocessingShape" xmlns:v="urn:schemas-microsoft-com:vml"><w:body>{body}<w:sectPr><w:pgSz w:w="11906" w:h="16838"/></w:sectPr></w:body></w:document>"#,
            w = W_NS,
            body = self.body.concat()
        )
    }

    fn styles_xml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="{w}"><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>{styles}</w:styles>"#,
            w = W_NS,
            styles = self.styles.concat()
        )
    }

    /// Write the package to `dir/name`
    pub fn write(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let file = std::fs::File::create(&path).expect("create fixture");
        let mut zip = ZipWriter::new(file);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        let mut parts = vec![
            ("[Content_Types].xml", CONTENT_TYPES.to_string()),
            ("_rels/.rels", ROOT_RELS.to_string()),
            ("word/document.xml", self.document_xml()),
        ];
        if self.include_styles {
            parts.push(("word/styles.xml", self.styles_xml()));
        }

        for (name, contents) in parts {
            zip.start_file(name, options).expect("start part");
            zip.write_all(contents.as_bytes()).expect("write part");
        }
        zip.finish().expect("finish package");
        path
    }
}
