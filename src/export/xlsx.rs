//! Spreadsheet export as a minimal Office Open XML workbook.
//!
//! An `.xlsx` file is a zip archive of XML parts. The workbook written here
//! has a single sheet, `Sheet1`, with inline-string cells: column A holds
//! the localized source label and column B the suggestion.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use relkw_suggest::AggregatedResult;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::{Exporter, new_result_path, rows};
use crate::config::OutputFormat;
use crate::error::{Result, RunError};

/// Name of the only worksheet.
pub const SHEET_NAME: &str = "Sheet1";

/// Path of the worksheet part inside the archive.
pub const SHEET_PART: &str = "xl/worksheets/sheet1.xml";

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const CONTENT_TYPES: &str = concat!(
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
    r#"<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
    r#"</Types>"#,
);

const ROOT_RELS: &str = concat!(
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>"#,
    r#"</Relationships>"#,
);

const WORKBOOK_RELS: &str = concat!(
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>"#,
    r#"</Relationships>"#,
);

/// Writes `result_<millis>.xlsx` into an output directory.
#[derive(Debug, Clone)]
pub struct XlsxExporter {
    output_dir: PathBuf,
}

impl XlsxExporter {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
        }
    }
}

impl Exporter for XlsxExporter {
    fn export(&self, result: &AggregatedResult) -> Result<PathBuf> {
        let path = new_result_path(&self.output_dir, OutputFormat::Xlsx)?;
        write_workbook(&path, result)?;
        tracing::info!(path = %path.display(), rows = result.total(), "spreadsheet written");
        Ok(path)
    }
}

/// Write `result` as a workbook at `path`.
///
/// # Errors
///
/// Returns [`RunError::Io`] if the file cannot be created, or
/// [`RunError::Export`] if the archive cannot be written.
pub fn write_workbook(path: &Path, result: &AggregatedResult) -> Result<()> {
    let file = File::create(path)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let workbook = format!(
        concat!(
            r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" "#,
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
            r#"<sheets><sheet name="{}" sheetId="1" r:id="rId1"/></sheets></workbook>"#,
        ),
        SHEET_NAME
    );
    let sheet = worksheet_xml(result);

    let parts: [(&str, &str); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES),
        ("_rels/.rels", ROOT_RELS),
        ("xl/workbook.xml", &workbook),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
        (SHEET_PART, &sheet),
    ];

    for (name, body) in parts {
        zip.start_file(name, options)
            .map_err(|e| RunError::Export(format!("zip error: {e}")))?;
        zip.write_all(XML_HEADER.as_bytes())?;
        zip.write_all(body.as_bytes())?;
    }

    zip.finish()
        .map_err(|e| RunError::Export(format!("zip finish error: {e}")))?;
    Ok(())
}

/// Render the worksheet part: one row per exported suggestion.
pub fn worksheet_xml(result: &AggregatedResult) -> String {
    let mut xml = String::from(
        r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    for (i, (label, keyword)) in rows(result).enumerate() {
        let r = i + 1;
        xml.push_str(&format!(
            r#"<row r="{r}">{}{}</row>"#,
            inline_cell(&format!("A{r}"), label),
            inline_cell(&format!("B{r}"), keyword),
        ));
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

fn inline_cell(reference: &str, text: &str) -> String {
    format!(
        r#"<c r="{reference}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
        escape_xml(text)
    )
}

/// Escape markup characters and drop control characters XML 1.0 forbids.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if c < '\u{20}' => {}
            c => out.push(c),
        }
    }
    out
}
