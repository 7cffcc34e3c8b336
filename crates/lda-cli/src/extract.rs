//! Text extraction from document files.
//!
//! Plain text is read directly, `.docx` is unpacked with `zip`, and PDFs
//! go through `pdftotext` from poppler-utils.

use std::io::{ErrorKind, Read};
use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static XML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("xml tag pattern should compile"));

/// Errors raised while pulling text out of a document.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid docx archive: {0}")]
    Docx(#[from] zip::result::ZipError),

    #[error("pdftotext not found (install poppler-utils)")]
    PdfToolMissing,

    #[error("pdftotext failed: {0}")]
    Pdf(String),
}

/// Extract the text of `path`, chosen by file extension.
pub fn extract_text(path: &Path) -> Result<String, ExtractionError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();

    match ext.as_str() {
        "txt" | "doc" => Ok(std::fs::read_to_string(path)?),
        "docx" => extract_docx(path),
        "pdf" => run_pdftotext(path),
        _ => Err(ExtractionError::UnsupportedFormat(if ext.is_empty() {
            path.display().to_string()
        } else {
            ext
        })),
    }
}

fn extract_docx(path: &Path) -> Result<String, ExtractionError> {
    let file = std::fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    let mut xml = String::new();
    archive.by_name("word/document.xml")?.read_to_string(&mut xml)?;
    Ok(docx_xml_to_text(&xml))
}

/// Flatten WordprocessingML to plain text, one line per paragraph.
fn docx_xml_to_text(xml: &str) -> String {
    let marked = xml
        .replace("</w:p>", "\n")
        .replace("<w:tab/>", "\t")
        .replace("<w:br/>", "\n");
    let stripped = XML_TAG.replace_all(&marked, "");
    stripped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
        .trim_end()
        .to_string()
}

fn run_pdftotext(path: &Path) -> Result<String, ExtractionError> {
    let output = Command::new("pdftotext")
        .args(["-layout", "-enc", "UTF-8"])
        .arg(path)
        .arg("-")
        .output()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => ExtractionError::PdfToolMissing,
            _ => ExtractionError::Io(e),
        })?;

    if !output.status.success() {
        return Err(ExtractionError::Pdf(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
