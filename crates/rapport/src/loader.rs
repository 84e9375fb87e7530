use std::fmt;
use std::fs;
use std::path::Path;

use log::info;

use crate::document::ReportDocument;

/// User-facing message shown in place of the report when loading fails.
pub const FALLBACK_MESSAGE: &str =
    "Impossible de charger le rapport. Veuillez réessayer plus tard.";

#[derive(Debug)]
pub enum DocumentError {
    Io(String),
    Http(String),
    Parse(String),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Io(detail) => write!(f, "io error: {detail}"),
            DocumentError::Http(detail) => write!(f, "http error: {detail}"),
            DocumentError::Parse(detail) => write!(f, "parse error: {detail}"),
        }
    }
}

impl std::error::Error for DocumentError {}

impl From<std::io::Error> for DocumentError {
    fn from(err: std::io::Error) -> Self {
        DocumentError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DocumentError {
    fn from(err: serde_json::Error) -> Self {
        DocumentError::Parse(err.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for DocumentError {
    fn from(err: reqwest::Error) -> Self {
        DocumentError::Http(err.to_string())
    }
}

pub fn load_document_from_str(json: &str) -> Result<ReportDocument, DocumentError> {
    let document: ReportDocument = serde_json::from_str(json)?;
    Ok(document)
}

pub fn load_document_from_path(path: &Path) -> Result<ReportDocument, DocumentError> {
    let json = fs::read_to_string(path)?;
    let document = load_document_from_str(&json)?;
    info!("loaded report document from {}", path.display());
    Ok(document)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_document_from_url(url: &str) -> Result<ReportDocument, DocumentError> {
    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if !status.is_success() {
        return Err(DocumentError::Http(format!("{url} returned {status}")));
    }
    let json = response.text()?;
    let document = load_document_from_str(&json)?;
    info!("loaded report document from {url}");
    Ok(document)
}

/// Loads from a URL when the location carries an http scheme, from the
/// filesystem otherwise.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_document(location: &str) -> Result<ReportDocument, DocumentError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        load_document_from_url(location)
    } else {
        load_document_from_path(Path::new(location))
    }
}

#[cfg(test)]
mod tests {
    use super::{load_document, load_document_from_path, load_document_from_str, DocumentError};
    use std::io::Write;

    const MINIMAL_REPORT: &str = r#"{
        "meta": { "titre": "Essai" },
        "indicateurs": [
            { "id": "dette", "label": "Dette", "serie": [ { "date": "2020", "val": 1.0 } ] }
        ]
    }"#;

    #[test]
    fn parses_a_minimal_report() {
        let document = load_document_from_str(MINIMAL_REPORT).expect("report should parse");
        assert_eq!(document.meta.titre, "Essai");
        assert_eq!(document.indicateurs.len(), 1);
    }

    #[test]
    fn malformed_json_reports_a_parse_error() {
        let err = load_document_from_str("{ not json").expect_err("should fail");
        assert!(matches!(err, DocumentError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_an_io_error() {
        let err = load_document_from_path(std::path::Path::new("/nonexistent/rapport.json"))
            .expect_err("should fail");
        assert!(matches!(err, DocumentError::Io(_)));
    }

    #[test]
    fn plain_locations_load_from_the_filesystem() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
        file.write_all(MINIMAL_REPORT.as_bytes())
            .expect("temp file should be writable");

        let location = file.path().to_string_lossy().into_owned();
        let document = load_document(&location).expect("report should load");
        assert_eq!(document.indicateurs[0].id.as_str(), "dette");
    }
}
