//! JSON export of built documents.
//!
//! This is the persistence format for processed corpora: one pretty-printed
//! JSON file per source EAF file, holding every table and derived value.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::document::Document;
use crate::error::EafError;

/// Writes a document to a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_document_json(path: &Path, document: &Document) -> Result<(), EafError> {
    let file = File::create(path).map_err(EafError::Io)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, document).map_err(|source| {
        EafError::DocumentJsonWrite {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.flush().map_err(EafError::Io)
}

/// Writes a document to a JSON string.
///
/// Useful for testing without file I/O.
pub fn to_document_json_string(document: &Document) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(document)
}
