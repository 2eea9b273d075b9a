//! CSV export of the joined per-language view.
//!
//! Columns: `annotation_id,time_start_ms,time_end_ms,text,confidence_value,is_translation,manually_corrected`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::join::JoinedRow;
use crate::error::EafError;

const JOINED_COLUMNS: [&str; 7] = [
    "annotation_id",
    "time_start_ms",
    "time_end_ms",
    "text",
    "confidence_value",
    "is_translation",
    "manually_corrected",
];

/// Writes joined rows to a CSV file.
pub fn write_joined_csv(path: &Path, rows: &[JoinedRow]) -> Result<(), EafError> {
    let file = File::create(path).map_err(EafError::Io)?;
    write_joined_csv_to(BufWriter::new(file), rows, path)?
        .flush()
        .map_err(EafError::Io)
}

/// Writes joined rows to a CSV string.
pub fn to_joined_csv_string(rows: &[JoinedRow]) -> Result<String, EafError> {
    let bytes = write_joined_csv_to(Vec::new(), rows, Path::new("<string>"))?;
    String::from_utf8(bytes).map_err(|e| EafError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Writes joined rows to any writer and hands the writer back.
pub fn write_joined_csv_to<W: Write>(
    writer: W,
    rows: &[JoinedRow],
    path: &Path,
) -> Result<W, EafError> {
    let csv_error = |source: csv::Error| EafError::CsvWrite {
        path: path.to_path_buf(),
        source,
    };

    // The header is written up front so an empty view still names its columns.
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(JOINED_COLUMNS).map_err(csv_error)?;
    for row in rows {
        csv_writer.serialize(row).map_err(csv_error)?;
    }

    csv_writer
        .into_inner()
        .map_err(|e| EafError::Io(e.into_error()))
}
