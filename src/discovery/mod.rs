//! Discovery of EAF files in a corpus directory.
//!
//! Corpus files are named `<prefix>_<yyyymmdd...>_<part>_<part>.eaf`; the
//! third-from-last `_`-separated component of the file name starts with the
//! recording month, which is what [`DateRange`] filters on.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::EafError;

/// An inclusive range of recording months, written as `yyyymm`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    start: u32,
    end: u32,
}

impl DateRange {
    pub fn new(start: u32, end: u32) -> Result<Self, EafError> {
        for month in [start, end] {
            if !(100_001..=999_912).contains(&month) || !(1..=12).contains(&(month % 100)) {
                return Err(EafError::InvalidDateRange {
                    message: format!("'{month}' is not a yyyymm month"),
                });
            }
        }
        if start > end {
            return Err(EafError::InvalidDateRange {
                message: format!("start {start} is after end {end}"),
            });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, yyyymm: u32) -> bool {
        (self.start..=self.end).contains(&yyyymm)
    }
}

/// Lists every `.eaf` file below `root`, sorted by path.
///
/// With a `range`, only files whose name carries a month inside it are kept.
pub fn discover_eaf_files(root: &Path, range: Option<DateRange>) -> Result<Vec<PathBuf>, EafError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(|source| {
            EafError::Io(
                source
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory traversal failed")),
            )
        })?;

        let path = entry.path();
        if !entry.file_type().is_file() || !has_eaf_extension(path) {
            continue;
        }

        if let Some(range) = range {
            match recording_month(path) {
                Some(month) if range.contains(month) => {}
                Some(_) => continue,
                None => {
                    log::debug!("{}: no recording month in file name, skipped", path.display());
                    continue;
                }
            }
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

fn has_eaf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("eaf"))
        .unwrap_or(false)
}

/// `yyyymm` from the third-from-last `_` component of the file name.
fn recording_month(path: &Path) -> Option<u32> {
    let text = path.file_name()?.to_str()?;
    let parts: Vec<&str> = text.split('_').collect();
    let component = parts.len().checked_sub(3).map(|idx| parts[idx])?;
    let digits = component.get(..6)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
