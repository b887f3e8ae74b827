//! CSV file I/O helpers
//!
//! The ledger table is only ever created, appended to, or read in full.
//! Nothing here rewrites an existing file.

use std::fs::{self, File, OpenOptions};
use std::io::BufReader;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};

/// Check whether a file is missing or has no bytes at all
pub fn is_missing_or_empty<P: AsRef<Path>>(path: P) -> LedgerResult<bool> {
    match fs::metadata(path.as_ref()) {
        Ok(meta) => Ok(meta.len() == 0),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(true),
        Err(e) => Err(LedgerError::Io(format!(
            "Failed to inspect {}: {}",
            path.as_ref().display(),
            e
        ))),
    }
}

/// Write a header-only table, creating parent directories as needed
pub fn write_header<P: AsRef<Path>>(path: P, columns: &[&str]) -> LedgerResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(path)
        .map_err(|e| LedgerError::Io(format!("Failed to create {}: {}", path.display(), e)))?;

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    writer.write_record(columns)?;
    writer
        .flush()
        .map_err(|e| LedgerError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Append a single serialized row to an existing table
pub fn append_row<T, P>(path: P, row: &T) -> LedgerResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| LedgerError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    writer.serialize(row)?;
    writer
        .flush()
        .map_err(|e| LedgerError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Read the header and every data record of a table
///
/// Each record is paired with its 1-based line number in the file.
pub fn read_records<P: AsRef<Path>>(path: P) -> LedgerResult<(StringRecord, Vec<(u64, StringRecord)>)> {
    let path = path.as_ref();

    let file = File::open(path)
        .map_err(|e| LedgerError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        records.push((line, record));
    }

    Ok((headers, records))
}
