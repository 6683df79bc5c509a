//! CSV loading for the canteen dataset.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::dataset::RawRow;
use crate::error::Result;

/// Reads dataset rows from any CSV source with a header record.
///
/// A record that fails to deserialize (for example a malformed price
/// field) is dropped with a warning; the rest of the file still loads.
/// I/O failures mid-stream abort the read.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (i, result) in rdr.deserialize::<RawRow>().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                // Header line is record 0; data records are 1-based here.
                tracing::warn!(record = i + 1, %err, "skipping malformed dataset record");
            }
        }
    }
    Ok(rows)
}

/// Loads dataset rows from the CSV file at `path`.
pub fn load_rows<P: AsRef<Path>>(path: P) -> Result<Vec<RawRow>> {
    let file = File::open(path)?;
    read_rows(file)
}
