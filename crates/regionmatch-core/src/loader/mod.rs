// crates/regionmatch-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, decompression) and delegates to the
//! payload parsers: source JSON or a bincode snapshot.

use crate::dataset::Dataset;
use crate::error::{RegionError, Result};
use bincode::Options;
use std::io::{Read, Write};
use std::path::Path;

pub mod common_io;

// Refuse snapshot payloads above this size.
const SNAPSHOT_LIMIT: u64 = 16 * 1024 * 1024;

fn snapshot_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

impl Dataset {
    /// Loads a dataset from disk.
    ///
    /// The format follows the file name: `.json` (source document) or `.bin`
    /// (snapshot written by [`Dataset::save_as`]), each optionally with a
    /// trailing `.gz`.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = common_io::open_stream(path)?;

        let db = match common_io::payload_extension(path).as_deref() {
            Some("bin") => Self::from_snapshot_reader(&mut reader)?,
            #[cfg(feature = "json")]
            Some("json") => {
                let mut text = String::new();
                reader.read_to_string(&mut text)?;
                Self::from_json_str(&text)?
            }
            _ => {
                return Err(RegionError::InvalidData(format!(
                    "unsupported dataset file: {}",
                    path.display()
                )))
            }
        };

        tracing::debug!(
            path = %path.display(),
            domestic = db.stats().domestic,
            foreign = db.stats().foreign,
            "loaded dataset"
        );
        Ok(db)
    }

    /// Writes a bincode snapshot (gzip-compressed when the path ends with `.gz`).
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = common_io::create_stream(path)?;
        self.write_snapshot(&mut writer)?;
        writer.flush()?;
        tracing::debug!(path = %path.display(), "wrote dataset snapshot");
        Ok(())
    }

    pub fn write_snapshot<W: Write>(&self, writer: W) -> Result<()> {
        snapshot_options().serialize_into(writer, self)?;
        Ok(())
    }

    /// Reads a snapshot and re-checks the record invariants.
    pub fn from_snapshot_reader<R: Read>(reader: R) -> Result<Self> {
        let db: Dataset = snapshot_options().deserialize_from(reader)?;
        db.validate()?;
        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_round_trip_in_memory() {
        let db = Dataset::bundled().unwrap();
        let mut bytes = Vec::new();
        db.write_snapshot(&mut bytes).unwrap();
        let back = Dataset::from_snapshot_reader(bytes.as_slice()).unwrap();
        assert_eq!(&back, db);
    }

    #[test]
    fn truncated_snapshot_is_an_error() {
        let db = Dataset::bundled().unwrap();
        let mut bytes = Vec::new();
        db.write_snapshot(&mut bytes).unwrap();
        bytes.truncate(bytes.len() / 2);
        assert!(matches!(
            Dataset::from_snapshot_reader(bytes.as_slice()),
            Err(RegionError::Bincode(_))
        ));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = Dataset::load_from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, RegionError::NotFound(_)));
    }
}
