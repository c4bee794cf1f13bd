use std::path::Path;
use tracing::info;

use crate::error::ScrapeError;
use crate::models::{ProductRecord, EXPORT_COLUMNS};
use crate::storage::WriteOutcome;

/// Write one export batch, replacing any existing file at `path`.
/// An empty batch touches nothing on disk.
pub fn write_csv(records: &[ProductRecord], path: &Path) -> Result<WriteOutcome, ScrapeError> {
    if records.is_empty() {
        info!("No data to save.");
        return Ok(WriteOutcome::NothingToWrite);
    }

    // Header comes from the declared columns, not from the first record.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(EXPORT_COLUMNS)?;

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!("Data saved to {}", path.display());
    Ok(WriteOutcome::Written {
        rows: records.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExtractedFields;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn record(title: &str, price: &str) -> ProductRecord {
        ProductRecord::from_extracted(ExtractedFields {
            title: title.to_string(),
            price: price.to_string(),
            description: "Belt drive".to_string(),
            image_urls: vec!["https://img.example/a.jpg".to_string()],
        })
    }

    #[test]
    fn empty_batch_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("turntables1.csv");

        let outcome = write_csv(&[], &path).unwrap();

        assert_eq!(outcome, WriteOutcome::NothingToWrite);
        assert!(!path.exists());
    }

    #[test]
    fn writes_header_plus_one_line_per_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("turntables2.csv");
        let records = vec![
            record("Pro-Ject Debut Carbon", "449,–"),
            record("Rega Planar 3", "1099,–"),
            record("Thorens TD 202", "599,–"),
        ];

        let outcome = write_csv(&records, &path).unwrap();
        assert_eq!(outcome, WriteOutcome::Written { rows: 3 });

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 4);
        assert_eq!(contents.lines().next().unwrap(), EXPORT_COLUMNS.join(","));

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(&rows[1][3], "Rega Planar 3");
        assert_eq!(&rows[1][4], "1");
        assert_eq!(&rows[1][25], "1099,–");
        assert_eq!(&rows[1][41], "Rega");
    }

    #[test]
    fn existing_file_is_overwritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("turntables3.csv");
        std::fs::write(&path, "stale\nstale\nstale\nstale\n").unwrap();

        write_csv(&[record("Dual CS 418", "299,–")], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(!contents.contains("stale"));
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("turntables4.csv");

        assert!(write_csv(&[record("Dual CS 418", "299,–")], &path).is_err());
    }
}
