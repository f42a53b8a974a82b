//! `|||`-delimited output file.
//!
//! Cells are written as-is. A value that itself contains `|||` shifts the
//! columns of its row; such rows fail to read back.

use anyhow::{bail, Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::models::AccommodationRecord;

pub const DELIMITER: &str = "|||";

pub const HEADER: [&str; 8] = [
    "Назва",
    "Адреса",
    "Широта",
    "Довгота",
    "Рейтинг",
    "Телефон",
    "Сайт",
    "Place ID",
];

/// Write the header and one row per record, replacing any existing file
pub fn write_records(path: &Path, records: &[AccommodationRecord]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", HEADER.join(DELIMITER))?;
    for record in records {
        writeln!(writer, "{}", record.to_row().join(DELIMITER))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write output file {}", path.display()))?;

    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Read a file produced by [`write_records`] back into records
pub fn read_records(path: &Path) -> Result<Vec<AccommodationRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read output file {}", path.display()))?;
    let mut lines = content.lines();

    let header: Vec<&str> = lines
        .next()
        .context("Output file is empty")?
        .split(DELIMITER)
        .collect();
    if header != HEADER {
        bail!("Unexpected header in {}: {:?}", path.display(), header);
    }

    let mut records = Vec::new();
    for (i, line) in lines.enumerate() {
        let row = i + 2;
        let cells: Vec<&str> = line.split(DELIMITER).collect();
        if cells.len() != HEADER.len() {
            bail!(
                "Row {} has {} columns, expected {}",
                row,
                cells.len(),
                HEADER.len()
            );
        }

        records.push(AccommodationRecord {
            name: cells[0].to_string(),
            address: optional(cells[1]),
            latitude: cells[2]
                .parse()
                .with_context(|| format!("Row {}: invalid latitude {:?}", row, cells[2]))?,
            longitude: cells[3]
                .parse()
                .with_context(|| format!("Row {}: invalid longitude {:?}", row, cells[3]))?,
            rating: match optional(cells[4]) {
                Some(r) => Some(
                    r.parse()
                        .with_context(|| format!("Row {}: invalid rating {:?}", row, r))?,
                ),
                None => None,
            },
            phone: optional(cells[5]),
            website: optional(cells[6]),
            place_id: cells[7].to_string(),
        });
    }

    Ok(records)
}

fn optional(cell: &str) -> Option<String> {
    if cell.is_empty() {
        None
    } else {
        Some(cell.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, rating: Option<f64>) -> AccommodationRecord {
        AccommodationRecord {
            name: name.to_string(),
            address: Some("вул. Городоцька, 15".to_string()),
            latitude: 49.8397,
            longitude: 24.0297,
            rating,
            phone: Some("032 123 4567".to_string()),
            website: None,
            place_id: id.to_string(),
        }
    }

    #[test]
    fn test_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_records(&path, &[record("P1", "Готель Львів", Some(4.5))]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(
            lines[0],
            "Назва|||Адреса|||Широта|||Довгота|||Рейтинг|||Телефон|||Сайт|||Place ID"
        );
        assert_eq!(
            lines[1],
            "Готель Львів|||вул. Городоцька, 15|||49.8397|||24.0297|||4.5|||032 123 4567||||||P1"
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale\nstale\nstale\n").unwrap();

        write_records(&path, &[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(!content.contains("stale"));
    }

    #[test]
    fn test_round_trip_preserves_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = vec![
            record("P1", "Hotel Lviv", Some(4.2)),
            record("P2", "Hostel \"Old Town\", Lviv", None),
            AccommodationRecord {
                address: None,
                phone: None,
                website: Some("https://example.com/a|b".to_string()),
                ..record("P3", "Apartment; Rynok", Some(5.0))
            },
        ];

        write_records(&path, &records).unwrap();
        let read = read_records(&path).unwrap();

        assert_eq!(read, records);
    }

    #[test]
    fn test_delimiter_in_value_breaks_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_records(&path, &[record("P1", "Bad|||Name", None)]).unwrap();

        assert!(read_records(&path).is_err());
    }
}
