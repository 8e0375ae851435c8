//! Spreadsheet writer: serializes export tables to disk, one CSV file per
//! sheet. The row builder in [`crate::domain::export`] knows nothing about
//! files; this module knows nothing about how rows are computed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::UserDirs;
use thiserror::Error;

use crate::domain::export::ExportTable;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Where exports land: the user's download directory when the platform
/// provides one, the working directory otherwise.
pub fn default_export_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Writes one `<sheet>.csv` per table into `dir`. Returns the written paths
/// in table order.
pub fn write_workbook(dir: &Path, tables: &[ExportTable]) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(tables.len());
    for table in tables {
        let path = dir.join(format!("{}.csv", table.sheet));
        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(&table.header)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::entities::{FixedCosts, ProductEntry};
    use crate::domain::evaluation::evaluate;
    use crate::domain::export::build_tables;
    use crate::i18n::Language;

    #[test]
    fn writes_all_four_sheets() {
        let products = vec![ProductEntry {
            name: "Prints".into(),
            price: Decimal::from(25),
            units: 40,
            materials: Decimal::from(4),
            shipping: Decimal::from(2),
            fees: Decimal::from(1),
        }];
        let fixed = FixedCosts::default();
        let aggregate = evaluate(&products, &fixed);

        let mut tables = Vec::new();
        for language in Language::ALL {
            tables.extend(build_tables(language, &products, &aggregate));
        }

        let dir = tempfile::tempdir().unwrap();
        let written = write_workbook(dir.path(), &tables).unwrap();
        assert_eq!(written.len(), 4);
        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "Products_EN.csv",
                "Summary_EN.csv",
                "Productos_ES.csv",
                "Resumen_ES.csv"
            ]
        );
    }

    #[test]
    fn written_rows_read_back_intact() {
        let products = vec![ProductEntry {
            name: "Mugs, large".into(),
            price: Decimal::from(18),
            units: 12,
            materials: Decimal::from(6),
            shipping: Decimal::ZERO,
            fees: Decimal::from(2),
        }];
        let fixed = FixedCosts {
            rent: Decimal::from(90),
            ..FixedCosts::default()
        };
        let aggregate = evaluate(&products, &fixed);
        let tables = build_tables(Language::English, &products, &aggregate);

        let dir = tempfile::tempdir().unwrap();
        let written = write_workbook(dir.path(), &tables).unwrap();

        let mut reader = csv::Reader::from_path(&written[0]).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.get(0), Some("Product / Service"));
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        // The comma in the name survives the round trip.
        assert_eq!(rows[0].get(0), Some("Mugs, large"));
        assert_eq!(rows[0].get(3), Some("216"));
    }
}
