use crate::domain::model::{ReferenceDataset, ReferencePoint};
use crate::utils::error::{AppError, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 2] = ["area", "price"];

// Other columns (bedrooms, age, ...) are ignored; the chart only needs these two.
#[derive(Debug, Deserialize)]
struct DatasetRow {
    area: Option<f64>,
    price: Option<f64>,
}

pub fn load_reference_dataset<P: AsRef<Path>>(path: P) -> Result<ReferenceDataset> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| AppError::DatasetError {
        message: format!("cannot open '{}': {}", path.display(), e),
    })?;
    let dataset = read_reference_dataset(file)?;
    tracing::debug!(
        "Loaded {} reference points from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

pub fn read_reference_dataset<R: Read>(reader: R) -> Result<ReferenceDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(AppError::DatasetError {
                message: format!("missing required column '{}'", column),
            });
        }
    }

    let mut points = Vec::new();
    for (index, row) in reader.deserialize::<DatasetRow>().enumerate() {
        let row = row?;
        match (row.area, row.price) {
            (Some(area), Some(price)) if area.is_finite() && price.is_finite() => {
                points.push(ReferencePoint { area, price });
            }
            _ => {
                // +2: header line and 1-based numbering
                tracing::warn!("Skipping dataset row {}: missing area or price", index + 2);
            }
        }
    }

    if points.is_empty() {
        return Err(AppError::DatasetError {
            message: "dataset contains no usable (area, price) rows".to_string(),
        });
    }

    Ok(ReferenceDataset::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_reads_area_and_price_in_order() {
        let csv = "area,bedrooms,age,price\n2600,3,20,550000\n3200,,18,610000\n";
        let dataset = read_reference_dataset(csv.as_bytes()).unwrap();

        assert_eq!(
            dataset.points(),
            &[
                ReferencePoint {
                    area: 2600.0,
                    price: 550000.0
                },
                ReferencePoint {
                    area: 3200.0,
                    price: 610000.0
                },
            ]
        );
    }

    #[test]
    fn test_skips_rows_without_price() {
        let csv = "area,price\n2600,550000\n3000,\n";
        let dataset = read_reference_dataset(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let csv = "area,bedrooms\n2600,3\n";
        let err = read_reference_dataset(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn test_non_numeric_cell_is_rejected() {
        let csv = "area,price\nlarge,550000\n";
        let err = read_reference_dataset(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::CsvError(_)));
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        let csv = "area,price\n";
        assert!(read_reference_dataset(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"area,bedrooms,age,price\n4000,5,8,760000\n")
            .unwrap();

        let dataset = load_reference_dataset(temp_file.path()).unwrap();
        assert_eq!(dataset.len(), 1);
        assert!(!dataset.is_empty());
    }
}
