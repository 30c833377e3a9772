//! Gene-expression tables
//!
//! Expression studies are commonly shared as a table with one row per sample: a class column
//! (for example the cancer subtype) and one numeric column per gene. The header row holds the
//! gene names, which become the feature names of the loaded dataset.
use std::io::Read;

use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use linfa_crossval::Dataset;
use ndarray::{Array1, Array2};

use crate::error::{DatasetError, Result};

/// Read a gzipped expression table
pub fn from_gz_csv<R: Read>(
    gz: R,
    label_column: usize,
    separator: u8,
) -> Result<Dataset<f64, String>> {
    from_csv(GzDecoder::new(gz), label_column, separator)
}

/// Read an expression table with a header row
///
/// The field in `label_column` is the class of the sample, every other field must parse as a
/// floating point number. Rows with a differing number of fields are rejected by the CSV reader.
///
/// # Example
///
/// ```
/// use linfa_crossval_datasets::expression;
///
/// let table = "subtype,BRCA1,TP53\nALL,0.5,1.25\nAML,2.0,-0.5\n";
/// let dataset = expression::from_csv(table.as_bytes(), 0, b',').unwrap();
///
/// assert_eq!(dataset.feature_names(), vec!["BRCA1", "TP53"]);
/// assert_eq!(dataset.targets[1], "AML");
/// ```
pub fn from_csv<R: Read>(
    csv: R,
    label_column: usize,
    separator: u8,
) -> Result<Dataset<f64, String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(separator)
        .from_reader(csv);

    let headers = reader.headers()?.clone();
    if label_column >= headers.len() {
        return Err(DatasetError::LabelColumn {
            column: label_column,
            ncolumns: headers.len(),
        });
    }

    let feature_names = headers
        .iter()
        .enumerate()
        .filter(|(column, _)| *column != label_column)
        .map(|(_, name)| name.trim().to_string())
        .collect::<Vec<_>>();

    let mut values = Vec::new();
    let mut labels = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;

        for (column, field) in record.iter().enumerate() {
            let field = field.trim();
            if column == label_column {
                labels.push(field.to_string());
            } else {
                let value = field.parse::<f64>().map_err(|_| DatasetError::Parse {
                    row,
                    column,
                    value: field.to_string(),
                })?;
                values.push(value);
            }
        }
    }

    if labels.is_empty() {
        return Err(DatasetError::Empty);
    }

    let records = Array2::from_shape_vec((labels.len(), feature_names.len()), values)?;

    Ok(Dataset::new(records, Array1::from(labels)).with_feature_names(feature_names))
}
