use thiserror::Error;

pub type Result<T> = std::result::Result<T, DatasetError>;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
    /// A feature value is not a number
    #[error("could not parse {value:?} in row {row}, column {column}")]
    Parse {
        row: usize,
        column: usize,
        value: String,
    },
    #[error("label column {column} out of range for a table with {ncolumns} columns")]
    LabelColumn { column: usize, ncolumns: usize },
    #[error("table contains no samples")]
    Empty,
    #[error("invalid distribution parameter: {0}")]
    Distribution(String),
}
