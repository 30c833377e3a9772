//! Error types in linfa-crossval
//!

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error raised by an external classifier
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter {0}")]
    Parameters(String),
    /// The fold count must satisfy `1 < nfolds <= nsamples`
    #[error("invalid fold count {nfolds} for {nsamples} samples")]
    InvalidFoldCount { nfolds: usize, nsamples: usize },
    /// Records and targets disagree on the number of samples
    #[error("dimension mismatch: {nrecords} records but {ntargets} targets")]
    DimensionMismatch { nrecords: usize, ntargets: usize },
    /// The classifier failed to fit or score the given fold
    #[error("classifier failed on fold {fold}: {source}")]
    ClassifierFailure {
        fold: usize,
        held_out: Vec<usize>,
        #[source]
        source: BoxedError,
    },
    /// The classifier returned a wrong number of decision values
    #[error("fold {fold} produced {actual} scores for {expected} held-out samples")]
    ScoreCount {
        fold: usize,
        expected: usize,
        actual: usize,
    },
}

impl Error {
    /// Index of the fold which caused the failure, if any
    pub fn fold(&self) -> Option<usize> {
        match self {
            Error::ClassifierFailure { fold, .. } | Error::ScoreCount { fold, .. } => Some(*fold),
            _ => None,
        }
    }
}
