//! `linfa-crossval` provides leakage-free evaluation of classifiers with k-fold
//! cross-validation.
//!
//! ## The Big Picture
//!
//! Tuning a support vector machine (the regularisation strength `C`, the kernel and its
//! parameters such as the Gaussian width) needs an honest estimate of how well every
//! configuration generalises. The usual workflow generates or loads a labelled dataset, splits it
//! into `k` folds, fits a model on `k - 1` of them and scores the remaining one. Repeating this
//! for every fold yields an out-of-fold decision value for every sample, which is then fed into
//! ROC, precision-recall or accuracy analysis.
//!
//! This crate implements the cross-validation harness. Classifiers plug in through the
//! [`Fit`](traits::Fit) and [`DecisionFunction`](traits::DecisionFunction) traits, so any solver
//! can be evaluated as a black box.
//!
//! ## Example
//!
//! ```
//! use linfa_crossval::prelude::*;
//! use ndarray::array;
//!
//! let dataset = Dataset::new(
//!     array![[0., 0.], [0., 1.], [1., 0.], [1., 1.], [5., 5.], [5., 6.], [6., 5.], [6., 6.]],
//!     array![-1, -1, -1, -1, 1, 1, 1, 1],
//! );
//!
//! let result = CrossValidator::params()
//!     .nfolds(4)
//!     .seed(42)
//!     .run(&dataset, &NearestCentroid)?;
//!
//! assert_eq!(result.scores.len(), 8);
//! for (score, label) in result.scores.iter().zip(dataset.targets.iter()) {
//!     assert_eq!(*score > 0., *label > 0);
//! }
//! # Ok::<(), linfa_crossval::Error>(())
//! ```

pub mod baseline;
pub mod cross_validation;
pub mod dataset;
pub mod error;
pub mod folds;
pub mod param_guard;
pub mod prelude;
pub mod traits;

pub use baseline::{BaselineError, CentroidModel, NearestCentroid};
pub use cross_validation::{
    cross_validate, cross_validate_par, cross_validate_with_folds, cross_validate_with_folds_par,
    CrossValidator, CrossValidatorParams, CrossValidatorValidParams, OutOfFold,
};
pub use dataset::{Dataset, Float, Label};
pub use error::Error;
pub use folds::FoldAssignment;
pub use param_guard::ParamGuard;
