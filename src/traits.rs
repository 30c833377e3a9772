//! Provide traits for the classifier collaborators
//!
//! The cross-validator never looks inside a classifier. It only needs a hyperparameter set which
//! can be [fitted](Fit) on a dataset and a fitted model which produces
//! [decision values](DecisionFunction) for unseen records.
use ndarray::{Array1, ArrayView2};

use crate::dataset::{Dataset, Float};

/// Fittable algorithms
///
/// Implemented on the (checked) hyperparameters of a classifier. The same hyperparameter set is
/// used unchanged for every fold of a cross-validation run.
pub trait Fit<F: Float, L> {
    /// Fitted model
    type Object: DecisionFunction<F>;
    /// Error raised while fitting
    type Error: std::error::Error + Send + Sync + 'static;

    fn fit(&self, dataset: &Dataset<F, L>) -> Result<Self::Object, Self::Error>;
}

/// Continuous decision values
///
/// The sign of a decision value denotes the predicted class of a binary task and its magnitude
/// the confidence, so the values can be ranked for ROC or precision-recall analysis.
pub trait DecisionFunction<F: Float> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns one decision value per row of `records`
    fn decision_function(&self, records: ArrayView2<F>) -> Result<Array1<F>, Self::Error>;
}

/// Hard label prediction
pub trait Predict<F: Float, L> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns one label per row of `records`
    fn predict(&self, records: ArrayView2<F>) -> Result<Array1<L>, Self::Error>;
}
