//! Nearest centroid baseline
//!
//! A minimal binary classifier which implements the collaborator traits. It represents each class
//! by the mean of its training samples and scores a record by how much closer it lies to the
//! positive centroid than to the negative one:
//!
//! `score(x) = ||x - c_neg||² - ||x - c_pos||²`
//!
//! Positive scores predict the positive class. Useful as a reference point next to kernel
//! machines and for exercising the cross-validator.
use ndarray::{Array1, ArrayBase, ArrayView2, Axis, Data, Ix1};
use thiserror::Error;

use crate::dataset::{Dataset, Float};
use crate::traits::{DecisionFunction, Fit, Predict};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BaselineError {
    /// A class is absent from the training data
    #[error("training data contains no {0} samples")]
    MissingClass(&'static str),
    #[error("expected {expected} features, but got {actual}")]
    FeatureCount { expected: usize, actual: usize },
}

/// Nearest centroid hyperparameters
///
/// Fits on `bool` targets (`true` is positive) or on `i32` targets with the +1/-1 encoding (any
/// positive value is positive).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NearestCentroid;

/// Fitted nearest centroid model
#[derive(Debug, Clone, PartialEq)]
pub struct CentroidModel<F> {
    positive: Array1<F>,
    negative: Array1<F>,
}

impl<F: Float> CentroidModel<F> {
    pub fn positive_centroid(&self) -> &Array1<F> {
        &self.positive
    }

    pub fn negative_centroid(&self) -> &Array1<F> {
        &self.negative
    }
}

fn fit_centroids<F: Float, L, G: Fn(&L) -> bool>(
    dataset: &Dataset<F, L>,
    is_positive: G,
) -> Result<CentroidModel<F>, BaselineError> {
    let centroid = |positive: bool| {
        let indices = dataset
            .targets
            .iter()
            .enumerate()
            .filter(|(_, t)| is_positive(*t) == positive)
            .map(|(idx, _)| idx)
            .collect::<Vec<_>>();

        dataset.records.select(Axis(0), &indices).mean_axis(Axis(0))
    };

    Ok(CentroidModel {
        positive: centroid(true).ok_or(BaselineError::MissingClass("positive"))?,
        negative: centroid(false).ok_or(BaselineError::MissingClass("negative"))?,
    })
}

fn squared_distance<F: Float>(x: &ArrayBase<impl Data<Elem = F>, Ix1>, c: &Array1<F>) -> F {
    x.iter()
        .zip(c.iter())
        .map(|(&a, &b)| (a - b) * (a - b))
        .sum()
}

impl<F: Float> Fit<F, bool> for NearestCentroid {
    type Object = CentroidModel<F>;
    type Error = BaselineError;

    fn fit(&self, dataset: &Dataset<F, bool>) -> Result<Self::Object, Self::Error> {
        fit_centroids(dataset, |t| *t)
    }
}

impl<F: Float> Fit<F, i32> for NearestCentroid {
    type Object = CentroidModel<F>;
    type Error = BaselineError;

    fn fit(&self, dataset: &Dataset<F, i32>) -> Result<Self::Object, Self::Error> {
        fit_centroids(dataset, |t| *t > 0)
    }
}

impl<F: Float> DecisionFunction<F> for CentroidModel<F> {
    type Error = BaselineError;

    fn decision_function(&self, records: ArrayView2<F>) -> Result<Array1<F>, Self::Error> {
        if records.ncols() != self.positive.len() {
            return Err(BaselineError::FeatureCount {
                expected: self.positive.len(),
                actual: records.ncols(),
            });
        }

        Ok(records
            .rows()
            .into_iter()
            .map(|row| {
                squared_distance(&row, &self.negative) - squared_distance(&row, &self.positive)
            })
            .collect())
    }
}

impl<F: Float> Predict<F, bool> for CentroidModel<F> {
    type Error = BaselineError;

    fn predict(&self, records: ArrayView2<F>) -> Result<Array1<bool>, Self::Error> {
        Ok(self.decision_function(records)?.mapv(|x| x > F::zero()))
    }
}

impl<F: Float> Predict<F, i32> for CentroidModel<F> {
    type Error = BaselineError;

    fn predict(&self, records: ArrayView2<F>) -> Result<Array1<i32>, Self::Error> {
        Ok(self
            .decision_function(records)?
            .mapv(|x| if x > F::zero() { 1 } else { -1 }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn centroids_are_class_means() {
        let dataset = Dataset::new(
            array![[0., 0.], [2., 0.], [4., 4.], [6., 4.]],
            array![false, false, true, true],
        );

        let model = NearestCentroid.fit(&dataset).unwrap();
        assert_abs_diff_eq!(*model.negative_centroid(), array![1., 0.]);
        assert_abs_diff_eq!(*model.positive_centroid(), array![5., 4.]);
    }

    #[test]
    fn scores_compare_squared_distances() {
        let dataset = Dataset::new(array![[0., 0.], [2., 0.]], array![-1, 1]);
        let model = NearestCentroid.fit(&dataset).unwrap();

        let scores = model
            .decision_function(array![[2., 0.], [1., 0.], [-1., 3.]].view())
            .unwrap();
        assert_abs_diff_eq!(scores, array![4., 0., -8.]);

        let labels: Array1<i32> = model.predict(array![[3., 1.], [-3., 1.]].view()).unwrap();
        assert_eq!(labels, array![1, -1]);

        let labels: Array1<bool> = model.predict(array![[3., 1.], [-3., 1.]].view()).unwrap();
        assert_eq!(labels, array![true, false]);
    }

    #[test]
    fn missing_class_is_an_error() {
        let dataset = Dataset::new(array![[0., 0.], [2., 0.]], array![true, true]);
        let err = Fit::<f64, bool>::fit(&NearestCentroid, &dataset).unwrap_err();
        assert_eq!(err, BaselineError::MissingClass("negative"));
    }

    #[test]
    fn wrong_feature_count_is_an_error() {
        let dataset = Dataset::new(array![[0., 0.], [2., 0.]], array![true, false]);
        let model = NearestCentroid.fit(&dataset).unwrap();

        let err = model.decision_function(array![[1., 2., 3.]].view()).unwrap_err();
        assert_eq!(
            err,
            BaselineError::FeatureCount {
                expected: 2,
                actual: 3
            }
        );
    }
}
