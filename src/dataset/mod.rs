//! Datasets
//!
//! This module implements the dataset struct handed to the cross-validator and the classifier
//! collaborators, together with the numeric and label traits it is generic over.
use ndarray::{Array1, Array2, ScalarOperand};
use num_traits::{FromPrimitive, NumAssignOps};

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::iter::Sum;

mod impl_dataset;
mod impl_labels;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. They are used in the records of a dataset
/// and in the decision scores produced during cross-validation.
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Sum
    + NumAssignOps
    + ScalarOperand
    + approx::AbsDiffEq
{
}

impl Float for f32 {}

impl Float for f64 {}

/// Discrete labels
///
/// Labels are countable, comparable and hashable. Boolean (binary task), signed integers (the
/// conventional +1/-1 encoding), usize and strings (multi-class tasks) are supported.
pub trait Label: PartialEq + Eq + Hash + Clone {}

impl Label for bool {}
impl Label for usize {}
impl Label for i32 {}
impl Label for String {}
impl Label for &str {}

/// Dataset
///
/// A dataset is an ordered collection of samples. Each sample has a feature vector, stored as
/// one row of `records`, and a target at the same position in `targets`.
///
/// # Fields
///
/// * `records`: a two-dimensional matrix with dimensionality (nsamples, nfeatures)
/// * `targets`: a one-dimensional array with dimensionality (nsamples)
/// * `feature_names`: optional descriptive feature names with dimensionality (nfeatures)
///
/// The fields are public, so the sample counts of `records` and `targets` are not enforced at
/// construction. Call [`Dataset::check_dimensions`] before relying on it; the cross-validator
/// does so before any fold is processed.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<F, L> {
    pub records: Array2<F>,
    pub targets: Array1<L>,

    feature_names: Vec<String>,
}

/// Get the labels in all targets
pub trait Labels {
    type Elem: Label;

    fn label_count(&self) -> HashMap<Self::Elem, usize>;

    fn label_set(&self) -> HashSet<Self::Elem> {
        self.label_count().into_iter().map(|(k, _)| k).collect()
    }

    fn labels(&self) -> Vec<Self::Elem> {
        self.label_set().into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn dataset_implements_required_methods() {
        let mut rng = SmallRng::seed_from_u64(42);

        let dataset = Dataset::new(array![[1., 2.], [3., 4.], [5., 6.]], array![1, -1, 1]);
        assert_eq!(dataset.nsamples(), 3);
        assert_eq!(dataset.nfeatures(), 2);
        assert!(dataset.check_dimensions().is_ok());

        // Shuffle keeps rows aligned with their targets
        let shuffled = dataset.shuffle(&mut rng);
        assert_eq!(shuffled.nsamples(), 3);
        for (row, target) in shuffled.records.rows().into_iter().zip(shuffled.targets.iter()) {
            let expected = if row[0] == 3. { -1 } else { 1 };
            assert_eq!(*target, expected);
        }

        // Select gathers rows in the requested order
        let subset = dataset.select(&[2, 0]);
        assert_abs_diff_eq!(subset.records, array![[5., 6.], [1., 2.]]);
        assert_eq!(subset.targets, array![1, 1]);

        // Relabel
        let relabeled = dataset.map_targets(|x| *x > 0);
        assert_eq!(relabeled.targets, array![true, false, true]);
    }

    #[test]
    fn split_with_ratio_rounds_up() {
        let linspace: Array1<f64> = Array1::linspace(0.0, 0.8, 100);
        let records = Array2::from_shape_vec((50, 2), linspace.to_vec()).unwrap();
        let targets: Array1<usize> = (0..50).collect();
        let dataset = Dataset::from((records, targets));

        let (train, val) = dataset.clone().split_with_ratio(0.25);
        assert_eq!(train.nsamples(), 13);
        assert_eq!(val.nsamples(), 37);
        assert_eq!(train.targets[12], 12);
        assert_eq!(val.targets[0], 13);

        let (train, val) = dataset.split_with_ratio(1.5);
        assert_eq!(train.nsamples(), 50);
        assert_eq!(val.nsamples(), 0);
    }

    #[test]
    fn mismatched_dimensions_are_reported() {
        let dataset = Dataset::new(array![[1., 2.], [3., 4.]], array![true]);
        match dataset.check_dimensions() {
            Err(Error::DimensionMismatch {
                nrecords,
                ntargets,
            }) => {
                assert_eq!(nrecords, 2);
                assert_eq!(ntargets, 1);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn feature_names_default_and_override() {
        let dataset = Dataset::new(array![[1., 2.]], array![0usize]);
        assert_eq!(dataset.feature_names(), vec!["feature-0", "feature-1"]);

        let dataset = dataset.with_feature_names(vec!["BRCA1", "TP53"]);
        assert_eq!(dataset.feature_names(), vec!["BRCA1", "TP53"]);
    }

    #[test]
    fn counts_labels() {
        let dataset = Dataset::new(
            array![[1., 2.], [2., 1.], [0., 0.], [2., 2.]],
            array![0usize, 1, 2, 2],
        );

        let counts = dataset.label_count();
        assert_eq!(counts[&0], 1);
        assert_eq!(counts[&1], 1);
        assert_eq!(counts[&2], 2);

        let mut labels = dataset.labels();
        labels.sort_unstable();
        assert_eq!(labels, vec![0, 1, 2]);
    }
}
