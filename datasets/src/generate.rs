//! Utility functions for randomly generating labelled datasets

use linfa_crossval::Dataset;
use ndarray::{array, s, Array1, Array2, ArrayBase, Data, Ix2};
use ndarray_rand::{
    rand::Rng,
    rand_distr::{Distribution, Normal},
    RandomExt,
};

use crate::error::{DatasetError, Result};

/// Given an input matrix `centroids`, with shape `(n_classes, n_features)`, generate
/// `n_per_class` samples around each centroid.
///
/// Every sample is the centroid of its class plus isotropic Gaussian noise with standard
/// deviation `std_dev`. The samples of class `i` are labelled `i` and stored contiguously, so
/// shuffle the dataset before splitting it.
pub fn gaussian_classes<R: Rng>(
    n_per_class: usize,
    centroids: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    std_dev: f64,
    rng: &mut R,
) -> Result<Dataset<f64, usize>> {
    let noise = Normal::new(0., std_dev).map_err(|e| DatasetError::Distribution(e.to_string()))?;

    let (n_classes, n_features) = centroids.dim();
    let mut records = Array2::zeros((n_classes * n_per_class, n_features));
    let mut targets = Array1::zeros(n_classes * n_per_class);

    for (class, centroid) in centroids.rows().into_iter().enumerate() {
        let rows = class * n_per_class..(class + 1) * n_per_class;

        let samples = sample_around(n_per_class, &centroid, noise, rng);
        records.slice_mut(s![rows.clone(), ..]).assign(&samples);
        targets.slice_mut(s![rows]).fill(class);
    }

    Ok(Dataset::new(records, targets))
}

/// Two-dimensional binary task with one Gaussian class on each side of the diagonal
///
/// The negative class is centred at `(-separation / 2, -separation / 2)` and the positive class
/// at `(separation / 2, separation / 2)`. Small separations relative to `std_dev` give overlapping
/// classes, which is where the regularisation strength of a classifier matters.
pub fn two_gaussians<R: Rng>(
    n_per_class: usize,
    separation: f64,
    std_dev: f64,
    rng: &mut R,
) -> Result<Dataset<f64, bool>> {
    let half = separation / 2.;
    let centroids = array![[-half, -half], [half, half]];

    Ok(gaussian_classes(n_per_class, &centroids, std_dev, rng)?
        .map_targets(|class| *class == 1)
        .with_feature_names(vec!["x", "y"]))
}

fn sample_around<R: Rng>(
    n_samples: usize,
    centroid: &ArrayBase<impl Data<Elem = f64>, ndarray::Ix1>,
    distribution: impl Distribution<f64>,
    rng: &mut R,
) -> Array2<f64> {
    let origin: Array2<f64> = Array2::random_using((n_samples, centroid.len()), distribution, rng);
    origin + centroid
}
