use log::{debug, info, warn};
use ndarray::{Array1, Axis};
use rand::Rng;
use rayon::prelude::*;

use crate::dataset::{Dataset, Float};
use crate::error::{BoxedError, Error, Result};
use crate::folds::FoldAssignment;
use crate::traits::{DecisionFunction, Fit};

/// Out-of-fold decision values for every sample of `dataset`
///
/// The samples are partitioned into `nfolds` folds with a single permutation drawn from `rng`.
/// For every fold a model is fitted on the remaining folds with `params` and the held-out
/// samples are scored with it, so the value at position `i` of the result comes from a model
/// which never saw sample `i`.
///
/// # Errors
///
/// * `DimensionMismatch` if records and targets disagree on the number of samples
/// * `InvalidFoldCount` unless `1 < nfolds <= nsamples`
/// * `ClassifierFailure` if fitting or scoring fails on a fold, no partial result is returned
///
/// The first two are raised before the classifier is invoked.
///
/// # Example
///
/// ```
/// use linfa_crossval::{cross_validate, Dataset, NearestCentroid};
/// use ndarray::array;
/// use rand::{rngs::SmallRng, SeedableRng};
///
/// let dataset = Dataset::new(
///     array![[0., 0.], [0., 1.], [1., 0.], [5., 5.], [5., 6.], [6., 5.]],
///     array![false, false, false, true, true, true],
/// );
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let scores = cross_validate(&dataset, 3, &NearestCentroid::default(), &mut rng);
/// # let _ = scores;
/// ```
pub fn cross_validate<F, L, P, R>(
    dataset: &Dataset<F, L>,
    nfolds: usize,
    params: &P,
    rng: &mut R,
) -> Result<Array1<F>>
where
    F: Float,
    L: Clone,
    P: Fit<F, L>,
    R: Rng + ?Sized,
{
    dataset.check_dimensions()?;

    let folds = FoldAssignment::random(dataset.nsamples(), nfolds, rng)?;
    cross_validate_with_folds(dataset, &folds, params)
}

/// Like [`cross_validate`], but runs one rayon task per fold
///
/// The permutation is drawn before the folds are dispatched, so the result for a fixed seed is
/// identical to the sequential version. When a fold fails no further folds are started and the
/// error of one failing fold is returned.
pub fn cross_validate_par<F, L, P, R>(
    dataset: &Dataset<F, L>,
    nfolds: usize,
    params: &P,
    rng: &mut R,
) -> Result<Array1<F>>
where
    F: Float,
    L: Clone + Sync,
    P: Fit<F, L> + Sync,
    R: Rng + ?Sized,
{
    dataset.check_dimensions()?;

    let folds = FoldAssignment::random(dataset.nsamples(), nfolds, rng)?;
    cross_validate_with_folds_par(dataset, &folds, params)
}

/// Out-of-fold decision values for a given fold assignment
///
/// Folds are processed in ascending order and the run stops at the first failing fold.
pub fn cross_validate_with_folds<F, L, P>(
    dataset: &Dataset<F, L>,
    folds: &FoldAssignment,
    params: &P,
) -> Result<Array1<F>>
where
    F: Float,
    L: Clone,
    P: Fit<F, L>,
{
    check_folds(dataset, folds)?;
    info!(
        "cross-validating {} samples in {} folds",
        dataset.nsamples(),
        folds.nfolds()
    );

    let mut scores = Array1::zeros(dataset.nsamples());
    for fold in 0..folds.nfolds() {
        let values = score_fold(dataset, folds, fold, params)?;
        scatter(&mut scores, folds.held_out(fold), values);
    }

    Ok(scores)
}

/// Parallel version of [`cross_validate_with_folds`]
pub fn cross_validate_with_folds_par<F, L, P>(
    dataset: &Dataset<F, L>,
    folds: &FoldAssignment,
    params: &P,
) -> Result<Array1<F>>
where
    F: Float,
    L: Clone + Sync,
    P: Fit<F, L> + Sync,
{
    check_folds(dataset, folds)?;
    info!(
        "cross-validating {} samples in {} parallel folds",
        dataset.nsamples(),
        folds.nfolds()
    );

    let per_fold = (0..folds.nfolds())
        .into_par_iter()
        .map(|fold| score_fold(dataset, folds, fold, params))
        .collect::<Result<Vec<_>>>()?;

    let mut scores = Array1::zeros(dataset.nsamples());
    for (fold, values) in per_fold.into_iter().enumerate() {
        scatter(&mut scores, folds.held_out(fold), values);
    }

    Ok(scores)
}

fn check_folds<F, L>(dataset: &Dataset<F, L>, folds: &FoldAssignment) -> Result<()> {
    dataset.check_dimensions()?;

    if folds.nsamples() != dataset.nsamples() {
        return Err(Error::Parameters(format!(
            "fold assignment covers {} samples, but the dataset has {}",
            folds.nsamples(),
            dataset.nsamples()
        )));
    }

    Ok(())
}

/// Fit on every fold except `fold` and score the held-out samples
fn score_fold<F, L, P>(
    dataset: &Dataset<F, L>,
    folds: &FoldAssignment,
    fold: usize,
    params: &P,
) -> Result<Array1<F>>
where
    F: Float,
    L: Clone,
    P: Fit<F, L>,
{
    let held_out = folds.held_out(fold);
    let training = dataset.select(&folds.training(fold));
    let validation = dataset.records.select(Axis(0), held_out);

    debug!(
        "fold {}: fitting on {} samples, scoring {}",
        fold,
        training.nsamples(),
        held_out.len()
    );

    let failure = |source: BoxedError| {
        warn!("fold {} failed: {}", fold, source);
        Error::ClassifierFailure {
            fold,
            held_out: held_out.to_vec(),
            source,
        }
    };

    let model = params.fit(&training).map_err(|e| failure(e.into()))?;
    let values = model
        .decision_function(validation.view())
        .map_err(|e| failure(e.into()))?;

    if values.len() != held_out.len() {
        return Err(Error::ScoreCount {
            fold,
            expected: held_out.len(),
            actual: values.len(),
        });
    }

    Ok(values)
}

fn scatter<F: Float>(scores: &mut Array1<F>, held_out: &[usize], values: Array1<F>) {
    for (&idx, &value) in held_out.iter().zip(values.iter()) {
        scores[idx] = value;
    }
}
