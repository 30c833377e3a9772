use log::info;
use ndarray::Array1;
use rand::{rngs::SmallRng, SeedableRng};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use super::algorithm::{cross_validate_with_folds, cross_validate_with_folds_par};
use crate::dataset::{Dataset, Float};
use crate::error::{Error, Result};
use crate::folds::FoldAssignment;
use crate::param_guard::ParamGuard;
use crate::traits::Fit;

/// Cross-validation runner
///
/// Entry point for the builder, see [`CrossValidatorParams`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossValidator;

impl CrossValidator {
    pub fn params() -> CrossValidatorParams {
        CrossValidatorParams::new()
    }
}

/// Checked cross-validation parameters
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossValidatorValidParams {
    nfolds: usize,
    seed: Option<u64>,
    parallel: bool,
}

impl CrossValidatorValidParams {
    pub fn nfolds(&self) -> usize {
        self.nfolds
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Compute out-of-fold decision values for `dataset` with the classifier `params`
    ///
    /// The fold assignment is drawn from a `SmallRng` seeded with the configured seed. Without a
    /// configured seed a fresh one is drawn and reported in the result, so that every run can be
    /// repeated.
    pub fn run<F, L, P>(&self, dataset: &Dataset<F, L>, params: &P) -> Result<OutOfFold<F>>
    where
        F: Float,
        L: Clone + Sync,
        P: Fit<F, L> + Sync,
    {
        dataset.check_dimensions()?;

        let seed = self.seed.unwrap_or_else(rand::random);
        let mut rng = SmallRng::seed_from_u64(seed);
        let folds = FoldAssignment::random(dataset.nsamples(), self.nfolds, &mut rng)?;
        info!("assigned {} folds with seed {}", self.nfolds, seed);

        let scores = if self.parallel {
            cross_validate_with_folds_par(dataset, &folds, params)?
        } else {
            cross_validate_with_folds(dataset, &folds, params)?
        };

        Ok(OutOfFold {
            scores,
            folds,
            seed,
        })
    }
}

/// Cross-validation parameters
///
/// # Example
///
/// ```
/// use linfa_crossval::{CrossValidator, Dataset, NearestCentroid};
/// use ndarray::array;
///
/// let dataset = Dataset::new(
///     array![[0., 0.], [0., 1.], [1., 0.], [5., 5.], [5., 6.], [6., 5.]],
///     array![false, false, false, true, true, true],
/// );
///
/// let result = CrossValidator::params()
///     .nfolds(3)
///     .seed(42)
///     .run(&dataset, &NearestCentroid::default());
/// # let _ = result;
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossValidatorParams(CrossValidatorValidParams);

impl CrossValidatorParams {
    /// Create a parameter set with the default values:
    ///  * five folds
    ///  * a seed drawn at run time
    ///  * folds processed sequentially
    pub fn new() -> Self {
        Self(CrossValidatorValidParams {
            nfolds: 5,
            seed: None,
            parallel: false,
        })
    }

    /// Set the number of folds
    pub fn nfolds(mut self, nfolds: usize) -> Self {
        self.0.nfolds = nfolds;
        self
    }

    /// Fix the seed of the fold assignment
    pub fn seed(mut self, seed: u64) -> Self {
        self.0.seed = Some(seed);
        self
    }

    /// Process the folds in parallel with rayon
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.0.parallel = parallel;
        self
    }

    /// Check the parameters and run the cross-validation
    ///
    /// Fails with `InvalidFoldCount` unless `1 < nfolds <= nsamples`, before the classifier is
    /// invoked.
    pub fn run<F, L, P>(&self, dataset: &Dataset<F, L>, params: &P) -> Result<OutOfFold<F>>
    where
        F: Float,
        L: Clone + Sync,
        P: Fit<F, L> + Sync,
    {
        self.check_ref()?.run(dataset, params)
    }
}

impl Default for CrossValidatorParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Every combination of parameters is accepted here. The fold count is only meaningful relative
/// to the number of samples and is checked in [`CrossValidatorValidParams::run`].
impl ParamGuard for CrossValidatorParams {
    type Checked = CrossValidatorValidParams;
    type Error = Error;

    fn check_ref(&self) -> Result<&Self::Checked> {
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

/// Result of a cross-validation run
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct OutOfFold<F> {
    /// Out-of-fold decision value of every sample
    pub scores: Array1<F>,
    /// Fold assignment used in the run
    pub folds: FoldAssignment,
    /// Seed which reproduces `folds`
    pub seed: u64,
}

impl<F: Float> OutOfFold<F> {
    /// Decision values of the samples held out in `fold`, in the order of
    /// [`FoldAssignment::held_out`]
    pub fn fold_scores(&self, fold: usize) -> Array1<F> {
        self.folds
            .held_out(fold)
            .iter()
            .map(|&idx| self.scores[idx])
            .collect()
    }
}
