use ndarray::{Array1, Array2, Axis};
use rand::seq::SliceRandom;
use rand::Rng;

use super::Dataset;
use crate::error::{Error, Result};

impl<F, L> Dataset<F, L> {
    /// Create a new dataset from records and targets
    ///
    /// The sample counts are not validated here, see [`Dataset::check_dimensions`].
    pub fn new(records: Array2<F>, targets: Array1<L>) -> Self {
        Dataset {
            records,
            targets,
            feature_names: Vec::new(),
        }
    }

    /// Number of samples, taken from the rows of the records
    pub fn nsamples(&self) -> usize {
        self.records.nrows()
    }

    pub fn nfeatures(&self) -> usize {
        self.records.ncols()
    }

    pub fn records(&self) -> &Array2<F> {
        &self.records
    }

    pub fn targets(&self) -> &Array1<L> {
        &self.targets
    }

    /// Returns feature names
    ///
    /// A feature name gives a human-readable string describing the purpose of a single feature.
    /// This allow the reader to understand its purpose while analysing results, for example
    /// when reporting the genes of an expression table.
    pub fn feature_names(&self) -> Vec<String> {
        if !self.feature_names.is_empty() {
            self.feature_names.clone()
        } else {
            (0..self.nfeatures())
                .map(|idx| format!("feature-{}", idx))
                .collect()
        }
    }

    /// Updates the feature names of a dataset
    pub fn with_feature_names<I: Into<String>>(mut self, names: Vec<I>) -> Self {
        self.feature_names = names.into_iter().map(|x| x.into()).collect();
        self
    }

    /// Checks that records and targets describe the same number of samples
    pub fn check_dimensions(&self) -> Result<()> {
        let (nrecords, ntargets) = (self.records.nrows(), self.targets.len());
        if nrecords != ntargets {
            return Err(Error::DimensionMismatch { nrecords, ntargets });
        }

        Ok(())
    }

    /// Map targets with a function `f`
    ///
    /// # Example
    ///
    /// ```
    /// use linfa_crossval::Dataset;
    /// use ndarray::array;
    ///
    /// let subtypes = Dataset::new(array![[0.1, 2.3], [1.4, 0.2]], array!["ALL", "AML"]);
    /// let binary = subtypes.map_targets(|x| *x == "AML");
    /// assert_eq!(binary.targets, array![false, true]);
    /// ```
    pub fn map_targets<T, G: FnMut(&L) -> T>(self, fnc: G) -> Dataset<F, T> {
        let Dataset {
            records,
            targets,
            feature_names,
        } = self;

        Dataset {
            records,
            targets: targets.map(fnc),
            feature_names,
        }
    }
}

impl<F: Clone, L: Clone> Dataset<F, L> {
    /// Gather the samples at `indices` into an owned dataset
    ///
    /// Samples appear in the order of `indices`. Panics if an index is out of bounds.
    pub fn select(&self, indices: &[usize]) -> Dataset<F, L> {
        Dataset {
            records: self.records.select(Axis(0), indices),
            targets: self.targets.select(Axis(0), indices),
            feature_names: self.feature_names.clone(),
        }
    }

    /// Apply a random permutation to the samples
    pub fn shuffle<R: Rng>(&self, rng: &mut R) -> Dataset<F, L> {
        let mut indices = (0..self.nsamples()).collect::<Vec<_>>();
        indices.shuffle(rng);

        self.select(&indices)
    }

    /// Split the dataset into a training and a validation part
    ///
    /// The first `ceil(nsamples * ratio)` samples form the training part, the remainder the
    /// validation part. Ratios above one put every sample into the training part.
    pub fn split_with_ratio(self, ratio: f32) -> (Dataset<F, L>, Dataset<F, L>) {
        let nsamples = self.nsamples();
        let n = ((nsamples as f32 * ratio).ceil() as usize).min(nsamples);

        let (first, second) = (
            (0..n).collect::<Vec<_>>(),
            (n..nsamples).collect::<Vec<_>>(),
        );

        (self.select(&first), self.select(&second))
    }
}

impl<F, L> From<(Array2<F>, Array1<L>)> for Dataset<F, L> {
    fn from(rec_tar: (Array2<F>, Array1<L>)) -> Self {
        Dataset::new(rec_tar.0, rec_tar.1)
    }
}
