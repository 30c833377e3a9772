//! Fold assignment for k-fold cross-validation
//!
//! A [`FoldAssignment`] maps every sample index of a dataset to exactly one fold. Random
//! assignments are produced by cutting a single uniform permutation of the sample indices into
//! contiguous groups. The groups are as equal as possible: the first `nsamples % nfolds` folds
//! receive `ceil(nsamples / nfolds)` samples and the remaining folds `floor(nsamples / nfolds)`.
//! Indices inside each fold are kept in ascending order.
use rand::seq::SliceRandom;
use rand::Rng;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Checks that `1 < nfolds <= nsamples`
fn check_fold_count(nfolds: usize, nsamples: usize) -> Result<()> {
    if nfolds <= 1 || nfolds > nsamples {
        return Err(Error::InvalidFoldCount { nfolds, nsamples });
    }

    Ok(())
}

/// Partition of the sample indices `0..nsamples` into `nfolds` disjoint folds
///
/// Only the fold id of every sample is serialized. Deserialization goes through
/// [`FoldAssignment::from_assignment`], so a restored partition is checked like a constructed one.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        crate = "serde_crate",
        try_from = "FoldIds",
        into = "FoldIds"
    )
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldAssignment {
    assignment: Vec<usize>,
    folds: Vec<Vec<usize>>,
}

/// Serialized form of a [`FoldAssignment`]
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(crate = "serde_crate")]
struct FoldIds {
    assignment: Vec<usize>,
    nfolds: usize,
}

#[cfg(feature = "serde")]
impl std::convert::TryFrom<FoldIds> for FoldAssignment {
    type Error = Error;

    fn try_from(ids: FoldIds) -> Result<Self> {
        FoldAssignment::from_assignment(ids.assignment, ids.nfolds)
    }
}

#[cfg(feature = "serde")]
impl From<FoldAssignment> for FoldIds {
    fn from(folds: FoldAssignment) -> Self {
        FoldIds {
            nfolds: folds.nfolds(),
            assignment: folds.assignment,
        }
    }
}

impl FoldAssignment {
    /// Draw a random fold assignment
    ///
    /// The random source is consumed exactly once, for the permutation of the sample indices.
    /// Two calls with identically seeded generators therefore produce the same partition.
    ///
    /// # Example
    ///
    /// ```
    /// use linfa_crossval::FoldAssignment;
    /// use rand::{rngs::SmallRng, SeedableRng};
    ///
    /// let mut rng = SmallRng::seed_from_u64(42);
    /// let folds = FoldAssignment::random(10, 3, &mut rng).unwrap();
    /// assert_eq!(folds.fold_sizes(), vec![4, 3, 3]);
    /// ```
    pub fn random<R: Rng + ?Sized>(nsamples: usize, nfolds: usize, rng: &mut R) -> Result<Self> {
        check_fold_count(nfolds, nsamples)?;

        let mut permutation = (0..nsamples).collect::<Vec<_>>();
        permutation.shuffle(rng);

        let (base, remainder) = (nsamples / nfolds, nsamples % nfolds);
        let mut assignment = vec![0; nsamples];
        let mut folds = Vec::with_capacity(nfolds);

        let mut start = 0;
        for fold in 0..nfolds {
            let size = if fold < remainder { base + 1 } else { base };

            let mut group = permutation[start..start + size].to_vec();
            group.sort_unstable();
            for &idx in &group {
                assignment[idx] = fold;
            }

            folds.push(group);
            start += size;
        }

        Ok(FoldAssignment { assignment, folds })
    }

    /// Build a fold assignment from an explicit fold id per sample
    ///
    /// Every id must be smaller than `nfolds` and every fold must hold at least one sample.
    ///
    /// Unlike [`FoldAssignment::random`] this constructor does not balance the folds: any
    /// partition into non-empty folds is accepted, so fold sizes may differ by more than one.
    /// Use it for predefined splits, for example grouping samples of the same patient.
    pub fn from_assignment(assignment: Vec<usize>, nfolds: usize) -> Result<Self> {
        check_fold_count(nfolds, assignment.len())?;

        let mut folds = vec![Vec::new(); nfolds];
        for (idx, &fold) in assignment.iter().enumerate() {
            if fold >= nfolds {
                return Err(Error::Parameters(format!(
                    "sample {} is assigned to fold {}, but there are only {} folds",
                    idx, fold, nfolds
                )));
            }
            folds[fold].push(idx);
        }

        if let Some(empty) = folds.iter().position(|x| x.is_empty()) {
            return Err(Error::Parameters(format!("fold {} is empty", empty)));
        }

        Ok(FoldAssignment { assignment, folds })
    }

    pub fn nfolds(&self) -> usize {
        self.folds.len()
    }

    pub fn nsamples(&self) -> usize {
        self.assignment.len()
    }

    /// Fold id of every sample, indexed by sample
    pub fn assignment(&self) -> &[usize] {
        &self.assignment
    }

    /// Fold containing sample `idx`
    pub fn fold_of(&self, idx: usize) -> usize {
        self.assignment[idx]
    }

    /// Samples held out in fold `fold`
    pub fn held_out(&self, fold: usize) -> &[usize] {
        &self.folds[fold]
    }

    /// Samples used for training when fold `fold` is held out
    pub fn training(&self, fold: usize) -> Vec<usize> {
        self.assignment
            .iter()
            .enumerate()
            .filter(|(_, &x)| x != fold)
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn fold_sizes(&self) -> Vec<usize> {
        self.folds.iter().map(|x| x.len()).collect()
    }

    /// Iterate over `(training, held_out)` index sets, one pair per fold
    pub fn iter(&self) -> impl Iterator<Item = (Vec<usize>, &[usize])> + '_ {
        (0..self.nfolds()).map(move |fold| (self.training(fold), self.held_out(fold)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn folds_partition_all_samples() {
        let mut rng = SmallRng::seed_from_u64(42);

        for nsamples in 2..40 {
            for nfolds in 2..=nsamples {
                let folds = FoldAssignment::random(nsamples, nfolds, &mut rng).unwrap();
                assert_eq!(folds.nfolds(), nfolds);
                assert_eq!(folds.nsamples(), nsamples);

                let mut seen = vec![0; nsamples];
                for fold in 0..nfolds {
                    for &idx in folds.held_out(fold) {
                        seen[idx] += 1;
                        assert_eq!(folds.fold_of(idx), fold);
                    }
                }
                assert!(seen.iter().all(|&x| x == 1));
            }
        }
    }

    #[test]
    fn fold_sizes_differ_at_most_by_one() {
        let mut rng = SmallRng::seed_from_u64(7);

        for nsamples in 2..60 {
            for nfolds in 2..=nsamples {
                let sizes = FoldAssignment::random(nsamples, nfolds, &mut rng)
                    .unwrap()
                    .fold_sizes();

                let (min, max) = (
                    *sizes.iter().min().unwrap(),
                    *sizes.iter().max().unwrap(),
                );
                assert!(max - min <= 1);
                assert_eq!(sizes.iter().sum::<usize>(), nsamples);

                // larger folds come first
                let remainder = nsamples % nfolds;
                for (fold, size) in sizes.iter().enumerate() {
                    let expected = nsamples / nfolds + usize::from(fold < remainder);
                    assert_eq!(*size, expected);
                }
            }
        }
    }

    #[test]
    fn training_is_complement_of_held_out() {
        let mut rng = SmallRng::seed_from_u64(3);
        let folds = FoldAssignment::random(11, 4, &mut rng).unwrap();

        for (fold, (training, held_out)) in folds.iter().enumerate() {
            assert_eq!(training.len() + held_out.len(), 11);
            assert!(training.iter().all(|x| !held_out.contains(x)));
            assert!(training.iter().all(|&x| folds.fold_of(x) != fold));
            assert!(training.windows(2).all(|x| x[0] < x[1]));
            assert!(held_out.windows(2).all(|x| x[0] < x[1]));
        }
    }

    #[test]
    fn same_seed_same_partition() {
        let first = FoldAssignment::random(25, 5, &mut SmallRng::seed_from_u64(11)).unwrap();
        let second = FoldAssignment::random(25, 5, &mut SmallRng::seed_from_u64(11)).unwrap();
        assert_eq!(first, second);

        let other = FoldAssignment::random(25, 5, &mut SmallRng::seed_from_u64(12)).unwrap();
        assert_ne!(first, other);
    }

    #[test]
    fn leave_one_out() {
        let mut rng = SmallRng::seed_from_u64(1);
        let folds = FoldAssignment::random(6, 6, &mut rng).unwrap();

        assert_eq!(folds.fold_sizes(), vec![1; 6]);
        for fold in 0..6 {
            assert_eq!(folds.training(fold).len(), 5);
        }
    }

    #[test]
    fn rejects_invalid_fold_counts() {
        let mut rng = SmallRng::seed_from_u64(1);

        for &nfolds in &[0, 1, 6] {
            match FoldAssignment::random(5, nfolds, &mut rng) {
                Err(Error::InvalidFoldCount { nfolds: k, nsamples }) => {
                    assert_eq!(k, nfolds);
                    assert_eq!(nsamples, 5);
                }
                other => panic!("unexpected result {:?}", other),
            }
        }
    }

    #[test]
    fn explicit_assignment() {
        let folds = FoldAssignment::from_assignment(vec![1, 0, 1, 2, 0], 3).unwrap();
        assert_eq!(folds.held_out(0), &[1, 4]);
        assert_eq!(folds.held_out(1), &[0, 2]);
        assert_eq!(folds.held_out(2), &[3]);
        assert_eq!(folds.training(2), vec![0, 1, 2, 4]);

        assert!(matches!(
            FoldAssignment::from_assignment(vec![0, 3, 1], 3),
            Err(Error::Parameters(_))
        ));
        assert!(matches!(
            FoldAssignment::from_assignment(vec![0, 0, 1], 3),
            Err(Error::Parameters(_))
        ));
        assert!(matches!(
            FoldAssignment::from_assignment(vec![0, 0], 1),
            Err(Error::InvalidFoldCount { .. })
        ));

        // unbalanced folds are accepted
        let folds = FoldAssignment::from_assignment(vec![0, 0, 0, 0, 1], 2).unwrap();
        assert_eq!(folds.fold_sizes(), vec![4, 1]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_checks_the_partition() {
        let folds = FoldAssignment::from_assignment(vec![0, 0, 1, 1, 1, 0], 2).unwrap();
        let json = serde_json::to_string(&folds).unwrap();
        assert_eq!(json, r#"{"assignment":[0,0,1,1,1,0],"nfolds":2}"#);

        let restored: FoldAssignment = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, folds);
        assert_eq!(restored.held_out(1), &[2, 3, 4]);

        // held-out lists are never taken from the payload
        assert!(serde_json::from_str::<FoldAssignment>(
            r#"{"assignment":[0,0,1,1,1,0],"folds":[[0,1,5],[2,4]]}"#
        )
        .is_err());
        // fold id out of range
        assert!(
            serde_json::from_str::<FoldAssignment>(r#"{"assignment":[0,2,1],"nfolds":2}"#)
                .is_err()
        );
        // empty fold
        assert!(
            serde_json::from_str::<FoldAssignment>(r#"{"assignment":[0,0,0],"nfolds":2}"#)
                .is_err()
        );
    }
}
