//! K-fold cross-validation
//!
//! The cross-validator partitions a labelled dataset into `k` folds of nearly equal size and
//! produces an out-of-fold decision value for every sample. Each fold is held out once while a
//! model is fitted on the other `k - 1` folds, then the held-out samples are scored with it. The
//! resulting score array can be handed to ROC or precision-recall analysis without leaking
//! training samples into the evaluation.
//!
//! The random permutation behind the fold assignment is the only source of randomness. It is
//! drawn once, before any fold is processed, so sequential and parallel runs with the same seed
//! agree.
//!
//! Use the free functions for full control over the random source or the partition, or
//! [`CrossValidator::params`] for a seeded, configurable runner.
mod algorithm;
mod hyperparams;

pub use algorithm::{
    cross_validate, cross_validate_par, cross_validate_with_folds, cross_validate_with_folds_par,
};
pub use hyperparams::{CrossValidator, CrossValidatorParams, CrossValidatorValidParams, OutOfFold};
