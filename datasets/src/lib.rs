//! `linfa-crossval-datasets` provides the data sources for cross-validation experiments.
//!
//! ## The Big Picture
//!
//! `linfa-crossval-datasets` is a companion crate of
//! [`linfa-crossval`](https://crates.io/crates/linfa-crossval). It produces labelled
//! [`Dataset`](linfa_crossval::Dataset)s which can be handed straight to the cross-validator.
//!
//! ## Current State
//!
//! * [`generate`]: isotropic Gaussian classes, including the two-class 2D scenario commonly used
//!   to illustrate linear and kernel SVMs
//! * [`expression`]: loaders for gene-expression tables stored as (optionally gzipped) CSV, with
//!   one column holding the class of every sample
//!
//! ## Using a dataset
//!
//! ```
//! use linfa_crossval_datasets::generate;
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let dataset = generate::two_gaussians(50, 4.0, 1.0, &mut rng).unwrap();
//! assert_eq!(dataset.nsamples(), 100);
//! ```

pub mod error;
pub mod expression;
pub mod generate;

pub use error::{DatasetError, Result};
