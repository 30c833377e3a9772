//! linfa-crossval prelude.
//!
//! This module contains the most used types, type aliases, traits and
//! functions that you can import easily as a group.
//!

#[doc(no_inline)]
pub use crate::error::{Error, Result};

#[doc(no_inline)]
pub use crate::traits::*;

#[doc(no_inline)]
pub use crate::dataset::{Dataset, Float, Label, Labels};

#[doc(no_inline)]
pub use crate::folds::FoldAssignment;

#[doc(no_inline)]
pub use crate::cross_validation::{cross_validate, CrossValidator, OutOfFold};

#[doc(no_inline)]
pub use crate::baseline::NearestCentroid;

#[doc(no_inline)]
pub use crate::param_guard::ParamGuard;
