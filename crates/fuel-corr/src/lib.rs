//! Empirical correlations for uranium nitride fuel performance.
//!
//! Each correlation is a variant of [`Correlation`] and exposes the same
//! `evaluate` capability, so propagation code is written once against it.

mod correlation;
pub mod forms;

pub use correlation::{Correlation, Response};
pub use forms::{rogozkin_fgr, ross_swelling, storms_fgr, KELVIN_OFFSET};
