//! Distribution estimation over measurement series.
//!
//! Turns a raw value series into either a frequency point distribution (an
//! empirical probability mass function over observed count values) or an
//! equal-width binned histogram with its Gaussian summary. Both feed the
//! pairwise distances in [`crate::distance`].

mod fpd;
mod histogram;

pub use fpd::FrequencyPointDistribution;
pub use histogram::{GaussianSummary, Histogram};
