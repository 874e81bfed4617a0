//! Peer-relative outlier scoring.
//!
//! Builds a k-nearest-neighbor view over a pairwise distance matrix and
//! derives Local Outlier Factor scores from it. The end-to-end entry point
//! is [`fpd_lof`], which scores a measurement table's entities by the
//! Bhattacharyya distances of their frequency point distributions.

mod knn;
mod lof;

pub use knn::{k_nearest, KNearestTable};
pub use lof::{fpd_lof, lof_scores};
