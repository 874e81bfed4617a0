//! # trafficsense
//!
//! Analytics over periodic traffic sensor measurements (counts at road
//! intersections, sampled every 15 minutes).
//!
//! Two analytical primitives, with the structures around them:
//!
//! - **Peer-relative outlier scoring**: per-entity frequency point
//!   distributions, Bhattacharyya distance matrices (discrete and
//!   Gaussian-parametric), k-nearest-neighbor selection and Local Outlier
//!   Factor scores.
//! - **Cyclic week-window mapping**: translating arbitrary calendar ranges
//!   into row indices against a full measurement log or a canonical
//!   672-row week pattern, tiled and offset over multi-week spans.
//!
//! Everything is a pure, synchronous computation over immutable in-memory
//! tables; loading, HTTP and rendering belong to callers.

#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod distance;
pub mod distribution;
pub mod error;
pub mod outlier;
pub mod profile;
pub mod summary;
pub mod timeframe;

pub use error::{Result, TrafficError};

pub mod prelude {
    pub use crate::core::{
        CalendarAxis, Dataset, Event, EventTable, MeasurementTable, SAMPLES_PER_WEEK,
    };
    pub use crate::distance::{distance_matrix, DistanceKind, DistanceMatrix};
    pub use crate::error::{Result, TrafficError};
    pub use crate::outlier::{fpd_lof, k_nearest, lof_scores};
    pub use crate::timeframe::Timeframe;
}
