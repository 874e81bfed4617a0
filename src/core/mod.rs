//! Core data structures for traffic measurement analytics.

mod calendar;
mod dataset;
mod events;
mod table;

pub use calendar::CalendarAxis;
pub use dataset::Dataset;
pub use events::{Event, EventTable};
pub use table::{MeasurementTable, SAMPLES_PER_WEEK, SAMPLE_MINUTES};
