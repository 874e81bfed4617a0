//! Read-only holder of the loaded measurement data.

use crate::core::{CalendarAxis, EventTable, MeasurementTable, SAMPLES_PER_WEEK};
use crate::error::{Result, TrafficError};
use crate::profile::{weekly_profile, WeeklyProfile};

/// The full measurement log with its calendar axis, disturbance events and
/// derived weekly profiles.
///
/// Constructed once by the loading collaborator and passed by reference into
/// the analytical functions; holds no mutable state and no globals. The
/// inputs are cut to whole weeks at construction (leading remainder rows
/// dropped from both the table and the axis), which keeps week offsets
/// computed against the axis aligned with the tiled profile tables.
#[derive(Debug, Clone)]
pub struct Dataset {
    full: MeasurementTable,
    calendar: CalendarAxis,
    events: EventTable,
    profile: WeeklyProfile,
}

impl Dataset {
    /// Assemble a dataset from a full log, its calendar axis and the event
    /// table.
    ///
    /// The axis must have exactly one timestamp per table row, and the log
    /// must cover at least one whole week after the leading remainder is
    /// dropped.
    pub fn new(
        full: MeasurementTable,
        calendar: CalendarAxis,
        events: EventTable,
    ) -> Result<Self> {
        if calendar.len() != full.n_rows() {
            return Err(TrafficError::DimensionMismatch {
                expected: full.n_rows(),
                got: calendar.len(),
            });
        }
        let cutoff = full.n_rows() % SAMPLES_PER_WEEK;
        let full = full.skip_rows(cutoff);
        let calendar = calendar.skip(cutoff);
        let profile = weekly_profile(&full)?;
        Ok(Self {
            full,
            calendar,
            events,
            profile,
        })
    }

    /// Get the whole-week full log.
    pub fn full(&self) -> &MeasurementTable {
        &self.full
    }

    /// Get the calendar axis aligned with [`full`](Self::full).
    pub fn calendar(&self) -> &CalendarAxis {
        &self.calendar
    }

    /// Get the disturbance events.
    pub fn events(&self) -> &EventTable {
        &self.events
    }

    /// Get the per-slot weekly mean table (672 rows).
    pub fn mean_week(&self) -> &MeasurementTable {
        self.profile.mean()
    }

    /// Get the per-slot weekly standard deviation table (672 rows).
    pub fn std_week(&self) -> &MeasurementTable {
        self.profile.std()
    }
}
