//! Cyclic window mapping between calendar ranges and table rows.
//!
//! A [`Timeframe`] translates a half-open `[starttime, endtime)` calendar
//! range into row indices against both a full measurement log and a
//! canonical one-week reference table. The week table is tiled and offset
//! so a single representative week can stand in for arbitrarily long
//! multi-week queries.

use crate::core::{CalendarAxis, EventTable, MeasurementTable, SAMPLES_PER_WEEK, SAMPLE_MINUTES};
use crate::error::{Result, TrafficError};
use chrono::{DateTime, NaiveDateTime, Utc};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An immutable view of one calendar query range against a calendar axis.
///
/// Constructed fresh per query and discarded afterwards; it holds no state
/// across requests. Equal or inverted bounds produce an empty covered range
/// rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeframe {
    starttime: DateTime<Utc>,
    endtime: DateTime<Utc>,
    mask: Vec<bool>,
    covered: Vec<DateTime<Utc>>,
    first_idx: usize,
    week_offset: usize,
    weeks_spanned: usize,
}

impl Timeframe {
    /// Build the window over `starttime <= t < endtime` against the axis.
    pub fn new(axis: &CalendarAxis, starttime: DateTime<Utc>, endtime: DateTime<Utc>) -> Self {
        let mask: Vec<bool> = axis
            .timestamps()
            .iter()
            .map(|&t| starttime <= t && t < endtime)
            .collect();
        let covered: Vec<DateTime<Utc>> = axis
            .timestamps()
            .iter()
            .zip(&mask)
            .filter(|(_, &inside)| inside)
            .map(|(&t, _)| t)
            .collect();
        let first_idx = mask.iter().position(|&inside| inside).unwrap_or(0);
        let weeks_spanned = (first_idx + covered.len()).div_ceil(SAMPLES_PER_WEEK);

        Self {
            starttime,
            endtime,
            mask,
            first_idx,
            week_offset: first_idx % SAMPLES_PER_WEEK,
            weeks_spanned,
            covered,
        }
    }

    /// Parse the bounds from `"%Y-%m-%d %H:%M:%S"` strings and build the
    /// window.
    ///
    /// Malformed timestamps surface as [`TrafficError::TimestampError`];
    /// they never panic past this boundary.
    pub fn parse(axis: &CalendarAxis, starttime: &str, endtime: &str) -> Result<Self> {
        Ok(Self::new(
            axis,
            parse_timestamp(starttime)?,
            parse_timestamp(endtime)?,
        ))
    }

    /// Get the inclusive start bound.
    pub fn starttime(&self) -> DateTime<Utc> {
        self.starttime
    }

    /// Get the exclusive end bound.
    pub fn endtime(&self) -> DateTime<Utc> {
        self.endtime
    }

    /// Get the per-row membership mask against the axis.
    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    /// Get the number of covered rows.
    pub fn covered_count(&self) -> usize {
        self.covered.len()
    }

    /// Check whether the window covers no rows.
    pub fn is_empty(&self) -> bool {
        self.covered.is_empty()
    }

    /// Get the absolute index of the first covered row (0 when empty).
    pub fn first_idx(&self) -> usize {
        self.first_idx
    }

    /// Get the first covered row's position inside the canonical week.
    pub fn week_offset(&self) -> usize {
        self.week_offset
    }

    /// Get the number of week cycles the window reaches into.
    pub fn weeks_spanned(&self) -> usize {
        self.weeks_spanned
    }

    /// Get the covered timestamps rendered as `"%Y-%m-%d %H:%M:%S"`.
    pub fn get_dates(&self) -> Vec<String> {
        self.covered
            .iter()
            .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
            .collect()
    }

    /// Restrict a table to this window.
    ///
    /// A table with exactly [`SAMPLES_PER_WEEK`] rows is a canonical week:
    /// it is tiled [`weeks_spanned`](Self::weeks_spanned) times and sliced
    /// at `[week_offset, week_offset + covered_count)`, wrapping row
    /// indices modulo the week length. A table with one row per axis
    /// timestamp is sliced by the membership mask directly. Any other row
    /// count is a dimension mismatch.
    pub fn trim(&self, table: &MeasurementTable) -> Result<MeasurementTable> {
        if table.n_rows() == SAMPLES_PER_WEEK {
            let indices: Vec<usize> = (self.week_offset..self.week_offset + self.covered.len())
                .map(|i| i % SAMPLES_PER_WEEK)
                .collect();
            table.take_rows(&indices)
        } else if table.n_rows() == self.mask.len() {
            table.select_rows(&self.mask)
        } else {
            Err(TrafficError::DimensionMismatch {
                expected: self.mask.len(),
                got: table.n_rows(),
            })
        }
    }

    /// Map timestamps to 15-minute offsets from the window start, clamped
    /// to `[0, covered_count]`.
    ///
    /// Events overlapping the window never produce negative or
    /// out-of-range offsets: a start before the window clamps to 0, an end
    /// after it clamps to the covered count.
    pub fn datetimes_to_idxs(&self, datetimes: &[DateTime<Utc>]) -> Vec<usize> {
        let limit = self.covered.len() as i64;
        datetimes
            .iter()
            .map(|&t| {
                let offset = (t - self.starttime)
                    .num_seconds()
                    .div_euclid(SAMPLE_MINUTES * 60);
                offset.clamp(0, limit) as usize
            })
            .collect()
    }

    /// Keep the events that start or end inside the window.
    pub fn in_timeframe(&self, events: &EventTable) -> EventTable {
        let kept = events
            .iter()
            .filter(|e| self.contains(e.starttime) || self.contains(e.endtime))
            .cloned()
            .collect();
        EventTable::new(kept)
    }

    fn contains(&self, t: DateTime<Utc>) -> bool {
        self.starttime <= t && t < self.endtime
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| TrafficError::TimestampError(format!("{value:?}: {e}")))
}
