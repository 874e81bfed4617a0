//! Disturbance events affecting the measured network.

use chrono::{DateTime, Utc};

/// One disturbance: a time span at a location, tagged with a kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub starttime: DateTime<Utc>,
    pub endtime: DateTime<Utc>,
    pub location: String,
    pub kind: String,
}

/// An ordered, read-only table of disturbance events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventTable {
    events: Vec<Event>,
}

impl EventTable {
    /// Create an event table.
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Get the number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get the events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Iterate over the events.
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Get every event's start timestamp, in table order.
    pub fn starttimes(&self) -> Vec<DateTime<Utc>> {
        self.events.iter().map(|e| e.starttime).collect()
    }

    /// Get every event's end timestamp, in table order.
    pub fn endtimes(&self) -> Vec<DateTime<Utc>> {
        self.events.iter().map(|e| e.endtime).collect()
    }
}
