//! Input snapshot: the already-fetched record collections the engine
//! consumes.
//!
//! Persistent storage and querying are external collaborators; a report
//! request hands the engine a time-bounded snapshot of session records,
//! action events, person profiles and job metadata, materialized before
//! computation begins. Here that snapshot is a JSON document. A snapshot
//! that fails to load is a terminal failure for the request; no partial
//! report is ever produced from one.

use crate::libs::event::ActionEvent;
use crate::libs::shift::ShiftAssignment;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Errors raised while materializing a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse snapshot file {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One person's profile, including an optional explicit shift assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonProfile {
    pub person_id: i64,
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub assignment: Option<ShiftAssignment>,
}

/// One attendance day for one person; login and logout may be
/// independently absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: i64,
    pub person_id: i64,
    #[serde(default)]
    pub login_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub logout_time: Option<NaiveDateTime>,
    pub session_date: NaiveDate,
}

/// Job metadata, including the purchase-order hour allotment used as a
/// proxy for billable hours in monthly aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub job_id: i64,
    pub name: String,
    #[serde(default)]
    pub po_hours: f64,
}

/// An inclusive date-range filter; the end bound extends to end-of-day.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }

    pub fn contains_datetime(&self, timestamp: NaiveDateTime) -> bool {
        let after_start = self.from.map_or(true, |from| timestamp >= from.and_time(NaiveTime::MIN));
        let before_end = self.to.map_or(true, |to| timestamp <= to.and_hms_opt(23, 59, 59).unwrap_or_else(|| to.and_time(NaiveTime::MIN)));
        after_start && before_end
    }
}

/// The full record snapshot a report request runs over.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub profiles: Vec<PersonProfile>,
    #[serde(default)]
    pub sessions: Vec<SessionRecord>,
    #[serde(default)]
    pub events: Vec<ActionEvent>,
    #[serde(default)]
    pub jobs: Vec<JobRecord>,
}

impl Snapshot {
    /// Loads a snapshot from a JSON file.
    pub fn read(path: &Path) -> Result<Self, SnapshotError> {
        let display = path.display().to_string();
        let file = File::open(path).map_err(|source| SnapshotError::Io {
            path: display.clone(),
            source,
        })?;
        serde_json::from_reader(file).map_err(|source| SnapshotError::Parse { path: display, source })
    }

    /// Retains only the sessions and events inside the date range.
    ///
    /// Sessions filter on their session date, events on their effective
    /// timestamp. Profiles and jobs are reference data and pass through.
    pub fn filter_range(mut self, range: DateRange) -> Self {
        self.sessions.retain(|session| range.contains_date(session.session_date));
        self.events.retain(|event| range.contains_datetime(event.effective_time()));
        self
    }
}
