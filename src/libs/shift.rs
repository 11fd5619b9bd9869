//! Shift catalog and shift resolution.
//!
//! The catalog is a fixed table of named shift definitions expressed in
//! minutes since midnight. Resolution maps a login timestamp (and an
//! optional explicit assignment with an effective date window) onto one of
//! those definitions. The resolver is a pure function: identical inputs
//! always yield identical output, and no I/O happens here.
//!
//! ## Midnight-spanning shifts
//!
//! A shift whose end minute is numerically smaller than its start minute
//! (e.g. Night 22:00-06:00) wraps around midnight. Such shifts match a
//! login minute when it falls on either side of the wrap, and they take
//! precedence over plain shifts whose window happens to contain the same
//! minute. When the login lands near a spanning shift, the spanning shift
//! whose start minute is circularly closest wins, so a 21:45 login still
//! resolves to the Night shift even though the window proper opens at
//! 22:00.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Minutes in one calendar day, used for circular distance arithmetic.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// A single named shift window expressed in minutes since midnight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftDefinition {
    pub name: &'static str,
    pub start_minute: i64,
    pub end_minute: i64,
    pub spans_midnight: bool,
}

/// The static shift catalog.
///
/// Invariant: non-spanning entries have `start_minute < end_minute`.
pub const SHIFT_CATALOG: &[ShiftDefinition] = &[
    ShiftDefinition {
        name: "Morning",
        start_minute: 6 * 60,
        end_minute: 14 * 60,
        spans_midnight: false,
    },
    ShiftDefinition {
        name: "General",
        start_minute: 10 * 60,
        end_minute: 19 * 60,
        spans_midnight: false,
    },
    ShiftDefinition {
        name: "Evening",
        start_minute: 18 * 60,
        end_minute: 2 * 60,
        spans_midnight: true,
    },
    ShiftDefinition {
        name: "Night",
        start_minute: 22 * 60,
        end_minute: 6 * 60,
        spans_midnight: true,
    },
];

/// Name of the shift used when nothing else applies.
pub const DEFAULT_SHIFT_NAME: &str = "General";

impl ShiftDefinition {
    /// Nominal clock-in time of the shift.
    pub fn in_time(&self) -> NaiveTime {
        minute_to_time(self.start_minute)
    }

    /// Nominal clock-out time of the shift.
    pub fn out_time(&self) -> NaiveTime {
        minute_to_time(self.end_minute)
    }

    /// Whether the window contains the given minute of day.
    pub fn contains(&self, minute: i64) -> bool {
        if self.spans_midnight {
            minute >= self.start_minute || minute < self.end_minute
        } else {
            minute >= self.start_minute && minute < self.end_minute
        }
    }

    /// Nominal length of the shift.
    ///
    /// For midnight-spanning shifts this is the pre-midnight remainder plus
    /// the post-midnight tail.
    pub fn nominal_duration(&self) -> Duration {
        let minutes = if self.spans_midnight {
            (MINUTES_PER_DAY - self.start_minute) + self.end_minute
        } else {
            self.end_minute - self.start_minute
        };
        Duration::minutes(minutes)
    }

    /// Circular distance from the shift's start minute to a login minute,
    /// measured both forward and via the day wraparound, taking the smaller.
    fn start_distance(&self, minute: i64) -> i64 {
        let direct = (minute - self.start_minute).abs();
        direct.min(MINUTES_PER_DAY - direct)
    }
}

fn minute_to_time(minute: i64) -> NaiveTime {
    NaiveTime::from_hms_opt((minute / 60) as u32, (minute % 60) as u32, 0).unwrap_or(NaiveTime::MIN)
}

/// Looks up a shift definition by name, case-insensitively.
pub fn find_shift(name: &str) -> Option<&'static ShiftDefinition> {
    SHIFT_CATALOG.iter().find(|shift| shift.name.eq_ignore_ascii_case(name.trim()))
}

fn default_shift() -> &'static ShiftDefinition {
    find_shift(DEFAULT_SHIFT_NAME).unwrap_or(&SHIFT_CATALOG[0])
}

/// An administratively assigned shift, active within an inclusive date window.
///
/// Lifecycle is owned by administrative edit actions; the engine only reads
/// these records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftAssignment {
    pub person_id: i64,
    pub shift_name: String,
    pub effective_start_date: NaiveDate,
    pub effective_end_date: NaiveDate,
}

impl ShiftAssignment {
    /// Whether the assignment is active on the given date (inclusive window).
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.effective_start_date <= date && date <= self.effective_end_date
    }
}

/// Resolves the applicable shift for a login.
///
/// Order of precedence:
/// 1. An assignment active on `today` naming a known shift wins verbatim.
///    An assignment naming an unknown shift is treated as absent.
/// 2. A missing login time resolves to the default shift.
/// 3. Otherwise the login minute is matched against the catalog windows.
///    When any midnight-spanning shift matches, the spanning shift with the
///    smallest circular distance from its start minute is chosen; otherwise
///    the matching plain shift with the numerically closest start minute.
/// 4. No match at all falls back to the default shift.
pub fn resolve_shift(
    login_time: Option<NaiveDateTime>,
    assignment: Option<&ShiftAssignment>,
    today: NaiveDate,
) -> &'static ShiftDefinition {
    if let Some(assignment) = assignment {
        if assignment.is_active_on(today) {
            if let Some(shift) = find_shift(&assignment.shift_name) {
                return shift;
            }
        }
    }

    let login = match login_time {
        Some(login) => login,
        None => return default_shift(),
    };
    let minute = i64::from(login.time().hour()) * 60 + i64::from(login.time().minute());

    let matching: Vec<&ShiftDefinition> = SHIFT_CATALOG.iter().filter(|shift| shift.contains(minute)).collect();

    if matching.iter().any(|shift| shift.spans_midnight) {
        // A spanning window is open, so the login belongs to the night side
        // of the day. Pick the spanning shift circularly closest to it.
        return SHIFT_CATALOG
            .iter()
            .filter(|shift| shift.spans_midnight)
            .min_by_key(|shift| shift.start_distance(minute))
            .unwrap_or_else(default_shift);
    }

    matching
        .into_iter()
        .min_by_key(|shift| (shift.start_minute - minute).abs())
        .unwrap_or_else(default_shift)
}
