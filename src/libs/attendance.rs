//! Attendance arithmetic for a single login/logout session.
//!
//! Every derived duration here is clipped to be non-negative: a negative
//! intermediate value means the condition is absent (not late, not early,
//! no overtime), never an error.

use crate::libs::shift::ShiftDefinition;
use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use std::fmt;

/// Maximum whole days between logout and the nominal shift end before the
/// raw overtime reading is discarded as a data anomaly.
pub const OVERTIME_MAX_DAY_GAP: i64 = 1;

/// Presence status of a session, derived solely from the login field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The computed attendance figures for one session record.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceSummary {
    pub status: AttendanceStatus,
    /// Nominal shift clock-in combined with the session date.
    pub shift_in: NaiveDateTime,
    /// Nominal shift clock-out, rolled to the next day for midnight-spanning
    /// shifts when the login fell on the pre-midnight side of the window.
    pub shift_out: NaiveDateTime,
    pub work_duration: Duration,
    pub late_by: Duration,
    pub early_by: Duration,
    pub overtime: Duration,
    /// Punch summary of the form `"HH:MM:in(TD),HH:MM:out(TD)"`; empty when
    /// the login is missing.
    pub punch_record: String,
}

fn clip(duration: Duration) -> Duration {
    duration.max(Duration::zero())
}

/// Combines the session date with the shift's nominal out time.
///
/// For a midnight-spanning shift the out time belongs to the next calendar
/// day whenever the login minute sits at or past the shift's end minute,
/// i.e. on the pre-midnight side of the window. A login that already landed
/// after midnight keeps the same-day out time.
fn shift_out_datetime(shift: &ShiftDefinition, date: NaiveDate, login: Option<NaiveDateTime>) -> NaiveDateTime {
    let same_day = date.and_time(shift.out_time());
    if !shift.spans_midnight {
        return same_day;
    }
    match login {
        Some(login) => {
            let minute = i64::from(login.time().hour()) * 60 + i64::from(login.time().minute());
            if minute >= shift.end_minute {
                same_day + Duration::days(1)
            } else {
                same_day
            }
        }
        None => same_day,
    }
}

fn punch_record(login: Option<NaiveDateTime>, logout: Option<NaiveDateTime>) -> String {
    match (login, logout) {
        (Some(login), Some(logout)) => {
            format!("{}:in(TD),{}:out(TD)", login.format("%H:%M"), logout.format("%H:%M"))
        }
        (Some(login), None) => format!("{}:in(TD)", login.format("%H:%M")),
        _ => String::new(),
    }
}

/// Computes work duration, lateness, earliness and overtime for a session.
///
/// Overtime reconciles three independently derived estimates and takes the
/// minimum of all three:
///
/// 1. `raw` - logout past the nominal shift end, discarded entirely when the
///    two fall more than [`OVERTIME_MAX_DAY_GAP`] days apart;
/// 2. `beyond_shift` - time worked beyond the shift's nominal length;
/// 3. `work_duration` itself.
///
/// Naive subtraction can overshoot when the logout crosses a day boundary
/// unexpectedly, and the final value must never exceed the time actually
/// worked, hence the extra two bounds.
pub fn calculate_attendance(
    login: Option<NaiveDateTime>,
    logout: Option<NaiveDateTime>,
    shift: &ShiftDefinition,
    date: NaiveDate,
) -> AttendanceSummary {
    let shift_in = date.and_time(shift.in_time());
    let shift_out = shift_out_datetime(shift, date, login);

    let status = match login {
        Some(_) => AttendanceStatus::Present,
        None => AttendanceStatus::Absent,
    };

    let work_duration = match (login, logout) {
        (Some(login), Some(logout)) => clip(logout - login),
        _ => Duration::zero(),
    };

    let late_by = match login {
        Some(login) => clip(login - shift_in),
        None => Duration::zero(),
    };

    let early_by = match logout {
        Some(logout) => clip(shift_out - logout),
        None => Duration::zero(),
    };

    let overtime = match logout {
        Some(logout) => {
            let day_gap = (logout.date() - shift_out.date()).num_days().abs();
            let raw = if day_gap <= OVERTIME_MAX_DAY_GAP {
                clip(logout - shift_out)
            } else {
                // Logout and shift end too far apart: anomalous record.
                Duration::zero()
            };
            let beyond_shift = clip(work_duration - shift.nominal_duration());
            raw.min(beyond_shift).min(work_duration)
        }
        None => Duration::zero(),
    };

    AttendanceSummary {
        status,
        shift_in,
        shift_out,
        work_duration,
        late_by,
        early_by,
        overtime,
        punch_record: punch_record(login, logout),
    }
}
