//! Display implementation for worklog application messages.
//!
//! All user-facing message text lives in one place so wording stays
//! consistent across commands.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === REPORT MESSAGES ===
            Message::AttendanceReportHeader(date) => format!("Attendance report for {}", date),
            Message::DailyReportHeader(label) => format!("Daily work report for {}", label),
            Message::MonthlyReportHeader(month) => format!("Monthly work report for {}", month),
            Message::TrackingReportHeader(window) => format!("Job tracking report for {}", window),
            Message::NoRecordsInRange => "No records found for the requested period".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigLoadFailed(error) => format!("Failed to load configuration: {}", error),
        };
        write!(f, "{}", text)
    }
}
