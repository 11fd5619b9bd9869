#[derive(Debug, Clone)]
pub enum Message {
    // === REPORT MESSAGES ===
    AttendanceReportHeader(String), // date
    DailyReportHeader(String),      // person / date
    MonthlyReportHeader(String),    // month
    TrackingReportHeader(String),   // window
    NoRecordsInRange,

    // === CONFIGURATION MESSAGES ===
    ConfigLoadFailed(String),
}
