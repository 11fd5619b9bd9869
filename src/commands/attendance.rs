use crate::libs::{
    messages::Message,
    report::{attendance_report, FormatAttendance},
    snapshot::{DateRange, Snapshot},
    view::View,
};
use crate::msg_print;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct AttendanceArgs {
    #[arg(long, help = "Path to the record snapshot JSON file")]
    input: PathBuf,
    #[arg(long, help = "Inclusive start date (YYYY-MM-DD)")]
    from: Option<NaiveDate>,
    #[arg(long, help = "Inclusive end date (YYYY-MM-DD)")]
    to: Option<NaiveDate>,
    #[arg(long, help = "Emit JSON instead of a table")]
    json: bool,
}

pub fn cmd(args: AttendanceArgs) -> Result<()> {
    let snapshot = Snapshot::read(&args.input)?.filter_range(DateRange::new(args.from, args.to));
    tracing::debug!(sessions = snapshot.sessions.len(), events = snapshot.events.len(), "snapshot loaded");

    let rows = attendance_report(&snapshot, Local::now().date_naive()).format();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    msg_print!(Message::AttendanceReportHeader(Local::now().format("%B %-d, %Y").to_string()), true);
    if rows.is_empty() {
        msg_print!(Message::NoRecordsInRange);
        return Ok(());
    }
    View::attendance(&rows)
}
