use crate::libs::{
    messages::Message,
    report::{tracking_report, FormatTracking},
    snapshot::{DateRange, Snapshot},
    view::View,
};
use crate::msg_print;
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct TrackingArgs {
    #[arg(long, help = "Path to the record snapshot JSON file")]
    input: PathBuf,
    #[arg(long, help = "Inclusive start date (YYYY-MM-DD)")]
    from: Option<NaiveDate>,
    #[arg(long, help = "Inclusive end date (YYYY-MM-DD)")]
    to: Option<NaiveDate>,
    #[arg(long, help = "Emit JSON instead of a table")]
    json: bool,
}

pub fn cmd(args: TrackingArgs) -> Result<()> {
    let snapshot = Snapshot::read(&args.input)?.filter_range(DateRange::new(args.from, args.to));

    let rows = tracking_report(&snapshot).format();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let window = match (args.from, args.to) {
        (Some(from), Some(to)) => format!("{} to {}", from, to),
        (Some(from), None) => format!("{} onwards", from),
        (None, Some(to)) => format!("up to {}", to),
        (None, None) => "all records".to_string(),
    };
    msg_print!(Message::TrackingReportHeader(window), true);
    if rows.is_empty() {
        msg_print!(Message::NoRecordsInRange);
        return Ok(());
    }
    View::tracking(&rows)
}
