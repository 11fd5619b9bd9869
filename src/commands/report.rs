use crate::libs::{
    config::Config,
    messages::Message,
    report::{daily_report, monthly_report, FormatMonthly, FormatWorkEntries},
    snapshot::{DateRange, Snapshot},
    view::View,
};
use crate::{msg_error, msg_print};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(long, help = "Path to the record snapshot JSON file")]
    input: PathBuf,
    #[arg(long, help = "Inclusive start date (YYYY-MM-DD)")]
    from: Option<NaiveDate>,
    #[arg(long, help = "Inclusive end date (YYYY-MM-DD)")]
    to: Option<NaiveDate>,
    #[arg(long, help = "Person to report on (required for the daily report)")]
    person: Option<i64>,
    #[arg(long, help = "Aggregate as a person × date monthly matrix")]
    monthly: bool,
    #[arg(long, help = "Emit JSON instead of a table")]
    json: bool,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let config = match Config::read() {
        Ok(config) => config,
        Err(e) => {
            msg_error!(Message::ConfigLoadFailed(e.to_string()));
            Config::default()
        }
    };
    let snapshot = Snapshot::read(&args.input)?.filter_range(DateRange::new(args.from, args.to));

    if args.monthly {
        let rows = monthly_report(&snapshot, &config).format();
        if args.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }
        msg_print!(Message::MonthlyReportHeader(Local::now().format("%B, %Y").to_string()), true);
        if rows.is_empty() {
            msg_print!(Message::NoRecordsInRange);
            return Ok(());
        }
        return View::monthly(&rows);
    }

    let person = args.person.context("--person is required for the daily report")?;
    let rows = daily_report(&snapshot, person, &config).format();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    msg_print!(Message::DailyReportHeader(format!("person {}", person)), true);
    if rows.is_empty() {
        msg_print!(Message::NoRecordsInRange);
        return Ok(());
    }
    View::daily(&rows)
}
