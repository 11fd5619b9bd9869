pub mod attendance;
pub mod report;
pub mod tracking;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Prepare the attendance report")]
    Attendance(attendance::AttendanceArgs),
    #[command(about = "Prepare a daily or monthly work report")]
    Report(report::ReportArgs),
    #[command(about = "Prepare the job tracking report")]
    Tracking(tracking::TrackingArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Attendance(args) => attendance::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Tracking(args) => tracking::cmd(args),
        }
    }
}
