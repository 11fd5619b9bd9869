//! # Worklog - Time Accounting Engine
//!
//! A command-line utility that turns a sparse, append-only log of work
//! events (task start/pause/resume/complete/upload actions and login/logout
//! session records) into attendance records, per-person work reports, and
//! aggregated job-tracking reports.
//!
//! ## Features
//!
//! - **Shift Inference**: Resolves the applicable shift from a login time,
//!   with midnight-spanning rules and explicit assignment overrides
//! - **Attendance Arithmetic**: Lateness, earliness and double-clamped
//!   overtime, each expressed as a clipped, non-negative duration
//! - **Interval Reconstruction**: Rebuilds contiguous work intervals from
//!   discrete timestamped events
//! - **Interval Merging**: Coalesces rapid consecutive log entries with a
//!   tolerance-based merge
//! - **Report Assembly**: Attendance, daily/monthly per-user and
//!   job-tracking reports with stable ordering and serial numbering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worklog::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
