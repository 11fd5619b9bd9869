//! Report assembly: ordering, numbering and shaping the final collections.
//!
//! Every variant reuses the same building blocks: events are grouped and
//! sorted, intervals reconstructed and merged, and the resulting rows get a
//! final stable `(date, start time)` sort with 1-based serial numbers
//! assigned by position. The variants differ only in projection fields and
//! grouping granularity: the monthly per-user report aggregates by calendar
//! day instead of by job.
//!
//! Missing parent data never drops a row. An event whose job has no
//! matching metadata is still emitted with placeholder fields.

use crate::libs::attendance::{calculate_attendance, AttendanceSummary};
use crate::libs::config::Config;
use crate::libs::event::{ActionEvent, GroupEvents};
use crate::libs::formatter::{format_date, format_duration, format_duration_secs, format_time, or_placeholder, PLACEHOLDER, UNKNOWN};
use crate::libs::interval::{reconstruct_intervals, MergeIntervals, WorkInterval};
use crate::libs::shift::{resolve_shift, ShiftDefinition};
use crate::libs::snapshot::{JobRecord, PersonProfile, Snapshot};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

/// Final ordering and numbering shared by all report variants.
///
/// The sort is stable, so rows with identical keys keep their original
/// encounter order; serials are a contiguous 1..N sequence matching the
/// final order.
pub trait Assemble {
    fn sort_key(&self) -> (NaiveDate, NaiveDateTime);
    fn set_serial(&mut self, serial: usize);
}

/// Sorts rows by `(date, start time)` and assigns 1-based serial numbers.
pub fn assemble<T: Assemble>(mut rows: Vec<T>) -> Vec<T> {
    rows.sort_by_key(Assemble::sort_key);
    for (index, row) in rows.iter_mut().enumerate() {
        row.set_serial(index + 1);
    }
    rows
}

// ---------------------------------------------------------------------------
// Attendance report
// ---------------------------------------------------------------------------

/// One attendance row: a session record joined with its person profile and
/// the computed attendance figures.
#[derive(Debug, Clone)]
pub struct AttendanceEntry {
    pub serial: usize,
    pub person_id: i64,
    pub person_name: String,
    pub department: String,
    pub role: String,
    pub date: NaiveDate,
    pub login: Option<NaiveDateTime>,
    pub logout: Option<NaiveDateTime>,
    pub shift: &'static ShiftDefinition,
    pub summary: AttendanceSummary,
}

impl Assemble for AttendanceEntry {
    fn sort_key(&self) -> (NaiveDate, NaiveDateTime) {
        (self.date, self.login.unwrap_or_else(|| self.date.and_time(NaiveTime::MIN)))
    }

    fn set_serial(&mut self, serial: usize) {
        self.serial = serial;
    }
}

/// Builds the attendance report: one row per session record.
///
/// A session whose person has no profile is still emitted with placeholder
/// person fields. `today` anchors the assignment activity check.
pub fn attendance_report(snapshot: &Snapshot, today: NaiveDate) -> Vec<AttendanceEntry> {
    let profiles: HashMap<i64, &PersonProfile> = snapshot.profiles.iter().map(|profile| (profile.person_id, profile)).collect();

    let entries = snapshot
        .sessions
        .iter()
        .map(|session| {
            let profile = profiles.get(&session.person_id);
            let assignment = profile.and_then(|profile| profile.assignment.as_ref());
            let shift = resolve_shift(session.login_time, assignment, today);
            let summary = calculate_attendance(session.login_time, session.logout_time, shift, session.session_date);

            AttendanceEntry {
                serial: 0,
                person_id: session.person_id,
                person_name: profile.map_or_else(|| UNKNOWN.to_string(), |profile| profile.name.clone()),
                department: or_placeholder(profile.and_then(|profile| profile.department.as_deref()), PLACEHOLDER),
                role: or_placeholder(profile.and_then(|profile| profile.role.as_deref()), PLACEHOLDER),
                date: session.session_date,
                login: session.login_time,
                logout: session.logout_time,
                shift,
                summary,
            }
        })
        .collect();

    assemble(entries)
}

/// Display-ready attendance row with every field pre-formatted.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceRow {
    pub serial: usize,
    pub department: String,
    pub person_id: i64,
    pub person_name: String,
    pub role: String,
    pub date: String,
    pub in_time: String,
    pub out_time: String,
    pub shift_name: String,
    pub shift_in: String,
    pub shift_out: String,
    pub work_duration: String,
    pub overtime: String,
    pub total_duration: String,
    pub late_by: String,
    pub early_by: String,
    pub status: String,
    pub punch_record: String,
}

/// Formats assembled attendance entries for display and export.
pub trait FormatAttendance {
    fn format(&self) -> Vec<AttendanceRow>;
}

impl FormatAttendance for Vec<AttendanceEntry> {
    fn format(&self) -> Vec<AttendanceRow> {
        self.iter()
            .map(|entry| AttendanceRow {
                serial: entry.serial,
                department: entry.department.clone(),
                person_id: entry.person_id,
                person_name: entry.person_name.clone(),
                role: entry.role.clone(),
                date: format_date(entry.date),
                in_time: format_time(entry.login),
                out_time: format_time(entry.logout),
                shift_name: entry.shift.name.to_string(),
                shift_in: entry.shift.in_time().format("%H:%M").to_string(),
                shift_out: entry.shift.out_time().format("%H:%M").to_string(),
                work_duration: format_duration(&entry.summary.work_duration),
                overtime: format_duration(&entry.summary.overtime),
                total_duration: format_duration(&entry.summary.work_duration),
                late_by: format_duration(&entry.summary.late_by),
                early_by: format_duration(&entry.summary.early_by),
                status: entry.summary.status.to_string(),
                punch_record: entry.summary.punch_record.clone(),
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Daily per-user report
// ---------------------------------------------------------------------------

/// One chronological work entry for the daily per-user report.
#[derive(Debug, Clone)]
pub struct WorkEntry {
    pub serial: usize,
    pub job_id: i64,
    pub job_name: String,
    pub date: NaiveDate,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub stage: String,
    pub performer: String,
    pub page_count: u32,
}

impl WorkEntry {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

impl Assemble for WorkEntry {
    fn sort_key(&self) -> (NaiveDate, NaiveDateTime) {
        (self.date, self.start)
    }

    fn set_serial(&mut self, serial: usize) {
        self.serial = serial;
    }
}

fn job_index(jobs: &[JobRecord]) -> HashMap<i64, &JobRecord> {
    jobs.iter().map(|job| (job.job_id, job)).collect()
}

/// Merged work intervals for a single person's events.
fn person_intervals(snapshot: &Snapshot, person_id: i64, config: &Config) -> Vec<WorkInterval> {
    let events: Vec<ActionEvent> = snapshot.events.iter().filter(|event| event.person_id == person_id).cloned().collect();
    reconstruct_intervals(&events, config.trailing_interval()).merge(config.merge_tolerance())
}

/// Builds the daily report: a flat chronological list of one person's
/// merged work intervals, joined with job metadata.
pub fn daily_report(snapshot: &Snapshot, person_id: i64, config: &Config) -> Vec<WorkEntry> {
    let jobs = job_index(&snapshot.jobs);

    let entries = person_intervals(snapshot, person_id, config)
        .into_iter()
        .map(|interval| WorkEntry {
            serial: 0,
            job_id: interval.job_id,
            job_name: jobs.get(&interval.job_id).map_or_else(|| UNKNOWN.to_string(), |job| job.name.clone()),
            date: interval.date,
            start: interval.start,
            end: interval.end,
            stage: interval.stage,
            performer: interval.performer,
            page_count: interval.page_count,
        })
        .collect();

    assemble(entries)
}

/// Display-ready daily work entry.
#[derive(Debug, Clone, Serialize)]
pub struct WorkEntryRow {
    pub serial: usize,
    pub job_id: i64,
    pub job_name: String,
    pub date: String,
    pub start: String,
    pub end: String,
    pub duration: String,
    pub stage: String,
    pub performer: String,
    pub page_count: u32,
}

pub trait FormatWorkEntries {
    fn format(&self) -> Vec<WorkEntryRow>;
}

impl FormatWorkEntries for Vec<WorkEntry> {
    fn format(&self) -> Vec<WorkEntryRow> {
        self.iter()
            .map(|entry| WorkEntryRow {
                serial: entry.serial,
                job_id: entry.job_id,
                job_name: entry.job_name.clone(),
                date: format_date(entry.date),
                start: entry.start.format("%H:%M").to_string(),
                end: entry.end.format("%H:%M").to_string(),
                duration: format_duration(&entry.duration()),
                stage: entry.stage.clone(),
                performer: entry.performer.clone(),
                page_count: entry.page_count,
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Monthly per-user report
// ---------------------------------------------------------------------------

/// One person x date cell of the monthly matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MonthlyCell {
    pub pages: u32,
    pub hours: f64,
}

/// One row of the monthly matrix: a person with per-day cells and totals.
#[derive(Debug, Clone)]
pub struct MonthlyRow {
    pub serial: usize,
    pub person_id: i64,
    pub person_name: String,
    pub cells: BTreeMap<NaiveDate, MonthlyCell>,
    pub total_pages: u32,
    pub total_hours: f64,
}

/// Builds the monthly report: a person x date matrix of page counts and
/// purchase-order hours with row totals.
///
/// A job's PO hours are credited to a person's day at most once, no matter
/// how many qualifying events the job produced that day.
pub fn monthly_report(snapshot: &Snapshot, config: &Config) -> Vec<MonthlyRow> {
    let jobs = job_index(&snapshot.jobs);

    let mut person_order: Vec<i64> = Vec::new();
    let mut seen: HashSet<i64> = HashSet::new();
    for event in &snapshot.events {
        if seen.insert(event.person_id) {
            person_order.push(event.person_id);
        }
    }

    let names: HashMap<i64, &str> = snapshot.profiles.iter().map(|profile| (profile.person_id, profile.name.as_str())).collect();

    let mut rows: Vec<MonthlyRow> = person_order
        .into_iter()
        .map(|person_id| {
            let mut cells: BTreeMap<NaiveDate, MonthlyCell> = BTreeMap::new();
            // A (job, day) pair is credited with PO hours exactly once.
            let mut credited: HashSet<(i64, NaiveDate)> = HashSet::new();

            for interval in person_intervals(snapshot, person_id, config) {
                let cell = cells.entry(interval.date).or_default();
                cell.pages += interval.page_count;
                if credited.insert((interval.job_id, interval.date)) {
                    cell.hours += jobs.get(&interval.job_id).map_or(0.0, |job| job.po_hours);
                }
            }

            let total_pages = cells.values().map(|cell| cell.pages).sum();
            let total_hours = cells.values().map(|cell| cell.hours).sum();

            MonthlyRow {
                serial: 0,
                person_id,
                person_name: names.get(&person_id).map_or_else(|| UNKNOWN.to_string(), |name| (*name).to_string()),
                cells,
                total_pages,
                total_hours,
            }
        })
        .collect();

    rows.sort_by(|a, b| a.person_name.cmp(&b.person_name));
    for (index, row) in rows.iter_mut().enumerate() {
        row.serial = index + 1;
    }
    rows
}

/// Display-ready monthly cell with its formatted date.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyCellRow {
    pub date: String,
    pub pages: u32,
    pub hours: f64,
}

/// Display-ready monthly row.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyRowFormatted {
    pub serial: usize,
    pub person_id: i64,
    pub person_name: String,
    pub cells: Vec<MonthlyCellRow>,
    pub total_pages: u32,
    pub total_hours: f64,
}

pub trait FormatMonthly {
    fn format(&self) -> Vec<MonthlyRowFormatted>;
}

impl FormatMonthly for Vec<MonthlyRow> {
    fn format(&self) -> Vec<MonthlyRowFormatted> {
        self.iter()
            .map(|row| MonthlyRowFormatted {
                serial: row.serial,
                person_id: row.person_id,
                person_name: row.person_name.clone(),
                cells: row
                    .cells
                    .iter()
                    .map(|(date, cell)| MonthlyCellRow {
                        date: format_date(*date),
                        pages: cell.pages,
                        hours: cell.hours,
                    })
                    .collect(),
                total_pages: row.total_pages,
                total_hours: row.total_hours,
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Job-tracking / stage report
// ---------------------------------------------------------------------------

/// Pipeline stages a job moves through, including correction cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    Dtp,
    Qc,
    Qa,
    QcCorrection,
    QaCorrection,
}

impl StageKind {
    pub fn label(self) -> &'static str {
        match self {
            StageKind::Dtp => "DTP",
            StageKind::Qc => "QC",
            StageKind::Qa => "QA",
            StageKind::QcCorrection => "QC CXN",
            StageKind::QaCorrection => "QA CXN",
        }
    }

    /// Maps a declared stage label onto a known stage, tolerating the
    /// spellings the upstream forms produce ("Processor", "DTP",
    /// "QC-CXN", "QA Correction", ...).
    pub fn parse(label: &str) -> Option<StageKind> {
        let normalized = label.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return None;
        }
        let correction = normalized.contains("cxn") || normalized.contains("correction");
        if normalized.contains("qa") {
            return Some(if correction { StageKind::QaCorrection } else { StageKind::Qa });
        }
        if normalized.contains("qc") {
            return Some(if correction { StageKind::QcCorrection } else { StageKind::Qc });
        }
        if normalized.contains("dtp") || normalized.contains("processor") {
            return Some(StageKind::Dtp);
        }
        None
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Completion state of one stage of one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StageStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl fmt::Display for StageStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            StageStatus::NotStarted => "Not Started",
            StageStatus::InProgress => "In Progress",
            StageStatus::Completed => "Completed",
        };
        write!(f, "{}", label)
    }
}

/// What one stage of one job looked like over the report window.
#[derive(Debug, Clone, Default)]
pub struct StageCell {
    pub performer: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub status: StageStatus,
}

impl StageCell {
    pub fn elapsed(&self) -> Option<Duration> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }
}

/// One job-tracking row: job metadata plus a cell per pipeline stage.
#[derive(Debug, Clone)]
pub struct TrackingRow {
    /// Monotonically increasing job sequence number in processing order.
    pub sequence: usize,
    pub job_id: i64,
    pub job_name: String,
    pub po_hours: f64,
    pub date: NaiveDate,
    pub start: NaiveDateTime,
    pub stages: HashMap<StageKind, StageCell>,
}

impl TrackingRow {
    pub fn stage(&self, kind: StageKind) -> StageCell {
        self.stages.get(&kind).cloned().unwrap_or_default()
    }
}

impl Assemble for TrackingRow {
    fn sort_key(&self) -> (NaiveDate, NaiveDateTime) {
        (self.date, self.start)
    }

    fn set_serial(&mut self, serial: usize) {
        self.sequence = serial;
    }
}

/// Builds the job-tracking report: one row per job with per-stage
/// performer, start/end times and completion status.
///
/// Stage start is the first qualifying event declaring that stage, end is
/// the last; the stage counts as completed once a complete or upload
/// action closed it. A job with no matching metadata still gets a row with
/// placeholder fields.
pub fn tracking_report(snapshot: &Snapshot) -> Vec<TrackingRow> {
    let jobs = job_index(&snapshot.jobs);
    let mut rows = Vec::new();

    for (task_id, group) in snapshot.events.group_by_task() {
        let Some(first) = group.first() else { continue };
        let anchor = first.effective_time();

        let mut stages: HashMap<StageKind, StageCell> = HashMap::new();
        for event in &group {
            if !event.action_type.produces_interval() {
                continue;
            }
            let Some(kind) = event.stage.as_deref().and_then(StageKind::parse) else {
                continue;
            };
            let cell = stages.entry(kind).or_default();
            let time = event.effective_time();
            if cell.start.is_none() {
                cell.start = Some(time);
            }
            cell.end = Some(time);
            if let Some(name) = event.performer_name.as_deref() {
                if !name.trim().is_empty() {
                    cell.performer = Some(name.to_string());
                }
            }
            if event.action_type.closes_stage() {
                cell.status = StageStatus::Completed;
            } else if cell.status != StageStatus::Completed {
                cell.status = StageStatus::InProgress;
            }
        }

        let job = jobs.get(&task_id);
        rows.push(TrackingRow {
            sequence: 0,
            job_id: task_id,
            job_name: job.map_or_else(|| UNKNOWN.to_string(), |job| job.name.clone()),
            po_hours: job.map_or(0.0, |job| job.po_hours),
            date: anchor.date(),
            start: anchor,
            stages,
        });
    }

    assemble(rows)
}

/// Display-ready stage cell; elapsed durations carry seconds.
#[derive(Debug, Clone, Serialize)]
pub struct StageCellRow {
    pub performer: String,
    pub start: String,
    pub end: String,
    pub elapsed: String,
    pub status: String,
}

/// Display-ready job-tracking row.
#[derive(Debug, Clone, Serialize)]
pub struct TrackingRowFormatted {
    pub sequence: usize,
    pub job_id: i64,
    pub job_name: String,
    pub po_hours: f64,
    pub date: String,
    pub dtp: StageCellRow,
    pub qc: StageCellRow,
    pub qa: StageCellRow,
    pub qc_cxn: StageCellRow,
    pub qa_cxn: StageCellRow,
}

fn format_stage(cell: &StageCell) -> StageCellRow {
    StageCellRow {
        performer: or_placeholder(cell.performer.as_deref(), PLACEHOLDER),
        start: format_time(cell.start),
        end: format_time(cell.end),
        elapsed: cell.elapsed().map_or_else(|| PLACEHOLDER.to_string(), |elapsed| format_duration_secs(&elapsed)),
        status: cell.status.to_string(),
    }
}

pub trait FormatTracking {
    fn format(&self) -> Vec<TrackingRowFormatted>;
}

impl FormatTracking for Vec<TrackingRow> {
    fn format(&self) -> Vec<TrackingRowFormatted> {
        self.iter()
            .map(|row| TrackingRowFormatted {
                sequence: row.sequence,
                job_id: row.job_id,
                job_name: row.job_name.clone(),
                po_hours: row.po_hours,
                date: format_date(row.date),
                dtp: format_stage(&row.stage(StageKind::Dtp)),
                qc: format_stage(&row.stage(StageKind::Qc)),
                qa: format_stage(&row.stage(StageKind::Qa)),
                qc_cxn: format_stage(&row.stage(StageKind::QcCorrection)),
                qa_cxn: format_stage(&row.stage(StageKind::QaCorrection)),
            })
            .collect()
    }
}
