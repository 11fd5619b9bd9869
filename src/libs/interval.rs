//! Work interval reconstruction and tolerance-based merging.
//!
//! Reconstruction turns each sorted task partition into intervals by
//! pairing every qualifying event with the next one's timestamp; the last
//! dangling action gets a fixed default length. Merging then coalesces
//! adjacent intervals of the same job and calendar date when the gap
//! between them is within a small tolerance, which bounds false-splitting
//! of what was really one continuous work session across rapid consecutive
//! log entries without gluing genuinely separate sessions together.

use crate::libs::event::{ActionEvent, GroupEvents};
use crate::libs::formatter::{or_placeholder, UNKNOWN};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::HashMap;

/// A single reconstructed stretch of work on one job.
///
/// Derived and ephemeral: created here, possibly merged, consumed by report
/// assembly, never persisted. Zero and negative spans are legal at this
/// point; clamping is the attendance calculator's business, not ours.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkInterval {
    pub job_id: i64,
    pub person_id: i64,
    pub date: NaiveDate,
    pub stage: String,
    pub performer: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub page_count: u32,
}

impl WorkInterval {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Derives one interval per qualifying event in each task partition.
///
/// The interval runs from the event's effective time to the next qualifying
/// event's effective time, or for the final dangling action of a task, for
/// `trailing` (see [`crate::libs::config::Config::trailing_interval`]).
/// Informational actions (handover, download, routing) are skipped.
pub fn reconstruct_intervals(events: &[ActionEvent], trailing: Duration) -> Vec<WorkInterval> {
    let mut intervals = Vec::new();

    for (task_id, group) in events.group_by_task() {
        let qualifying: Vec<&ActionEvent> = group.into_iter().filter(|event| event.action_type.produces_interval()).collect();

        for (index, event) in qualifying.iter().enumerate() {
            let start = event.effective_time();
            let end = match qualifying.get(index + 1) {
                Some(next) => next.effective_time(),
                None => start + trailing,
            };

            intervals.push(WorkInterval {
                job_id: task_id,
                person_id: event.person_id,
                date: start.date(),
                stage: or_placeholder(event.stage.as_deref(), UNKNOWN),
                performer: or_placeholder(event.performer_name.as_deref(), UNKNOWN),
                start,
                end,
                page_count: event.page_count,
            });
        }
    }

    intervals
}

/// Coalesces near-adjacent intervals of the same job and date.
pub trait MergeIntervals {
    /// Merges intervals whose gap to the previous one is within `tolerance`.
    ///
    /// Groups by `(job_id, date)` and sorts each group by start time, then
    /// folds an interval into the accumulated one when
    /// `0 <= gap <= tolerance`: the span is extended to the newcomer's end,
    /// the stage label is last-write-wins, and the page count keeps the
    /// larger value when the newcomer reports one. A gap outside the
    /// tolerance, including a negative one, starts a new output interval.
    fn merge(self, tolerance: Duration) -> Vec<WorkInterval>;
}

impl MergeIntervals for Vec<WorkInterval> {
    fn merge(self, tolerance: Duration) -> Vec<WorkInterval> {
        let mut order: Vec<(i64, NaiveDate)> = Vec::new();
        let mut groups: HashMap<(i64, NaiveDate), Vec<WorkInterval>> = HashMap::new();

        for interval in self {
            let key = (interval.job_id, interval.date);
            if !groups.contains_key(&key) {
                order.push(key);
            }
            groups.entry(key).or_default().push(interval);
        }

        let mut merged = Vec::new();
        for key in order {
            let Some(mut group) = groups.remove(&key) else { continue };
            group.sort_by_key(|interval| interval.start);

            let mut iter = group.into_iter();
            if let Some(mut current) = iter.next() {
                for next in iter {
                    let gap = next.start - current.end;
                    if gap >= Duration::zero() && gap <= tolerance {
                        current.end = next.end;
                        current.stage = next.stage;
                        if next.page_count > 0 {
                            current.page_count = current.page_count.max(next.page_count);
                        }
                    } else {
                        merged.push(current);
                        current = next;
                    }
                }
                merged.push(current);
            }
        }

        merged
    }
}
