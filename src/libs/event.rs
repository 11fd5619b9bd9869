//! Action event model and chronological grouping.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The kind of action a log entry records against a task.
///
/// Only a subset of these produce work intervals; the rest are
/// informational routing actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Start,
    Pause,
    Resume,
    Complete,
    Upload,
    TakenBy,
    AssignedTo,
    Handover,
    Download,
    SendTo,
}

impl ActionType {
    /// Whether this action contributes a work interval during reconstruction.
    pub fn produces_interval(self) -> bool {
        matches!(
            self,
            ActionType::Start | ActionType::Pause | ActionType::Resume | ActionType::Complete | ActionType::Upload
        )
    }

    /// Whether this action closes out a work stage for tracking purposes.
    pub fn closes_stage(self) -> bool {
        matches!(self, ActionType::Complete | ActionType::Upload)
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One append-only log entry recorded against a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionEvent {
    pub task_id: i64,
    pub person_id: i64,
    pub action_type: ActionType,
    /// Record timestamp assigned when the entry was written.
    pub occurred_at: NaiveDateTime,
    /// Logical timestamp carried in the entry's embedded metadata,
    /// preferred over `occurred_at` when present.
    #[serde(default)]
    pub logical_time: Option<NaiveDateTime>,
    /// Declared work stage at the moment of the action, e.g. "Processor".
    #[serde(default)]
    pub stage: Option<String>,
    /// Page count summed over any attached file descriptors.
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub performer_name: Option<String>,
}

impl ActionEvent {
    /// The timestamp ordering and reconstruction work from: the embedded
    /// logical time when present, the record time otherwise.
    pub fn effective_time(&self) -> NaiveDateTime {
        self.logical_time.unwrap_or(self.occurred_at)
    }
}

/// Partitions events by task and sorts each partition chronologically.
pub trait GroupEvents {
    /// Groups events by `task_id`, preserving first-encounter task order.
    ///
    /// Within a group the sort is stable on the two-key
    /// `(effective_time, occurred_at)`, so events with identical timestamps
    /// keep their original relative order.
    fn group_by_task(&self) -> Vec<(i64, Vec<&ActionEvent>)>;
}

impl GroupEvents for [ActionEvent] {
    fn group_by_task(&self) -> Vec<(i64, Vec<&ActionEvent>)> {
        let mut order: Vec<i64> = Vec::new();
        let mut groups: HashMap<i64, Vec<&ActionEvent>> = HashMap::new();

        for event in self {
            if !groups.contains_key(&event.task_id) {
                order.push(event.task_id);
            }
            groups.entry(event.task_id).or_default().push(event);
        }

        order
            .into_iter()
            .filter_map(|task_id| {
                let mut events = groups.remove(&task_id)?;
                events.sort_by_key(|event| (event.effective_time(), event.occurred_at));
                Some((task_id, events))
            })
            .collect()
    }
}
