//! Engine tuning configuration.
//!
//! The two magic numbers of the interval pipeline live here as named
//! values rather than literals scattered through the code: the merge
//! tolerance and the default length of a task's trailing interval. Both
//! can be overridden from a JSON configuration file pointed at by the
//! `WORKLOG_CONFIG` environment variable; absent that, the defaults apply.

use anyhow::{Context, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;

/// Environment variable naming the configuration file path.
pub const CONFIG_ENV_VAR: &str = "WORKLOG_CONFIG";

/// Maximum gap in seconds between two intervals of the same job and date
/// for them to still be considered one continuous session.
pub const DEFAULT_MERGE_TOLERANCE_SECS: i64 = 5;

/// Length in minutes assigned to the final dangling action of a task,
/// which has no following event to borrow an end time from.
pub const DEFAULT_TRAILING_INTERVAL_MINUTES: i64 = 10;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// See [`DEFAULT_MERGE_TOLERANCE_SECS`].
    #[serde(default = "default_merge_tolerance_secs")]
    pub merge_tolerance_secs: i64,
    /// See [`DEFAULT_TRAILING_INTERVAL_MINUTES`].
    #[serde(default = "default_trailing_interval_minutes")]
    pub trailing_interval_minutes: i64,
}

fn default_merge_tolerance_secs() -> i64 {
    DEFAULT_MERGE_TOLERANCE_SECS
}

fn default_trailing_interval_minutes() -> i64 {
    DEFAULT_TRAILING_INTERVAL_MINUTES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            merge_tolerance_secs: DEFAULT_MERGE_TOLERANCE_SECS,
            trailing_interval_minutes: DEFAULT_TRAILING_INTERVAL_MINUTES,
        }
    }
}

impl Config {
    /// Reads the configuration file named by `WORKLOG_CONFIG`, falling back
    /// to defaults when the variable is unset.
    pub fn read() -> Result<Self> {
        match env::var(CONFIG_ENV_VAR) {
            Ok(path) => {
                let file = File::open(&path).with_context(|| format!("Failed to open config file {}", path))?;
                let config = serde_json::from_reader(file).with_context(|| format!("Failed to parse config file {}", path))?;
                Ok(config)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn merge_tolerance(&self) -> Duration {
        Duration::seconds(self.merge_tolerance_secs)
    }

    pub fn trailing_interval(&self) -> Duration {
        Duration::minutes(self.trailing_interval_minutes)
    }
}
