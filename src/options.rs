use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Default time budget for the line diff search.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Default cost of one edit operation for the efficiency cleanup.
pub const DEFAULT_EDIT_COST: usize = 4;

/// Knobs for the line diff.
///
/// In a config file the timeout is given in milliseconds, `0` meaning no limit:
///
/// ```toml
/// timeout_ms = 2000
/// edit_cost = 4
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Best-effort bound on the search; `None` always finds a minimal script.
    #[serde(rename = "timeout_ms", with = "millis")]
    pub timeout: Option<Duration>,
    pub edit_cost: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            timeout: Some(DEFAULT_TIMEOUT),
            edit_cost: DEFAULT_EDIT_COST,
        }
    }
}

impl DiffOptions {
    pub fn unbounded() -> Self {
        DiffOptions {
            timeout: None,
            ..Self::default()
        }
    }

    /// When a search started now has to give up.
    pub fn deadline(&self) -> Option<Instant> {
        self.timeout
            .and_then(|timeout| Instant::now().checked_add(timeout))
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = value.map_or(0, |d| d.as_millis().min(u64::MAX as u128) as u64);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Duration>, D::Error> {
        let millis = u64::deserialize(deserializer)?;
        Ok((millis > 0).then(|| Duration::from_millis(millis)))
    }
}
