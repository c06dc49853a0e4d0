use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Construction-time settings carried by every matrix and vector.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinalgConfig {
    #[serde(default)]
    pub trace: TraceLevel,
}

/// How much of a value's life is reported through `log::trace!`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "snake_case")]
pub enum TraceLevel {
    #[default]
    Off,
    /// Construction, copy, move and release.
    Lifecycle,
    /// Lifecycle events plus every arithmetic operation.
    Operations,
}

impl TraceLevel {
    pub fn lifecycle(self) -> bool {
        self >= TraceLevel::Lifecycle
    }

    pub fn operations(self) -> bool {
        self >= TraceLevel::Operations
    }
}

impl FromStr for TraceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" | "none" => Ok(TraceLevel::Off),
            "lifecycle" => Ok(TraceLevel::Lifecycle),
            "operations" | "ops" => Ok(TraceLevel::Operations),
            _ => Err(format!(
                "Unknown trace level: {}. Expected one of `off`, `lifecycle` or `operations`",
                s
            )),
        }
    }
}

impl LinalgConfig {
    pub fn new(trace: TraceLevel) -> Self {
        Self { trace }
    }
}
