//! Output target definitions

use crate::core::error::LogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Destination for formatted log output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum OutputTarget {
    /// Console stream (stderr)
    #[default]
    Console,
    /// Text file, append mode
    File,
    /// JSON lines file, append mode
    Json,
}

impl OutputTarget {
    pub fn to_str(&self) -> &'static str {
        match self {
            OutputTarget::Console => "CONSOLE",
            OutputTarget::File => "FILE",
            OutputTarget::Json => "JSON",
        }
    }

    /// Whether this target writes to a file and therefore needs a path
    pub fn needs_path(&self) -> bool {
        matches!(self, OutputTarget::File | OutputTarget::Json)
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for OutputTarget {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CONSOLE" => Ok(OutputTarget::Console),
            "FILE" => Ok(OutputTarget::File),
            "JSON" => Ok(OutputTarget::Json),
            _ => Err(LogError::config(
                "output_target",
                format!("invalid output target: '{}'", s),
            )),
        }
    }
}
