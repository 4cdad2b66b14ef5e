use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display ordering strategy for a playlist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanOrder {
    /// Order in which songs were added
    #[default]
    Adding,

    /// By name, then artist, ascending
    Name,

    /// By duration, ascending
    Duration,
}

impl ScanOrder {
    pub fn name(&self) -> &'static str {
        match self {
            ScanOrder::Adding => "adding",
            ScanOrder::Name => "name",
            ScanOrder::Duration => "duration",
        }
    }
}

impl fmt::Display for ScanOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScanOrder {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adding" | "added" | "insertion" => Ok(ScanOrder::Adding),
            "name" => Ok(ScanOrder::Name),
            "duration" => Ok(ScanOrder::Duration),
            _ => Err(ParseError::ScanOrder(s.to_string())),
        }
    }
}
