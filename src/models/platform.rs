//! Supported configuration dialects.

use crate::error::DeviceError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Device configuration dialect.
///
/// The two dialects differ in how interface sub-commands are indented and
/// in the line that separates interface blocks.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// One space indent, blocks separated by `!`.
    Ios,
    /// Two space indent, blocks separated by an empty line.
    Nxos,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Nxos => "nxos",
        }
    }

    /// Prefix carried by every line inside an interface block.
    pub fn content_indent(&self) -> &'static str {
        match self {
            Platform::Ios => " ",
            Platform::Nxos => "  ",
        }
    }

    /// The line that separates two interface blocks.
    pub fn block_separator(&self) -> &'static str {
        match self {
            Platform::Ios => "!",
            Platform::Nxos => "",
        }
    }
}

impl FromStr for Platform {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ios" => Ok(Platform::Ios),
            "nxos" => Ok(Platform::Nxos),
            other => Err(DeviceError::PlatformUnknown(other.to_string())),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
