//! Output formatting for parsed devices.
//!
//! This module handles writing a parsed [`Device`]:
//! - [`csv`] - one row per interface
//! - [`json`] - the whole device
//! - [`terminal`] - subnet/VRF report with colors

mod csv;
mod json;
mod terminal;

pub use self::csv::write_csv;
pub use self::json::write_json;
pub use self::terminal::{format_field, print_subnets, subnet_report};

use crate::device::Device;
use crate::error::OutputError;
use std::io::Write;
use std::str::FromStr;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(OutputError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Writes a [`Device`] to a destination in one format.
pub struct Serializer<W: Write> {
    destination: W,
    format: OutputFormat,
}

impl<W: Write> Serializer<W> {
    pub fn new(destination: W, format: OutputFormat) -> Serializer<W> {
        Serializer {
            destination,
            format,
        }
    }

    /// Parse `device` if needed and write it out.
    pub fn serialize(&mut self, device: &mut Device<'_>) -> Result<(), OutputError> {
        log::debug!("serializing device as {}", self.format);
        match self.format {
            OutputFormat::Csv => write_csv(device, &mut self.destination),
            OutputFormat::Json => write_json(device, &mut self.destination),
        }
    }

    pub fn into_inner(self) -> W {
        self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_output_format() {
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(OutputError::UnsupportedFormat(f)) if f == "xml"
        ));
    }

    #[test]
    fn test_serializer_csv() {
        let mut device = Device::new(
            Cursor::new("interface Gi0/1\n mtu 1500\n!\n".to_string()),
            "ios",
        )
        .unwrap();
        let mut serializer = Serializer::new(Vec::new(), OutputFormat::Csv);
        serializer.serialize(&mut device).unwrap();
        let out = String::from_utf8(serializer.into_inner()).unwrap();
        assert!(out.starts_with("Name,"));
        assert!(out.contains("Gi0/1,,,,,,1500,,"));
    }
}
