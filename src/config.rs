//! Command line and environment configuration.

use crate::models::Platform;
use crate::output::OutputFormat;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Extract interface settings from a device running configuration.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Config {
    /// Running configuration to parse.
    pub input: PathBuf,

    /// Configuration dialect: ios or nxos.
    #[arg(short, long, env = "CFGPARSE_PLATFORM", default_value = "ios", value_parser = parse_platform)]
    pub platform: Platform,

    /// Output format: csv or json.
    #[arg(short, long, env = "CFGPARSE_FORMAT", default_value = "csv", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Output file. Defaults to the input path with the format's extension.
    #[arg(short, long, env = "CFGPARSE_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Also print the subnet/VRF report to stdout.
    #[arg(long)]
    pub subnets: bool,

    /// log4rs configuration file.
    #[arg(long, env = "CFGPARSE_LOG_CONFIG", default_value = "log4rs.yml")]
    pub log_config: PathBuf,
}

fn parse_platform(s: &str) -> Result<Platform, String> {
    s.parse().map_err(|e: crate::error::DeviceError| e.to_string())
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: crate::error::OutputError| e.to_string())
}

impl Config {
    /// Where the serialized device goes.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| replace_extension(&self.input, self.format.extension()))
    }
}

/// `router.txt` -> `router.<ext>`
pub fn replace_extension(path: &Path, ext: &str) -> PathBuf {
    path.with_extension(ext)
}
