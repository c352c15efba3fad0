//! Extract interface settings from Cisco style running configurations.
//!
//! ```
//! use cisco_config_parser::Device;
//! use std::io::Cursor;
//!
//! let text = "interface Gi0/1\n description Uplink\n ip address 10.0.0.1 255.255.255.0\n!\n";
//! let mut device = Device::new(Cursor::new(text), "ios").unwrap();
//! let gi = device.interface("Gi0/1").unwrap().unwrap();
//! assert_eq!(gi.subnet, "10.0.0.0/24");
//! ```

pub mod config;
pub mod device;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod parser;

pub use device::Device;
pub use error::{DeviceError, DeviceResult, IpParseError, OutputError};
pub use models::{InterfaceRecord, Ipv4, Platform, SubnetEntry, SubnetIndex};
pub use output::{OutputFormat, Serializer};
