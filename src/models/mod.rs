//! Domain models for parsed device configuration.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] - IPv4 address with CIDR notation support
//! - [`Platform`] - configuration dialect
//! - [`InterfaceRecord`] - one parsed interface
//! - [`SubnetIndex`] and [`SubnetEntry`] - interfaces grouped by subnet

mod interface;
mod ipv4;
mod platform;
mod subnet_index;

// Re-export public types
pub use interface::{InterfaceRecord, DHCP, PARSE_FAILED};
pub use ipv4::{cut_addr, get_cidr_mask, mask_to_prefix_len, Ipv4, MAX_LENGTH};
pub use platform::Platform;
pub use subnet_index::{spans_vrfs, SubnetEntry, SubnetIndex};
