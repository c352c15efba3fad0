//! Line-oriented configuration parser.
//!
//! - [`extract`] - patterns for the recognised attribute lines
//! - [`normalize`] - canonical address and subnet for `ip address` lines
//! - [`block`] - interface block scanner
//! - [`diagnostics`] - non-fatal events reported while scanning

mod block;
mod diagnostics;
mod extract;
mod normalize;

pub use block::{parse_config, ParsedConfig};
pub use diagnostics::{Diagnostic, Diagnostics, LogDiagnostics};
pub use extract::{extract_field, extract_hostname, extract_interface_name, Field};
pub use normalize::{normalize_ip, IpAddress};
