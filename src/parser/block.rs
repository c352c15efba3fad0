//! Interface block scanner.
//!
//! Walks the configuration one line at a time, tracking whether it is inside
//! an `interface` block, and hands indented lines of the current block to the
//! field extractors.

use super::diagnostics::{Diagnostic, Diagnostics};
use super::extract::{
    extract_field, extract_hostname, extract_interface_name, Field, INTERFACE_KEYWORD,
};
use super::normalize::{normalize_ip, IpAddress};
use crate::error::{DeviceError, DeviceResult};
use crate::models::{InterfaceRecord, Platform, SubnetEntry, SubnetIndex, PARSE_FAILED};
use std::collections::BTreeMap;
use std::io::BufRead;

/// Everything a single scan produces.
#[derive(Debug, Default)]
pub struct ParsedConfig {
    pub hostname: Option<String>,
    pub interfaces: BTreeMap<String, InterfaceRecord>,
    pub subnets: SubnetIndex,
}

#[derive(Debug, PartialEq, Eq)]
enum BlockState {
    Outside,
    InBlock(String),
}

/// Scan `reader` to the end of its interface section.
///
/// Fails with [`DeviceError::DuplicateInterface`] when a name is declared
/// twice and with [`DeviceError::ParsingFailed`] when no interface was found.
/// Once interfaces have been seen, the first line that is neither block
/// content, the block separator nor another interface header ends the scan;
/// anything after it is not read.
pub fn parse_config<R: BufRead>(
    reader: R,
    platform: Platform,
    diagnostics: &mut dyn Diagnostics,
) -> DeviceResult<ParsedConfig> {
    let mut parsed = ParsedConfig::default();
    let mut state = BlockState::Outside;
    let indent = platform.content_indent();
    let separator = platform.block_separator();

    for (i, raw) in reader.lines().enumerate() {
        let raw = raw?;
        let line = raw.trim_end_matches([' ', '\r']);

        if let Some(hostname) = extract_hostname(line) {
            if parsed.hostname.is_none() {
                log::debug!("hostname {hostname}");
                parsed.hostname = Some(hostname.to_string());
            }
            continue;
        }

        if let Some(name) = extract_interface_name(line) {
            if parsed.interfaces.contains_key(name) {
                log::error!("duplicate interface {name} at line {}", i + 1);
                return Err(DeviceError::DuplicateInterface(name.to_string()));
            }
            log::trace!("interface {name}");
            parsed
                .interfaces
                .insert(name.to_string(), InterfaceRecord::new(name));
            state = BlockState::InBlock(name.to_string());
            continue;
        }

        if let BlockState::InBlock(name) = &state {
            if line.starts_with(indent) {
                if let Some(record) = parsed.interfaces.get_mut(name) {
                    apply_line(
                        record,
                        &raw,
                        line,
                        platform,
                        &mut parsed.subnets,
                        diagnostics,
                    );
                }
                continue;
            }
        }

        if line == separator || line.starts_with(INTERFACE_KEYWORD) {
            continue;
        }

        if !parsed.interfaces.is_empty() {
            diagnostics.report(Diagnostic::ScanStopped {
                line_number: i + 1,
                line: line.to_string(),
            });
            break;
        }
    }

    if parsed.interfaces.is_empty() {
        diagnostics.report(Diagnostic::NoInterfaces);
        return Err(DeviceError::ParsingFailed);
    }
    diagnostics.report(Diagnostic::Finished {
        interfaces: parsed.interfaces.len(),
    });
    Ok(parsed)
}

/// Store one block line on `record`. Lines of unknown shape are skipped.
fn apply_line(
    record: &mut InterfaceRecord,
    raw: &str,
    line: &str,
    platform: Platform,
    subnets: &mut SubnetIndex,
    diagnostics: &mut dyn Diagnostics,
) {
    let field = match extract_field(line) {
        Some(field) => field,
        None => {
            log::trace!("{}: skip {line:?}", record.name);
            return;
        }
    };

    match field {
        Field::Description(v) => record.description = v.to_string(),
        Field::Encapsulation(v) => record.encapsulation = v.to_string(),
        Field::Vrf(v) => record.vrf = v.to_string(),
        Field::Mtu(v) => record.mtu = v.to_string(),
        Field::AclIn(v) => record.acl_in = v.to_string(),
        Field::AclOut(v) => record.acl_out = v.to_string(),
        Field::IpAddress(_) => match normalize_ip(raw, platform) {
            Ok(ip) => {
                (record.ip_address, record.subnet) = ip.fields();
                if let IpAddress::Static { subnet, .. } = ip {
                    // one index entry per interface, the first address wins
                    if !subnets.contains_interface(&record.name) {
                        subnets.add(subnet, SubnetEntry::new(&record.name, &record.vrf));
                    }
                }
            }
            Err(e) => {
                record.ip_address = PARSE_FAILED.to_string();
                record.subnet = PARSE_FAILED.to_string();
                diagnostics.report(Diagnostic::IpParseFailure {
                    interface: record.name.clone(),
                    line: raw.to_string(),
                    reason: e.to_string(),
                });
            }
        },
    }
}
