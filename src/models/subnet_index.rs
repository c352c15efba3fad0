//! Subnet to interface/VRF index.
//!
//! Groups interfaces by the canonical subnet of their address. A subnet that
//! appears on several interfaces, or in several VRFs, shows up as a bucket
//! with more than one entry.

use super::Ipv4;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Interface/VRF pair belonging to a subnet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetEntry {
    #[serde(rename = "Interface")]
    pub interface: String,
    /// VRF at the time the address was seen, empty for the global table.
    #[serde(rename = "VRF")]
    pub vrf: String,
}

impl SubnetEntry {
    pub fn new(interface: &str, vrf: &str) -> SubnetEntry {
        SubnetEntry {
            interface: interface.to_string(),
            vrf: vrf.to_string(),
        }
    }
}

impl fmt::Display for SubnetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "interface: {:?}, vrf: {:?}", self.interface, self.vrf)
    }
}

/// Buckets of [`SubnetEntry`] keyed by canonical subnet.
///
/// Buckets keep insertion order; keys iterate in ascending subnet order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct SubnetIndex {
    buckets: BTreeMap<Ipv4, Vec<SubnetEntry>>,
}

impl SubnetIndex {
    pub fn new() -> SubnetIndex {
        SubnetIndex::default()
    }

    /// Append `entry` to the bucket of `subnet`, creating the bucket if needed.
    pub fn add(&mut self, subnet: Ipv4, entry: SubnetEntry) {
        log::trace!("subnet index: {subnet} <- {entry}");
        self.buckets.entry(subnet).or_default().push(entry);
    }

    pub fn get(&self, subnet: &Ipv4) -> Option<&[SubnetEntry]> {
        self.buckets.get(subnet).map(Vec::as_slice)
    }

    /// Whether `interface` already contributed an entry.
    pub fn contains_interface(&self, interface: &str) -> bool {
        self.buckets
            .values()
            .flatten()
            .any(|e| e.interface == interface)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Ipv4, &[SubnetEntry])> {
        self.buckets.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Buckets holding more than one interface.
    pub fn shared(&self) -> impl Iterator<Item = (&Ipv4, &[SubnetEntry])> {
        self.iter().filter(|(_, entries)| entries.len() > 1)
    }

    /// Number of distinct subnets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Whether the entries of one bucket span more than one VRF.
pub fn spans_vrfs(entries: &[SubnetEntry]) -> bool {
    entries
        .split_first()
        .map(|(first, rest)| rest.iter().any(|e| e.vrf != first.vrf))
        .unwrap_or(false)
}

impl fmt::Display for SubnetIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (subnet, entries) in self.iter() {
            writeln!(f, "subnet: \"{subnet}\"")?;
            for entry in entries {
                writeln!(f, "\t{entry}")?;
            }
        }
        Ok(())
    }
}
