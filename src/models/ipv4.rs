//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`], a fixed-width address/prefix-length value, along with
//! the mask arithmetic used to canonicalize interface addresses.

use crate::error::IpParseError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cisco_config_parser::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, IpParseError> {
    if len > MAX_LENGTH {
        Err(IpParseError::PrefixLength(len.to_string()))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, IpParseError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Parse a prefix length written as plain decimal digits (`0`..=`32`).
///
/// Signs, leading zeros and empty strings are rejected, so a valid length
/// always renders back to the text it was parsed from.
fn parse_prefix_len(len: &str) -> Result<u8, IpParseError> {
    let invalid = || IpParseError::PrefixLength(len.to_string());
    if len.is_empty() || !len.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if len.len() > 1 && len.starts_with('0') {
        return Err(invalid());
    }
    let len: u8 = len.parse().map_err(|_| invalid())?;
    if len > MAX_LENGTH {
        return Err(invalid());
    }
    Ok(len)
}

/// Convert a dotted-decimal mask to its prefix length.
///
/// Returns `None` unless the set bits are contiguous from the left.
///
/// ```
/// use cisco_config_parser::models::mask_to_prefix_len;
/// use std::net::Ipv4Addr;
/// assert_eq!(mask_to_prefix_len(Ipv4Addr::new(255, 255, 255, 252)), Some(30));
/// assert_eq!(mask_to_prefix_len(Ipv4Addr::new(255, 0, 255, 0)), None);
/// ```
pub fn mask_to_prefix_len(mask: Ipv4Addr) -> Option<u8> {
    let bits = u32::from(mask);
    let len = bits.leading_ones() as u8;
    // leading_ones == 32 - trailing_zeros only for contiguous masks
    if bits.trailing_zeros() as u8 + len == MAX_LENGTH {
        Some(len)
    } else {
        None
    }
}

/// IPv4 address with CIDR notation support.
///
/// Equality and ordering compare the address first, then the prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.1/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, IpParseError> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| IpParseError::MissingToken(addr_cidr.to_string()))?;
        let addr = Ipv4Addr::from_str(addr).map_err(|_| IpParseError::Address(addr.to_string()))?;
        let mask = parse_prefix_len(mask)?;
        Ok(Ipv4 { addr, mask })
    }

    /// Create a new [`Ipv4`] from an address and a dotted-decimal mask,
    /// as written by IOS (`10.0.0.1 255.255.255.0`).
    pub fn from_dotted(addr: &str, mask: &str) -> Result<Ipv4, IpParseError> {
        let addr = Ipv4Addr::from_str(addr).map_err(|_| IpParseError::Address(addr.to_string()))?;
        let mask = Ipv4Addr::from_str(mask)
            .ok()
            .and_then(mask_to_prefix_len)
            .ok_or_else(|| IpParseError::Mask(mask.to_string()))?;
        Ok(Ipv4 { addr, mask })
    }

    /// The network this address belongs to, i.e. the address with all host
    /// bits cleared.
    pub fn network(&self) -> Ipv4 {
        // mask <= MAX_LENGTH is upheld by every constructor
        let addr = cut_addr(self.addr, self.mask).unwrap_or(self.addr);
        Ipv4 {
            addr,
            mask: self.mask,
        }
    }
}

impl FromStr for Ipv4 {
    type Err = IpParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
