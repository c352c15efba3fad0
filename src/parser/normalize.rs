//! Canonical address and subnet for an interface address line.

use crate::error::IpParseError;
use crate::models::{Ipv4, Platform, DHCP};

/// Result of normalizing an address line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpAddress {
    /// `ip address dhcp`
    Dhcp,
    Static {
        /// Interface address with its prefix length.
        address: Ipv4,
        /// The masked network.
        subnet: Ipv4,
    },
}

impl IpAddress {
    /// Strings stored in the record's `IPAddress` and `Subnet` fields.
    pub fn fields(&self) -> (String, String) {
        match self {
            IpAddress::Dhcp => (DHCP.to_string(), DHCP.to_string()),
            IpAddress::Static { address, subnet } => (address.to_string(), subnet.to_string()),
        }
    }
}

/// Normalize the raw text of an `ip address` line.
///
/// IOS writes `ip address <addr> <dotted-mask> [secondary]`, NXOS writes
/// `ip address <addr>/<len>`. Tokens after the address are ignored.
///
/// An NXOS token is only accepted in its plain form (no leading zeros, no
/// sign), so the stored address is the token as written.
pub fn normalize_ip(line: &str, platform: Platform) -> Result<IpAddress, IpParseError> {
    let mut args = line
        .split_whitespace()
        .skip_while(|t| *t != "address")
        .skip(1)
        .peekable();

    if args.peek().is_none() {
        return Err(IpParseError::MissingToken(line.trim().to_string()));
    }
    if line.split_whitespace().any(|t| t == DHCP) {
        return Ok(IpAddress::Dhcp);
    }

    let address = match platform {
        Platform::Ios => {
            let addr = args
                .next()
                .ok_or_else(|| IpParseError::MissingToken(line.trim().to_string()))?;
            let mask = args
                .next()
                .ok_or_else(|| IpParseError::MissingToken(line.trim().to_string()))?;
            Ipv4::from_dotted(addr, mask)?
        }
        Platform::Nxos => {
            let cidr = args
                .next()
                .ok_or_else(|| IpParseError::MissingToken(line.trim().to_string()))?;
            Ipv4::new(cidr)?
        }
    };

    Ok(IpAddress::Static {
        address,
        subnet: address.network(),
    })
}
