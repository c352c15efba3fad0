//! Interface record data model.

use serde::{Deserialize, Serialize};

/// Value stored in `IPAddress` and `Subnet` when the address line could not
/// be parsed.
pub const PARSE_FAILED: &str = "FAILED TO PARSE";

/// Value stored in `IPAddress` and `Subnet` for DHCP-addressed interfaces.
pub const DHCP: &str = "dhcp";

/// Represents one configured interface. Empty strings mean "not configured".
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceRecord {
    /// Interface name, e.g. `GigabitEthernet0/1`.
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Encapsulation")]
    pub encapsulation: String,
    /// Canonical `addr/len`, `dhcp`, or [`PARSE_FAILED`].
    #[serde(rename = "IPAddress")]
    pub ip_address: String,
    /// Canonical `network/len`, `dhcp`, or [`PARSE_FAILED`].
    #[serde(rename = "Subnet")]
    pub subnet: String,
    #[serde(rename = "VRF")]
    pub vrf: String,
    #[serde(rename = "MTU")]
    pub mtu: String,
    #[serde(rename = "ACLIn")]
    pub acl_in: String,
    #[serde(rename = "ACLOut")]
    pub acl_out: String,
}

impl InterfaceRecord {
    /// Field names in output order. [`InterfaceRecord::values`] yields the
    /// values in the same order.
    pub const FIELDS: [&'static str; 9] = [
        "Name",
        "Description",
        "Encapsulation",
        "IPAddress",
        "Subnet",
        "VRF",
        "MTU",
        "ACLIn",
        "ACLOut",
    ];

    /// Create an empty record for `name`.
    pub fn new(name: &str) -> InterfaceRecord {
        InterfaceRecord {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn values(&self) -> [&str; 9] {
        [
            self.name.as_str(),
            self.description.as_str(),
            self.encapsulation.as_str(),
            self.ip_address.as_str(),
            self.subnet.as_str(),
            self.vrf.as_str(),
            self.mtu.as_str(),
            self.acl_in.as_str(),
            self.acl_out.as_str(),
        ]
    }

    /// Whether the address line of this interface failed to parse.
    pub fn ip_failed(&self) -> bool {
        self.ip_address == PARSE_FAILED
    }
}
