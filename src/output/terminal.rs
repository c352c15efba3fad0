//! Terminal output for the subnet/VRF index.

use crate::models::{spans_vrfs, SubnetIndex};
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Render the subnet index as aligned rows, one per interface.
///
/// Subnets present on several interfaces are marked `SHARED`, and those
/// whose interfaces sit in different VRFs are marked `VRF-LEAK`.
pub fn subnet_report(subnets: &SubnetIndex) -> String {
    let mut out = String::new();
    for (subnet, entries) in subnets.iter() {
        let flag = if spans_vrfs(entries) {
            "VRF-LEAK".on_red().to_string()
        } else if entries.len() > 1 {
            "SHARED".yellow().to_string()
        } else {
            String::new()
        };
        for entry in entries {
            out.push_str(&format!(
                "{subnet},{interface},{vrf} {flag}\n",
                subnet = format_field(subnet, 20),
                interface = format_field(&entry.interface, 28),
                vrf = format_field(&entry.vrf, 16),
            ));
        }
    }
    out
}

/// Print the subnet report to stdout.
pub fn print_subnets(subnets: &SubnetIndex) {
    log::info!("Subnets: found {} distinct subnets", subnets.len());
    print!("{}", subnet_report(subnets));
    let shared = subnets.shared().count();
    if shared > 0 {
        log::warn!("{shared} subnet(s) configured on more than one interface");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ipv4, SubnetEntry};

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_subnet_report_flags() {
        colored::control::set_override(false);
        let mut index = SubnetIndex::new();
        let net = Ipv4::new("10.0.0.0/24").unwrap();
        index.add(net, SubnetEntry::new("Gi0/1", ""));
        index.add(net, SubnetEntry::new("Gi0/2", "RED"));
        index.add(Ipv4::new("10.1.0.0/24").unwrap(), SubnetEntry::new("Gi0/3", "RED"));
        index.add(Ipv4::new("10.1.0.0/24").unwrap(), SubnetEntry::new("Gi0/4", "RED"));
        index.add(Ipv4::new("10.2.0.0/24").unwrap(), SubnetEntry::new("Gi0/5", ""));

        let report = subnet_report(&index);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("\"Gi0/1\"") && lines[0].ends_with("VRF-LEAK"));
        assert!(lines[2].contains("\"Gi0/3\"") && lines[2].ends_with("SHARED"));
        assert!(lines[4].contains("\"10.2.0.0/24\"") && lines[4].ends_with(' '));
        assert!(report.ends_with(" \n"));
        assert_eq!(report.matches('\n').count(), 5);
        assert_eq!(subnet_report(&SubnetIndex::new()), "");
    }
}
