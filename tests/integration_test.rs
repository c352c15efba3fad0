//! Integration tests for cisco-config-parser
//!
//! These tests run the fixture configurations through the public API, from
//! reading the file to serialized output.

use cisco_config_parser::models::PARSE_FAILED;
use cisco_config_parser::parser::Diagnostic;
use cisco_config_parser::{Device, DeviceError, Ipv4, OutputFormat, Serializer, SubnetEntry};
use std::fs::File;
use std::io::Cursor;

const IOS_ROUTER: &str = "src/tests/test_data/INET-R01.txt";
const NXOS_SWITCH: &str = "src/tests/test_data/dc0-n9k.txt";

fn device_from_file(path: &str, platform: &str) -> Device<'static> {
    let file = File::open(path).expect("Cannot open configuration file");
    Device::new(file, platform).expect("Unknown platform")
}

fn net(s: &str) -> Ipv4 {
    Ipv4::new(s).unwrap()
}

#[test]
fn test_ios_router() {
    let mut device = device_from_file(IOS_ROUTER, "ios");
    assert_eq!(device.hostname().unwrap(), Some("INET-R01"));
    assert_eq!(
        device.interface_names().unwrap(),
        vec![
            "GigabitEthernet0/0",
            "GigabitEthernet0/1",
            "GigabitEthernet0/1.100",
            "GigabitEthernet0/1.200",
            "GigabitEthernet0/2",
            "GigabitEthernet0/3",
            "Loopback0",
            "Tunnel10",
        ]
    );

    let gi0 = device.interface("GigabitEthernet0/0").unwrap().unwrap().clone();
    assert_eq!(gi0.ip_address, "dhcp");
    assert_eq!(gi0.subnet, "dhcp");
    assert_eq!(gi0.acl_in, "ISP-IN");
    assert_eq!(gi0.acl_out, "ISP-OUT");

    let users = device
        .interface("GigabitEthernet0/1.100")
        .unwrap()
        .unwrap()
        .clone();
    assert_eq!(users.encapsulation, "dot1Q 100");
    assert_eq!(users.ip_address, "10.1.100.1/24");
    assert_eq!(users.subnet, "10.1.100.0/24");
    assert_eq!(users.mtu, "1400");

    let legacy = device.interface("GigabitEthernet0/3").unwrap().unwrap();
    assert_eq!(legacy.vrf, "LEGACY");
    assert_eq!(legacy.ip_address, PARSE_FAILED);
    assert_eq!(legacy.subnet, PARSE_FAILED);

    let tunnel = device.interface("Tunnel10").unwrap().unwrap();
    assert_eq!(tunnel.description, "DMVPN hub");
    assert_eq!(tunnel.subnet, "172.16.10.0/24");

    // interfaces after the router section are not reached
    assert!(device.interface("GigabitEthernet0/9").unwrap().is_none());
}

#[test]
fn test_ios_router_subnets() {
    let mut device = device_from_file(IOS_ROUTER, "ios");
    assert_eq!(device.subnets().unwrap().len(), 4);
    assert_eq!(
        device.subnet(&net("10.1.100.0/24")).unwrap().unwrap(),
        &[
            SubnetEntry::new("GigabitEthernet0/1.100", ""),
            SubnetEntry::new("GigabitEthernet0/2", "MGMT"),
        ]
    );
    assert_eq!(
        device.subnet(&net("10.255.0.1/32")).unwrap().unwrap(),
        &[SubnetEntry::new("Loopback0", "")]
    );
    // the secondary overwrote the record, the index kept the first address
    assert!(device.subnet(&net("10.1.200.0/24")).unwrap().is_some());
    assert!(device.subnet(&net("10.1.201.0/24")).unwrap().is_none());
    assert_eq!(device.subnets_shared().unwrap().len(), 1);
}

#[test]
fn test_nxos_switch() {
    let mut device = device_from_file(NXOS_SWITCH, "nxos");
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    device.parse(&mut diagnostics).unwrap();

    assert_eq!(device.hostname().unwrap(), Some("dc0-n9k-d"));
    assert_eq!(device.interface_count().unwrap(), 8);
    assert_eq!(
        device.interface_names().unwrap(),
        vec![
            "Ethernet1/1",
            "Vlan1",
            "Vlan10",
            "Vlan20",
            "Vlan30",
            "Vlan40",
            "mgmt0",
            "port-channel1",
        ]
    );

    let vlan10 = device.interface("Vlan10").unwrap().unwrap().clone();
    assert_eq!(vlan10.description, "Servers");
    assert_eq!(vlan10.vrf, "PROD");
    assert_eq!(vlan10.mtu, "9216");
    assert_eq!(vlan10.acl_in, "SRV-IN");
    assert_eq!(vlan10.ip_address, "10.20.10.1/24");

    let eth = device.interface("Ethernet1/1").unwrap().unwrap().clone();
    assert_eq!(eth.subnet, "10.0.0.0/31");

    assert!(device.interface("Vlan40").unwrap().unwrap().ip_failed());
    assert_eq!(device.interface("Vlan1").unwrap().unwrap().ip_address, "");

    assert_eq!(
        device.subnet(&net("10.20.20.0/24")).unwrap().unwrap(),
        &[
            SubnetEntry::new("Vlan20", "PROD"),
            SubnetEntry::new("Vlan30", ""),
        ]
    );

    assert!(matches!(
        &diagnostics[0],
        Diagnostic::IpParseFailure { interface, .. } if interface == "Vlan40"
    ));
    assert!(diagnostics.contains(&Diagnostic::ScanStopped {
        line_number: 58,
        line: "line console".to_string()
    }));
    assert_eq!(
        diagnostics.last(),
        Some(&Diagnostic::Finished { interfaces: 8 })
    );
}

#[test]
fn test_csv_output() {
    let mut device = device_from_file(IOS_ROUTER, "ios");
    let mut serializer = Serializer::new(Vec::new(), OutputFormat::Csv);
    serializer.serialize(&mut device).unwrap();
    let out = String::from_utf8(serializer.into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 9);
    assert_eq!(
        lines[0],
        "Name,Description,Encapsulation,IPAddress,Subnet,VRF,MTU,ACLIn,ACLOut"
    );
    assert_eq!(
        lines[1],
        "GigabitEthernet0/0,ISP-A uplink,,dhcp,dhcp,,,ISP-IN,ISP-OUT"
    );
    assert_eq!(
        lines[5],
        "GigabitEthernet0/2,OOB management,,10.1.100.2/24,10.1.100.0/24,MGMT,1500,,"
    );
}

#[test]
fn test_json_output() {
    let mut device = device_from_file(NXOS_SWITCH, "nxos");
    let mut serializer = Serializer::new(Vec::new(), OutputFormat::Json);
    serializer.serialize(&mut device).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&serializer.into_inner()).unwrap();

    assert_eq!(value["Hostname"], "dc0-n9k-d");
    assert_eq!(value["Interfaces"]["mgmt0"]["VRF"], "management");
    assert_eq!(value["Subnets"]["192.168.0.0/24"][0]["Interface"], "mgmt0");
    assert_eq!(value["Interfaces"].as_object().unwrap().len(), 8);
}

#[test]
fn test_wrong_platform_stops_early() {
    // NXOS text read as IOS: the blank line after the first header is not an
    // IOS block separator, so the scan stops there
    let mut device = device_from_file(NXOS_SWITCH, "ios");
    assert_eq!(device.interface_names().unwrap(), vec!["Vlan1"]);
}

#[test]
fn test_structural_errors() {
    assert!(matches!(
        Device::new(Cursor::new(""), "eos"),
        Err(DeviceError::PlatformUnknown(_))
    ));

    let mut device = Device::new(Cursor::new("hostname R1\n!\nend\n"), "ios").unwrap();
    assert!(matches!(
        device.interface_names(),
        Err(DeviceError::ParsingFailed)
    ));

    let mut device = Device::new(
        Cursor::new("interface Gi0/1\n description a\n!\ninterface Gi0/1\n mtu 1500\n!\n"),
        "ios",
    )
    .unwrap();
    let mut serializer = Serializer::new(Vec::new(), OutputFormat::Csv);
    assert!(serializer.serialize(&mut device).is_err());
    assert!(serializer.into_inner().is_empty());
}
