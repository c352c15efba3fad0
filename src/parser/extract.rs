//! Line patterns for the recognised configuration attributes.
//!
//! Each extractor looks at one line and returns the captured value, or
//! `None` when the line has a different shape. Matching is case and
//! whitespace sensitive.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HOSTNAME_RE: Regex = Regex::new(r"^hostname (\S+)").expect("Invalid Regex?");
    static ref DESC_RE: Regex = Regex::new(r"^ {1,2}description (.*)$").expect("Invalid Regex?");
    static ref ENCAP_RE: Regex =
        Regex::new(r"^ {1,2}encapsulation (.+)$").expect("Invalid Regex?");
    static ref IP_RE: Regex = Regex::new(r"^ {1,2}ip(?:v4)? address (.+)$").expect("Invalid Regex?");
    static ref VRF_RE: Regex =
        Regex::new(r"^ {1,2}(?:ip )?vrf(?: forwarding| member)? (\S+)").expect("Invalid Regex?");
    static ref MTU_RE: Regex = Regex::new(r"^ {1,2}(?:ip )?mtu (\S+)").expect("Invalid Regex?");
    static ref ACL_IN_RE: Regex =
        Regex::new(r"^ {1,2}(?:ipv4 |ip )?access-group (\S+) in$").expect("Invalid Regex?");
    static ref ACL_OUT_RE: Regex =
        Regex::new(r"^ {1,2}(?:ipv4 |ip )?access-group (\S+) out$").expect("Invalid Regex?");
}

/// Keyword opening an interface block.
pub const INTERFACE_KEYWORD: &str = "interface";

/// A recognised attribute line inside an interface block.
#[derive(Debug, PartialEq, Eq)]
pub enum Field<'a> {
    Description(&'a str),
    Encapsulation(&'a str),
    /// Address arguments, left for the normalizer.
    IpAddress(&'a str),
    Vrf(&'a str),
    Mtu(&'a str),
    AclIn(&'a str),
    AclOut(&'a str),
}

fn capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// `hostname <name>`
pub fn extract_hostname(line: &str) -> Option<&str> {
    capture(&HOSTNAME_RE, line)
}

/// First whitespace-delimited token after `interface `.
pub fn extract_interface_name(line: &str) -> Option<&str> {
    line.strip_prefix(INTERFACE_KEYWORD)
        .filter(|rest| rest.starts_with(' '))
        .and_then(|rest| rest.split_whitespace().next())
}

/// Classify an interface sub-command. The first matching shape wins, in
/// the order description, encapsulation, address, VRF, MTU, ACL in, ACL out.
pub fn extract_field(line: &str) -> Option<Field<'_>> {
    if let Some(v) = capture(&DESC_RE, line) {
        return Some(Field::Description(v));
    }
    if let Some(v) = capture(&ENCAP_RE, line) {
        return Some(Field::Encapsulation(v));
    }
    if let Some(v) = capture(&IP_RE, line) {
        return Some(Field::IpAddress(v));
    }
    if let Some(v) = capture(&VRF_RE, line) {
        return Some(Field::Vrf(v));
    }
    if let Some(v) = capture(&MTU_RE, line) {
        return Some(Field::Mtu(v));
    }
    if let Some(v) = capture(&ACL_IN_RE, line) {
        return Some(Field::AclIn(v));
    }
    capture(&ACL_OUT_RE, line).map(Field::AclOut)
}
