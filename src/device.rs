//! Device aggregate.
//!
//! A [`Device`] owns the configuration source and the result of parsing it.
//! Parsing happens once, on the first read accessor, and the source is
//! consumed in the process. A `Device` is not meant to be shared between
//! threads while it is being parsed.

use crate::error::{DeviceError, DeviceResult};
use crate::models::{InterfaceRecord, Ipv4, Platform, SubnetEntry, SubnetIndex};
use crate::parser::{parse_config, Diagnostics, LogDiagnostics};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{BufRead, BufReader, Read};

/// Parsed view of one device configuration.
///
/// `'a` is the lifetime of the source reader; owned readers such as a
/// [`std::fs::File`] give a `Device<'static>`.
#[derive(Serialize)]
pub struct Device<'a> {
    #[serde(skip)]
    source: Option<Box<dyn BufRead + 'a>>,
    #[serde(skip)]
    parsed: bool,
    #[serde(rename = "Hostname")]
    hostname: Option<String>,
    #[serde(rename = "Platform")]
    platform: Platform,
    #[serde(rename = "Interfaces")]
    interfaces: BTreeMap<String, InterfaceRecord>,
    #[serde(rename = "Subnets")]
    subnets: SubnetIndex,
}

impl std::fmt::Debug for Device<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Device")
            .field("parsed", &self.parsed)
            .field("hostname", &self.hostname)
            .field("platform", &self.platform)
            .field("interfaces", &self.interfaces.len())
            .field("subnets", &self.subnets.len())
            .finish()
    }
}

impl<'a> Device<'a> {
    /// Create an unparsed device reading from `source`.
    ///
    /// `platform` must be `"ios"` or `"nxos"`, anything else fails with
    /// [`DeviceError::PlatformUnknown`].
    pub fn new<R: Read + 'a>(source: R, platform: &str) -> DeviceResult<Device<'a>> {
        let platform: Platform = platform.parse()?;
        Ok(Device::with_platform(source, platform))
    }

    pub fn with_platform<R: Read + 'a>(source: R, platform: Platform) -> Device<'a> {
        Device {
            source: Some(Box::new(BufReader::new(source))),
            parsed: false,
            hostname: None,
            platform,
            interfaces: BTreeMap::new(),
            subnets: SubnetIndex::new(),
        }
    }

    /// Parse the source, reporting through `diagnostics`.
    ///
    /// Does nothing when the device is already parsed. A failed parse leaves
    /// the device empty; the source is gone by then, so any later call fails
    /// with [`DeviceError::SourceConsumed`].
    pub fn parse(&mut self, diagnostics: &mut dyn Diagnostics) -> DeviceResult<()> {
        if self.parsed {
            return Ok(());
        }
        let source = self.source.take().ok_or(DeviceError::SourceConsumed)?;
        log::info!("parsing {} configuration", self.platform);

        let config = parse_config(source, self.platform, diagnostics)?;
        self.hostname = config.hostname;
        self.interfaces = config.interfaces;
        self.subnets = config.subnets;
        self.parsed = true;
        Ok(())
    }

    fn ensure_parsed(&mut self) -> DeviceResult<()> {
        if self.parsed {
            return Ok(());
        }
        self.parse(&mut LogDiagnostics)
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    pub fn hostname(&mut self) -> DeviceResult<Option<&str>> {
        self.ensure_parsed()?;
        Ok(self.hostname.as_deref())
    }

    /// Interface names in ascending order.
    pub fn interface_names(&mut self) -> DeviceResult<Vec<&str>> {
        self.ensure_parsed()?;
        Ok(self.interfaces.keys().map(String::as_str).collect())
    }

    /// Names of the interface record fields, in output order.
    pub fn field_names(&mut self) -> DeviceResult<&'static [&'static str]> {
        self.ensure_parsed()?;
        Ok(&InterfaceRecord::FIELDS)
    }

    pub fn interfaces(&mut self) -> DeviceResult<&BTreeMap<String, InterfaceRecord>> {
        self.ensure_parsed()?;
        Ok(&self.interfaces)
    }

    pub fn interface(&mut self, name: &str) -> DeviceResult<Option<&InterfaceRecord>> {
        self.ensure_parsed()?;
        Ok(self.interfaces.get(name))
    }

    pub fn interface_count(&mut self) -> DeviceResult<usize> {
        self.ensure_parsed()?;
        Ok(self.interfaces.len())
    }

    pub fn subnets(&mut self) -> DeviceResult<&SubnetIndex> {
        self.ensure_parsed()?;
        Ok(&self.subnets)
    }

    /// Interfaces whose address falls into `subnet`.
    pub fn subnet(&mut self, subnet: &Ipv4) -> DeviceResult<Option<&[SubnetEntry]>> {
        self.ensure_parsed()?;
        Ok(self.subnets.get(&subnet.network()))
    }

    /// Subnets configured on more than one interface.
    pub fn subnets_shared(&mut self) -> DeviceResult<Vec<(&Ipv4, &[SubnetEntry])>> {
        self.ensure_parsed()?;
        Ok(self.subnets.shared().collect())
    }
}
