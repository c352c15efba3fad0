//! CSV output for parsed interfaces.

use crate::device::Device;
use crate::error::OutputError;
use std::io::Write;

/// Write one header row of field names, then one row per interface in
/// ascending name order.
pub fn write_csv<W: Write>(device: &mut Device<'_>, writer: W) -> Result<(), OutputError> {
    let headers = device.field_names()?;
    let mut cw = csv::Writer::from_writer(writer);
    cw.write_record(headers)?;

    let interfaces = device.interfaces()?;
    for record in interfaces.values() {
        cw.write_record(record.values())?;
    }
    cw.flush().map_err(|e| {
        log::error!("Unable to write csv data because of: {e}");
        e
    })?;
    log::info!("Writing CSV data done, {} rows", interfaces.len());
    Ok(())
}
