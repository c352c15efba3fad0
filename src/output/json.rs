//! JSON output for a whole device.

use crate::device::Device;
use crate::error::OutputError;
use std::io::Write;

/// Write the device, pretty printed.
pub fn write_json<W: Write>(
    device: &mut Device<'_>,
    mut writer: W,
) -> Result<(), OutputError> {
    // parse before serializing; the derive only sees cached state
    device.interface_count()?;
    serde_json::to_writer_pretty(&mut writer, &*device)?;
    writer.flush()?;
    log::info!("Writing JSON data done");
    Ok(())
}
