// SPDX-License-Identifier: Apache-2.0

//! Shared helpers for device targeting across subcommands.

use crate::error::CliError;
use clap::Args as ClapArgs;
use uvcstream::{context::Context, device::Device};

/// Device selection filters shared by the `controls` and `capture` commands.
/// An unset filter matches any device.
#[derive(ClapArgs, Debug, Clone)]
pub struct Target {
    /// USB vendor id to match (hexadecimal, e.g. 046d); 0 matches any
    #[arg(long, value_parser = parse_usb_id, default_value = "0")]
    pub vendor_id: i32,

    /// USB product id to match (hexadecimal, e.g. 0825); 0 matches any
    #[arg(long, value_parser = parse_usb_id, default_value = "0")]
    pub product_id: i32,

    /// USB serial number to match
    #[arg(long)]
    pub serial: Option<String>,
}

pub fn parse_usb_id(s: &str) -> Result<i32, String> {
    let trimmed = s.trim_start_matches("0x");
    u16::from_str_radix(trimmed, 16)
        .map(i32::from)
        .map_err(|_| format!("'{}' is not a hexadecimal USB id", s))
}

/// Finds the first device matching the target filters.
pub fn find_target(context: &Context, target: &Target) -> Result<Device, CliError> {
    context
        .find_device(
            target.vendor_id,
            target.product_id,
            target.serial.as_deref(),
        )
        .map_err(CliError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_ids() {
        assert_eq!(parse_usb_id("046d").unwrap(), 0x046d);
        assert_eq!(parse_usb_id("0x0825").unwrap(), 0x0825);
        assert_eq!(parse_usb_id("0").unwrap(), 0);
        assert!(parse_usb_id("zzzz").is_err());
        assert!(parse_usb_id("12345").is_err());
    }
}
