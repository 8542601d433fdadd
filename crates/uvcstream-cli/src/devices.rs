// SPDX-License-Identifier: Apache-2.0

//! UVC device enumeration with descriptor details.

use crate::error::CliError;
use clap::Args as ClapArgs;
use serde::Serialize;
use uvcstream::context::Context;

#[derive(ClapArgs, Debug)]
pub struct Args {
    /// Show USB bus numbers and device addresses
    #[arg(short, long)]
    bus: bool,
}

#[derive(Debug, Serialize)]
struct DeviceInfo {
    index: usize,
    vendor_id: String,
    product_id: String,
    bcd_uvc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bus: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<u8>,
}

pub fn execute(args: Args, json: bool) -> Result<(), CliError> {
    log::debug!("Executing devices command: {:?}", args);

    let mut context = Context::new()?;
    let list = context.list_devices()?;

    let mut rows = Vec::with_capacity(list.len());
    for (index, mut device) in list.iter().enumerate() {
        let descriptor = device.descriptor()?.clone();
        let (bus, address) = if args.bus {
            (Some(device.bus_number()?), Some(device.device_address()?))
        } else {
            (None, None)
        };
        device.free_descriptor();

        rows.push(DeviceInfo {
            index,
            vendor_id: format!("{:04x}", descriptor.vendor_id),
            product_id: format!("{:04x}", descriptor.product_id),
            bcd_uvc: format!("{:04x}", descriptor.bcd_uvc),
            manufacturer: descriptor.manufacturer,
            product: descriptor.product,
            serial_number: descriptor.serial_number,
            bus,
            address,
        });
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).map_err(|e| CliError::General(e.to_string()))?
        );
        return Ok(());
    }

    if rows.is_empty() {
        println!("No UVC devices found");
        return Ok(());
    }

    for row in &rows {
        println!(
            "[{}] {}:{} {}",
            row.index,
            row.vendor_id,
            row.product_id,
            row.product.as_deref().unwrap_or("<unnamed>")
        );
        if let Some(manufacturer) = &row.manufacturer {
            println!("    manufacturer: {}", manufacturer);
        }
        if let Some(serial) = &row.serial_number {
            println!("    serial: {}", serial);
        }
        println!("    uvc: {}", row.bcd_uvc);
        if let (Some(bus), Some(address)) = (row.bus, row.address) {
            println!("    bus {} address {}", bus, address);
        }
    }
    println!("{} device(s) found", rows.len());

    Ok(())
}
