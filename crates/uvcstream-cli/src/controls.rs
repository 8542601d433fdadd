// SPDX-License-Identifier: Apache-2.0

//! Hardware control inspection and modification.

use crate::{
    error::CliError,
    utils::{find_target, Target},
};
use clap::Args as ClapArgs;
use serde::Serialize;
use uvcstream::{catalog::ValueDomain, context::Context};

#[derive(ClapArgs, Debug)]
pub struct Args {
    #[command(flatten)]
    target: Target,

    /// Apply every control's default value before listing
    #[arg(long)]
    defaults: bool,

    /// Control to set, by display name (requires --value)
    #[arg(long, requires = "value")]
    set: Option<String>,

    /// Value to write to the control named by --set
    #[arg(long, requires = "set")]
    value: Option<i64>,
}

#[derive(Debug, Serialize)]
struct ControlInfo {
    name: String,
    unit_id: u8,
    selector: u8,
    kind: &'static str,
    value: i64,
    min: i64,
    max: i64,
    step: i64,
    default: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    menu: Option<Vec<String>>,
}

pub fn execute(args: Args, json: bool) -> Result<(), CliError> {
    log::debug!("Executing controls command: {:?}", args);

    let context = Context::new()?;
    let mut device = find_target(&context, &args.target)?;
    device.open()?;

    if args.defaults {
        device.set_control_defaults();
        log::info!("applied control defaults");
    }

    if let (Some(name), Some(value)) = (args.set.as_deref(), args.value) {
        if device.set_control(name, value) {
            log::info!("set '{}' to {}", name, value);
        } else {
            // set_control already logged the reason
            device.close();
            return Err(CliError::General(format!(
                "could not set '{}' to {}",
                name, value
            )));
        }
    }

    let names: Vec<String> = device
        .controls()
        .map(|control| control.name().to_string())
        .collect();

    let mut rows = Vec::with_capacity(names.len());
    for name in names {
        // Read-disabled controls keep their bind-time value.
        let value = match device.get_control(&name) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("could not read '{}': {}", name, err);
                match device.control(&name) {
                    Some(control) => control.cached_value(),
                    None => continue,
                }
            }
        };
        let Some(control) = device.control(&name) else {
            continue;
        };
        let (kind, menu) = match control.domain() {
            ValueDomain::Boolean => ("boolean", None),
            ValueDomain::Integer => ("integer", None),
            ValueDomain::Menu(entries) => (
                "menu",
                Some(
                    entries
                        .iter()
                        .map(|(label, code)| format!("{}={}", label, code))
                        .collect(),
                ),
            ),
        };
        rows.push(ControlInfo {
            name,
            unit_id: control.unit_id(),
            selector: control.selector(),
            kind,
            value,
            min: control.min(),
            max: control.max(),
            step: control.step(),
            default: control.default(),
            menu,
        });
    }

    device.close();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).map_err(|e| CliError::General(e.to_string()))?
        );
        return Ok(());
    }

    if rows.is_empty() {
        println!("No controls discovered");
        return Ok(());
    }

    for row in &rows {
        println!(
            "{} [{}] unit {} selector 0x{:02x}",
            row.name, row.kind, row.unit_id, row.selector
        );
        println!(
            "    value {}  min {}  max {}  step {}  default {}",
            row.value, row.min, row.max, row.step, row.default
        );
        if let Some(menu) = &row.menu {
            println!("    options: {}", menu.join(", "));
        }
    }
    println!("{} control(s) discovered", rows.len());

    Ok(())
}
