//! Switch inventory command handlers.

use owo_colors::OwoColorize;
use tabled::Tabled;

use portdeck_core::{
    CreateSwitchRequest, MutationOutcome, ScanTarget, SwitchRecord, SwitchUpdate,
};

use crate::cli::{AddSwitchArgs, ScanArgs, ScanTargetArg, SwitchCommand, UpdateSwitchArgs};
use crate::error::CliError;
use crate::output;
use crate::scan;

use super::{Ctx, resolve_switch, resolve_switch_id};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct SwitchRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Mgmt IP")]
    management_ip: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Serial")]
    serial: String,
    #[tabled(rename = "Backup")]
    backup: String,
}

// Free function so the lifetime stays late-bound where `render_list`
// needs a higher-ranked `Fn(&T) -> R`.
fn to_row(sw: &&SwitchRecord) -> SwitchRow {
    SwitchRow {
        id: short_id(sw),
        name: sw.name.clone(),
        location: sw.location.clone(),
        management_ip: sw.management_ip.clone(),
        model: sw.hardware_model.clone(),
        serial: sw.serial_number.clone(),
        backup: sw.backup_status.to_string(),
    }
}

fn short_id(sw: &SwitchRecord) -> String {
    sw.id.to_string().chars().take(8).collect()
}

fn detail(sw: &SwitchRecord, color: bool) -> String {
    let warnings = sw.field_warnings();
    let flag = |field: portdeck_core::FieldWarning, value: &str| -> String {
        if warnings.contains(&field) {
            if color {
                format!("{value} {}", "(check format)".yellow())
            } else {
                format!("{value} (check format)")
            }
        } else {
            value.to_string()
        }
    };

    [
        format!("ID:        {}", sw.id),
        format!("Name:      {}", sw.name),
        format!("Location:  {}", sw.location),
        format!(
            "Mgmt IP:   {}",
            flag(portdeck_core::FieldWarning::ManagementIp, &sw.management_ip)
        ),
        format!(
            "2nd IP:    {}",
            flag(portdeck_core::FieldWarning::SecondaryIp, &sw.secondary_ip)
        ),
        format!(
            "MAC:       {}",
            flag(portdeck_core::FieldWarning::MacAddress, &sw.mac_address)
        ),
        format!("Model:     {}", sw.hardware_model),
        format!("Part no:   {}", sw.part_number),
        format!("Serial:    {}", sw.serial_number),
        format!("Firmware:  {}", sw.firmware_version),
        format!("Backup:    {}", sw.backup_status),
        format!("Ports:     {}", sw.ports.len()),
    ]
    .join("\n")
}

// ── Handlers ────────────────────────────────────────────────────────

pub fn handle(cmd: SwitchCommand, ctx: &Ctx) -> Result<(), CliError> {
    match cmd {
        SwitchCommand::List => list(ctx),
        SwitchCommand::Show { switch } => show(&switch, ctx),
        SwitchCommand::Add(args) => add(args, ctx),
        SwitchCommand::Clone { switch } => clone(&switch, ctx),
        SwitchCommand::Remove { switch } => remove(&switch, ctx),
        SwitchCommand::Update(args) => update(args, ctx),
        SwitchCommand::Scan(args) => scan_field(&args, ctx),
    }
}

fn list(ctx: &Ctx) -> Result<(), CliError> {
    let inventory = ctx.load_inventory()?;
    let switches: Vec<&SwitchRecord> = inventory.iter().collect();
    let rendered = output::render_list(&ctx.format, &switches, to_row, |sw| sw.id.to_string());
    output::print_output(&rendered, ctx.quiet);
    Ok(())
}

fn show(reference: &str, ctx: &Ctx) -> Result<(), CliError> {
    let inventory = ctx.load_inventory()?;
    let sw = resolve_switch(&inventory, reference)?;
    let rendered = output::render_single(
        &ctx.format,
        &sw,
        |sw| detail(sw, ctx.color),
        |sw| sw.id.to_string(),
    );
    output::print_output(&rendered, ctx.quiet);
    Ok(())
}

fn add(args: AddSwitchArgs, ctx: &Ctx) -> Result<(), CliError> {
    let mut inventory = ctx.load_inventory()?;
    let id = inventory
        .add(CreateSwitchRequest {
            name: args.name,
            location: args.location,
            management_ip: args.management_ip,
            hardware_model: args.model,
        })
        .ok_or_else(|| CliError::ReadOnly {
            action: "switch add".into(),
        })?;
    ctx.save_inventory(&inventory)?;
    output::print_output(&format!("added switch {id}"), ctx.quiet);
    Ok(())
}

fn clone(reference: &str, ctx: &Ctx) -> Result<(), CliError> {
    let mut inventory = ctx.load_inventory()?;
    let source = resolve_switch_id(&inventory, reference)?;
    let id = inventory
        .clone_switch(source)
        .ok_or_else(|| CliError::ReadOnly {
            action: "switch clone".into(),
        })?;
    ctx.save_inventory(&inventory)?;
    output::print_output(&format!("cloned to {id}"), ctx.quiet);
    Ok(())
}

fn remove(reference: &str, ctx: &Ctx) -> Result<(), CliError> {
    let mut inventory = ctx.load_inventory()?;
    let sw = resolve_switch(&inventory, reference)?;
    let (id, name) = (sw.id, sw.name.clone());

    if !ctx.yes {
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(format!("Remove switch '{name}' and its port draft?"))
            .default(false)
            .interact()
            .unwrap_or(false);
        if !confirmed {
            return Err(CliError::Aborted);
        }
    }

    match inventory.remove(id) {
        MutationOutcome::Applied => {
            ctx.save_inventory(&inventory)?;
            output::print_output(&format!("removed {name}"), ctx.quiet);
            Ok(())
        }
        MutationOutcome::Denied => Err(CliError::ReadOnly {
            action: "switch remove".into(),
        }),
        MutationOutcome::UnknownTarget => Err(CliError::SwitchNotFound {
            reference: reference.to_string(),
        }),
    }
}

fn update(args: UpdateSwitchArgs, ctx: &Ctx) -> Result<(), CliError> {
    let mut inventory = ctx.load_inventory()?;
    let id = resolve_switch_id(&inventory, &args.switch)?;

    let update = SwitchUpdate {
        name: args.name,
        location: args.location,
        management_ip: args.management_ip,
        secondary_ip: args.secondary_ip,
        mac_address: args.mac,
        username: args.username,
        password: args.password,
        hardware_model: args.model,
        part_number: args.part_number,
        serial_number: args.serial,
        firmware_version: args.firmware,
        backup_status: None,
    };

    match inventory.update_switch(id, &update) {
        MutationOutcome::Applied => {
            ctx.save_inventory(&inventory)?;

            // Advisory only: warn about shapes, keep the values.
            if let Some(sw) = inventory.get(id) {
                for warning in sw.field_warnings() {
                    tracing::warn!(switch = %id, field = %warning, "stored value has an unusual shape");
                }
            }
            output::print_output("updated", ctx.quiet);
            Ok(())
        }
        MutationOutcome::Denied => Err(CliError::ReadOnly {
            action: "switch update".into(),
        }),
        MutationOutcome::UnknownTarget => Err(CliError::SwitchNotFound {
            reference: args.switch,
        }),
    }
}

fn scan_field(args: &ScanArgs, ctx: &Ctx) -> Result<(), CliError> {
    let mut inventory = ctx.load_inventory()?;
    let id = resolve_switch_id(&inventory, &args.switch)?;

    let value = scan::capture(args.target);
    let target = match args.target {
        ScanTargetArg::Mac => ScanTarget::MacAddress,
        ScanTargetArg::Serial => ScanTarget::SerialNumber,
    };

    match inventory.record_scan(id, target, value.clone()) {
        MutationOutcome::Applied => {
            ctx.save_inventory(&inventory)?;
            output::print_output(&format!("captured {value}"), ctx.quiet);
            Ok(())
        }
        MutationOutcome::Denied => Err(CliError::ReadOnly {
            action: "switch scan".into(),
        }),
        MutationOutcome::UnknownTarget => Err(CliError::SwitchNotFound {
            reference: args.switch.clone(),
        }),
    }
}
