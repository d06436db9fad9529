//! Port table and edit command handlers.

use tabled::Tabled;

use portdeck_core::{MutationOutcome, Port, PortId, PortUpdate, Selection};

use crate::cli::{BulkPortArgs, PortCommand, PortFieldArgs, SetPortArgs};
use crate::error::CliError;
use crate::output;

use super::{Ctx, resolve_switch, resolve_switch_id};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct PortRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Port")]
    label: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Mode")]
    mode: String,
    #[tabled(rename = "Untagged")]
    untagged: String,
    #[tabled(rename = "Tagged")]
    tagged: String,
    #[tabled(rename = "Snooping")]
    snoop: String,
    #[tabled(rename = "STP")]
    stp: String,
}

fn to_row(port: &&Port, ctx: &Ctx) -> PortRow {
    PortRow {
        id: port.id.0,
        label: port.label.clone(),
        description: port.description.clone(),
        mode: port.kind.to_string(),
        untagged: format!(
            "{} ({})",
            port.untagged_vlan,
            ctx.registry.name_for(port.untagged_vlan)
        ),
        tagged: port
            .tagged_vlans
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(","),
        snoop: port.snoop.to_string(),
        stp: port.stp.to_string(),
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub fn handle(cmd: PortCommand, ctx: &Ctx) -> Result<(), CliError> {
    match cmd {
        PortCommand::List { switch } => list(&switch, ctx),
        PortCommand::Set(args) => set(args, ctx),
        PortCommand::Bulk(args) => bulk(args, ctx),
    }
}

fn list(reference: &str, ctx: &Ctx) -> Result<(), CliError> {
    let inventory = ctx.load_inventory()?;
    let sw = resolve_switch(&inventory, reference)?;

    let ports: Vec<&Port> = sw.ports.iter().collect();
    let rendered = output::render_list(
        &ctx.format,
        &ports,
        |port| to_row(port, ctx),
        |port| port.id.to_string(),
    );
    output::print_output(&rendered, ctx.quiet);
    Ok(())
}

fn set(args: SetPortArgs, ctx: &Ctx) -> Result<(), CliError> {
    let update = to_update(&args.fields)?;

    let mut inventory = ctx.load_inventory()?;
    let id = resolve_switch_id(&inventory, &args.switch)?;

    match inventory.update_port(id, PortId(args.port), &update) {
        MutationOutcome::Applied => {
            ctx.save_inventory(&inventory)?;
            output::print_output(&format!("updated port {}", args.port), ctx.quiet);
            Ok(())
        }
        MutationOutcome::Denied => Err(CliError::ReadOnly {
            action: "port set".into(),
        }),
        // The switch resolved above, so the missing target is the port.
        MutationOutcome::UnknownTarget => Err(CliError::PortNotFound {
            reference: args.switch,
            port: args.port,
        }),
    }
}

fn bulk(args: BulkPortArgs, ctx: &Ctx) -> Result<(), CliError> {
    let update = to_update(&args.fields)?;
    if !args.all && args.ports.is_empty() {
        return Err(CliError::Usage {
            message: "pass --ports 1,2,3 or --all to choose a selection".into(),
        });
    }

    let mut inventory = ctx.load_inventory()?;
    let id = resolve_switch_id(&inventory, &args.switch)?;

    // Selection construction mirrors the console UI: unknown ids are
    // silently skipped, select-all uses the combined affordance.
    let selection = {
        let Some(sw) = inventory.get(id) else {
            return Err(CliError::SwitchNotFound {
                reference: args.switch,
            });
        };
        let mut selection = Selection::new();
        if args.all {
            selection.toggle_all(&sw.ports);
        } else {
            for port in &args.ports {
                selection.toggle(&sw.ports, PortId(*port));
            }
        }
        selection
    };

    match inventory.apply_bulk(id, &selection, &update) {
        MutationOutcome::Applied => {
            ctx.save_inventory(&inventory)?;
            output::print_output(
                &format!("updated {} port(s)", selection.len()),
                ctx.quiet,
            );
            Ok(())
        }
        MutationOutcome::Denied => Err(CliError::ReadOnly {
            action: "port bulk".into(),
        }),
        MutationOutcome::UnknownTarget => Err(CliError::SwitchNotFound {
            reference: args.switch,
        }),
    }
}

/// Translate field flags into a core `PortUpdate`. An edit with no flags
/// is a usage error — there is nothing to apply.
fn to_update(fields: &PortFieldArgs) -> Result<PortUpdate, CliError> {
    let update = PortUpdate {
        description: fields.description.clone(),
        kind: fields.mode.map(Into::into),
        untagged_vlan: fields.untagged,
        tagged_vlans: fields
            .tagged
            .as_ref()
            .map(|ids| ids.iter().copied().collect()),
        snoop: fields.snoop.map(Into::into),
        stp: fields.stp.map(Into::into),
    };
    if update.is_empty() {
        return Err(CliError::Usage {
            message: "no port fields given; pass at least one of \
                      --description/--mode/--untagged/--tagged/--snoop/--stp"
                .into(),
        });
    }
    Ok(update)
}
