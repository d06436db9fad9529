//! VLAN catalogue display.

use tabled::Tabled;

use portdeck_core::VlanDefinition;

use crate::cli::VlanCommand;
use crate::error::CliError;
use crate::output;

use super::Ctx;

#[derive(Tabled)]
struct VlanRow {
    #[tabled(rename = "VLAN")]
    id: u16,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Color")]
    color: String,
}

// Free function so the lifetime stays late-bound where `render_list`
// needs a higher-ranked `Fn(&T) -> R`.
fn to_row(def: &VlanDefinition) -> VlanRow {
    VlanRow {
        id: def.id,
        name: def.name.clone(),
        color: def.color.clone(),
    }
}

pub fn handle(cmd: VlanCommand, ctx: &Ctx) -> Result<(), CliError> {
    match cmd {
        VlanCommand::List => list(ctx),
    }
}

fn list(ctx: &Ctx) -> Result<(), CliError> {
    let vlans: Vec<VlanDefinition> = ctx.registry.iter().cloned().collect();
    let rendered = output::render_list(&ctx.format, &vlans, to_row, |def| def.id.to_string());
    output::print_output(&rendered, ctx.quiet);
    Ok(())
}
