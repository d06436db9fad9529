//! Command handlers and shared dispatch context.

pub mod generate;
pub mod ports;
pub mod switches;
pub mod vlans;

use std::path::PathBuf;

use portdeck_config::Config;
use portdeck_core::{AccessPolicy, Inventory, SwitchId, SwitchRecord, VlanRegistry};

use crate::cli::{Command, GlobalOpts, OutputFormat};
use crate::draft;
use crate::error::CliError;
use crate::output;

/// Everything a handler needs: resolved config, catalogue, draft path,
/// session policy, and presentation flags.
pub struct Ctx {
    pub config: Config,
    pub registry: VlanRegistry,
    pub inventory_path: PathBuf,
    pub policy: AccessPolicy,
    pub format: OutputFormat,
    pub quiet: bool,
    pub yes: bool,
    pub color: bool,
}

impl Ctx {
    pub fn build(global: &GlobalOpts) -> Result<Self, CliError> {
        let config = match &global.config {
            Some(path) => portdeck_config::load_from(path)?,
            None => portdeck_config::load_config_or_default(),
        };

        let policy = if global.read_only || config.read_only {
            AccessPolicy::ReadOnly
        } else {
            AccessPolicy::ReadWrite
        };

        let format = global
            .output
            .clone()
            .unwrap_or_else(|| parse_output(&config.defaults.output));

        let registry = portdeck_config::vlan_catalogue(&config);
        let inventory_path = draft::resolve_path(global.inventory.as_ref(), &config)?;

        Ok(Self {
            config,
            registry,
            inventory_path,
            policy,
            format,
            quiet: global.quiet,
            yes: global.yes,
            color: output::should_color(&global.color),
        })
    }

    pub fn load_inventory(&self) -> Result<Inventory, CliError> {
        draft::load(&self.inventory_path, self.policy)
    }

    pub fn save_inventory(&self, inventory: &Inventory) -> Result<(), CliError> {
        draft::save(&self.inventory_path, inventory)
    }
}

fn parse_output(value: &str) -> OutputFormat {
    match value {
        "json" => OutputFormat::Json,
        "json-compact" => OutputFormat::JsonCompact,
        "yaml" => OutputFormat::Yaml,
        "plain" => OutputFormat::Plain,
        _ => OutputFormat::Table,
    }
}

/// Resolve a user-supplied switch reference or fail with a not-found error.
pub fn resolve_switch<'a>(
    inventory: &'a Inventory,
    reference: &str,
) -> Result<&'a SwitchRecord, CliError> {
    inventory
        .resolve(reference)
        .ok_or_else(|| CliError::SwitchNotFound {
            reference: reference.to_string(),
        })
}

/// Same, but only the id (so the borrow ends before a mutation starts).
pub fn resolve_switch_id(inventory: &Inventory, reference: &str) -> Result<SwitchId, CliError> {
    resolve_switch(inventory, reference).map(|sw| sw.id)
}

pub fn dispatch(command: Command, ctx: &Ctx) -> Result<(), CliError> {
    match command {
        Command::Switch(cmd) => switches::handle(cmd, ctx),
        Command::Port(cmd) => ports::handle(cmd, ctx),
        Command::Vlan(cmd) => vlans::handle(cmd, ctx),
        Command::Generate(args) => generate::handle(&args, ctx),
        // Completions are handled in main before a Ctx exists.
        Command::Completions(_) => Ok(()),
    }
}
