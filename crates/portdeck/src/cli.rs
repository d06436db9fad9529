//! Clap derive structures for the `portdeck` CLI.
//!
//! Defines the complete command tree, global flags, and shared value enums.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use portdeck_core::{PortKind, SnoopState, StpMode, VendorProfile};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// portdeck -- provisioning console for field switch deployments
#[derive(Debug, Parser)]
#[command(
    name = "portdeck",
    version,
    about = "Draft switch port/VLAN configuration and generate vendor scripts",
    long_about = "A provisioning console for field technicians.\n\n\
        Maintains a local inventory draft of switches and their port/VLAN\n\
        policy, and renders it into vendor-specific configuration scripts\n\
        (HPE ProCurve, Cisco IOS, Brocade FastIron, MikroTik RouterOS).",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file path (defaults to the platform config dir)
    #[arg(long, env = "PORTDECK_CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Inventory draft path (overrides config)
    #[arg(long, short = 'i', env = "PORTDECK_INVENTORY", global = true)]
    pub inventory: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'o', env = "PORTDECK_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Open the session read-only (every mutation becomes a no-op)
    #[arg(long, env = "PORTDECK_READ_ONLY", global = true)]
    pub read_only: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

// ── Command Tree ─────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage switch inventory records
    #[command(subcommand)]
    Switch(SwitchCommand),

    /// Inspect and edit ports on a switch
    #[command(subcommand)]
    Port(PortCommand),

    /// Show the site VLAN catalogue
    #[command(subcommand)]
    Vlan(VlanCommand),

    /// Render a vendor configuration script for a switch
    Generate(GenerateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Switch ───────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum SwitchCommand {
    /// List all switches in the draft
    List,

    /// Show one switch in detail
    Show {
        /// Switch id, id prefix, or exact name
        switch: String,
    },

    /// Add a new switch with a freshly initialized port set
    Add(AddSwitchArgs),

    /// Clone a switch (identity fields cleared on the copy)
    Clone {
        switch: String,
    },

    /// Remove a switch from the draft
    Remove {
        switch: String,
    },

    /// Update fields on a switch record
    Update(UpdateSwitchArgs),

    /// Capture a serial number or MAC with the handheld scanner
    Scan(ScanArgs),
}

#[derive(Debug, Args)]
pub struct AddSwitchArgs {
    /// Display name for the new switch
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub management_ip: Option<String>,

    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Debug, Args)]
pub struct UpdateSwitchArgs {
    pub switch: String,

    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    /// Stored verbatim; shape problems are flagged, never rejected
    #[arg(long)]
    pub management_ip: Option<String>,
    #[arg(long)]
    pub secondary_ip: Option<String>,
    #[arg(long)]
    pub mac: Option<String>,
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub model: Option<String>,
    #[arg(long)]
    pub part_number: Option<String>,
    #[arg(long)]
    pub serial: Option<String>,
    #[arg(long)]
    pub firmware: Option<String>,
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    pub switch: String,

    /// Which field the scanned value lands in
    #[arg(long, value_enum)]
    pub target: ScanTargetArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScanTargetArg {
    Mac,
    Serial,
}

// ── Port ─────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum PortCommand {
    /// List all ports on a switch in physical order
    List {
        switch: String,
    },

    /// Edit one port
    Set(SetPortArgs),

    /// Apply one edit to a selection of ports
    Bulk(BulkPortArgs),
}

#[derive(Debug, Args)]
pub struct SetPortArgs {
    pub switch: String,

    /// Port id (see `port list`)
    pub port: u32,

    #[command(flatten)]
    pub fields: PortFieldArgs,
}

#[derive(Debug, Args)]
pub struct BulkPortArgs {
    pub switch: String,

    /// Comma-separated port ids (e.g. `--ports 1,2,3`)
    #[arg(long, value_delimiter = ',', conflicts_with = "all")]
    pub ports: Vec<u32>,

    /// Select every port on the switch
    #[arg(long)]
    pub all: bool,

    #[command(flatten)]
    pub fields: PortFieldArgs,
}

/// Field flags shared by `port set` and `port bulk`; each maps onto one
/// optional field of the core `PortUpdate`.
#[derive(Debug, Args)]
pub struct PortFieldArgs {
    /// Free-text port description
    #[arg(long)]
    pub description: Option<String>,

    /// Switching role
    #[arg(long, value_enum)]
    pub mode: Option<PortModeArg>,

    /// Access/native VLAN id
    #[arg(long)]
    pub untagged: Option<u16>,

    /// Comma-separated tagged VLAN ids (trunk ports)
    #[arg(long, value_delimiter = ',')]
    pub tagged: Option<Vec<u16>>,

    /// DHCP snooping trust state
    #[arg(long, value_enum)]
    pub snoop: Option<SnoopArg>,

    /// Spanning-tree edge mode
    #[arg(long, value_enum)]
    pub stp: Option<StpArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PortModeArg {
    Access,
    Trunk,
}

impl From<PortModeArg> for PortKind {
    fn from(arg: PortModeArg) -> Self {
        match arg {
            PortModeArg::Access => Self::Access,
            PortModeArg::Trunk => Self::Trunk,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SnoopArg {
    Trust,
    Untrust,
}

impl From<SnoopArg> for SnoopState {
    fn from(arg: SnoopArg) -> Self {
        match arg {
            SnoopArg::Trust => Self::Trust,
            SnoopArg::Untrust => Self::Untrust,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StpArg {
    /// Fast-converging edge port
    Fast,
    /// Administrative edge port
    Admin,
    /// Spanning tree disabled on the port
    Off,
}

impl From<StpArg> for StpMode {
    fn from(arg: StpArg) -> Self {
        match arg {
            StpArg::Fast => Self::FastConvergeEdge,
            StpArg::Admin => Self::AdminEdge,
            StpArg::Off => Self::Disabled,
        }
    }
}

// ── Vlan ─────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum VlanCommand {
    /// List the catalogue in id order
    List,
}

// ── Generate ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Switch id, id prefix, or exact name
    pub switch: String,

    /// Vendor dialect (falls back to `default_vendor` in config)
    #[arg(long, value_enum)]
    pub vendor: Option<VendorArg>,

    /// Write the script to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum VendorArg {
    Hpe,
    Cisco,
    Brocade,
    Mikrotik,
}

impl From<VendorArg> for VendorProfile {
    fn from(arg: VendorArg) -> Self {
        match arg {
            VendorArg::Hpe => Self::Hpe,
            VendorArg::Cisco => Self::Cisco,
            VendorArg::Brocade => Self::Brocade,
            VendorArg::Mikrotik => Self::Mikrotik,
        }
    }
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
