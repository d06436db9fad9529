//! Switch port configuration model and multi-vendor script generation.
//!
//! This crate is the engine behind the portdeck provisioning console:
//!
//! - **Domain model** ([`model`]) — the read-only VLAN catalogue
//!   ([`VlanRegistry`]), per-interface [`Port`] records grouped into an
//!   ordered [`PortSet`], and [`SwitchRecord`] inventory entries that each
//!   own exactly one port set.
//!
//! - **[`Selection`]** — explicit set of selected port ids, passed by value
//!   into the bulk-edit path so the engine is testable without a UI.
//!
//! - **Typed mutations** ([`command`]) — partial-update request structs
//!   routed through [`Inventory`], which owns the [`AccessPolicy`] gate.
//!   Draft edits never fail: rejected or mistargeted writes come back as a
//!   [`MutationOutcome`], not an error.
//!
//! - **Script generation** ([`render`]) — pure, deterministic rendering of
//!   a switch's port model into one of four vendor CLI dialects. The
//!   timestamp in the header is the only permitted non-determinism.
//!
//! Everything here is synchronous and single-threaded: each operation
//! completes before the next begins, and a port is always replaced as a
//! whole value, so callers never observe partial state.

pub mod command;
pub mod model;
pub mod policy;
pub mod render;
pub mod selection;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use command::{CreateSwitchRequest, PortUpdate, ScanTarget, SwitchUpdate};
pub use policy::{AccessPolicy, MutationOutcome};
pub use render::{VendorProfile, generate, render_script};
pub use selection::Selection;
pub use store::Inventory;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    BackupStatus, Credentials, FieldWarning, Port, PortId, PortKind, PortSet, SnoopState,
    StpMode, SwitchId, SwitchRecord, VlanDefinition, VlanRegistry, DEFAULT_MGMT_VLAN,
};
