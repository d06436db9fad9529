//! Domain model: VLAN catalogue, port model, switch records.

pub mod ident;
pub mod port;
pub mod switch;
pub mod vlan;

pub use ident::FieldWarning;
pub use port::{Port, PortId, PortKind, PortSet, SnoopState, StpMode};
pub use switch::{BackupStatus, Credentials, SwitchId, SwitchRecord};
pub use vlan::{DEFAULT_MGMT_VLAN, VlanDefinition, VlanRegistry};
