// ── Port domain types ──
//
// A `Port` is one physical interface on a switch; a `PortSet` is the
// ordered collection of all interfaces on one switch. Insertion order is
// physical order and doubles as display and generation order — nothing in
// this module (or anywhere else) re-sorts it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::vlan::DEFAULT_MGMT_VLAN;

// ── Identity ────────────────────────────────────────────────────────

/// Stable per-switch port identifier. Assigned once at port-set creation,
/// never reused, never tied to the port's position in the sequence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PortId(pub u32);

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Policy enums ────────────────────────────────────────────────────

/// Switching role of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum PortKind {
    /// Single untagged VLAN; connects one end device.
    Access,
    /// Carries multiple tagged VLANs; uplink / inter-switch.
    Trunk,
}

/// DHCP snooping trust state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum SnoopState {
    Trust,
    Untrust,
}

/// Vendor-neutral spanning-tree edge mode. Each vendor profile maps these
/// to its own keyword at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum StpMode {
    FastConvergeEdge,
    AdminEdge,
    Disabled,
}

// ── Port ────────────────────────────────────────────────────────────

/// One physical interface.
///
/// `label` is the vendor-facing physical address (stack/slot/port). It
/// reflects wiring and is immutable after creation; the only write paths
/// into a port (`apply_update`) cannot touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub id: PortId,
    pub label: String,
    pub description: String,
    pub kind: PortKind,
    /// Access/native VLAN. Trunk ports only consult this as the native
    /// VLAN hint; membership comes from `tagged_vlans` (where a vendor
    /// profile reads it at all).
    pub untagged_vlan: u16,
    pub tagged_vlans: BTreeSet<u16>,
    pub snoop: SnoopState,
    pub stp: StpMode,
}

impl Port {
    fn with_defaults(id: PortId, label: String) -> Self {
        Self {
            id,
            label,
            description: String::new(),
            kind: PortKind::Access,
            untagged_vlan: DEFAULT_MGMT_VLAN,
            tagged_vlans: BTreeSet::new(),
            snoop: SnoopState::Trust,
            stp: StpMode::FastConvergeEdge,
        }
    }
}

// ── PortSet ─────────────────────────────────────────────────────────

/// Ordered sequence of the ports on one switch.
///
/// Created once at switch activation, fully initialized before it becomes
/// observable. Two physical banks: a copper bank labelled `1/0/{n}` and a
/// high-speed uplink bank labelled `2/0/{n}`, ids sequential across both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortSet {
    ports: Vec<Port>,
}

impl PortSet {
    /// Deterministically build a port set with `copper` copper ports and
    /// `uplink` uplink ports, all on the default policy (Access, untagged
    /// VLAN 503, Trust snooping, fast-converging edge STP).
    pub fn new(copper: u32, uplink: u32) -> Self {
        let mut ports = Vec::with_capacity((copper + uplink) as usize);
        let mut next_id = 1u32;

        for n in 1..=copper {
            ports.push(Port::with_defaults(PortId(next_id), format!("1/0/{n}")));
            next_id += 1;
        }
        for n in 1..=uplink {
            ports.push(Port::with_defaults(PortId(next_id), format!("2/0/{n}")));
            next_id += 1;
        }

        Self { ports }
    }

    /// The standard field chassis: 48 copper + 4 uplink.
    pub fn standard() -> Self {
        Self::new(48, 4)
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Iterate ports in physical order.
    pub fn iter(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter()
    }

    pub fn contains(&self, id: PortId) -> bool {
        self.ports.iter().any(|p| p.id == id)
    }

    pub fn get(&self, id: PortId) -> Option<&Port> {
        self.ports.iter().find(|p| p.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: PortId) -> Option<&mut Port> {
        self.ports.iter_mut().find(|p| p.id == id)
    }

    /// All port ids, in physical order.
    pub fn ids(&self) -> impl Iterator<Item = PortId> + '_ {
        self.ports.iter().map(|p| p.id)
    }
}
