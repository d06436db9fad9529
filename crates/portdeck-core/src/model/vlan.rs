// ── VLAN catalogue ──
//
// Read-only registry of known VLAN ids. Built once at startup and shared
// by reference; a lookup miss is an expected condition (technicians enter
// VLAN ids ahead of catalogue updates) and callers fall back to a neutral
// rendering of the raw id.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The VLAN every freshly initialized port lands on.
pub const DEFAULT_MGMT_VLAN: u16 = 503;

/// One catalogue entry. `color` is an opaque display tag (hex string)
/// consumed by renderers; the core never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VlanDefinition {
    pub id: u16,
    pub name: String,
    pub color: String,
}

impl VlanDefinition {
    pub fn new(id: u16, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Immutable VLAN catalogue, keyed by id.
///
/// No mutation API by design: the registry is process-wide read-only state
/// initialized once (from config or the built-in catalogue).
#[derive(Debug, Clone, Default)]
pub struct VlanRegistry {
    by_id: BTreeMap<u16, VlanDefinition>,
}

impl VlanRegistry {
    /// Build a registry from a list of definitions. Duplicate ids keep the
    /// first occurrence; ids outside 1–4094 are discarded.
    pub fn new(defs: impl IntoIterator<Item = VlanDefinition>) -> Self {
        let mut by_id = BTreeMap::new();
        for def in defs {
            if !(1..=4094).contains(&def.id) {
                tracing::warn!(vlan = def.id, "discarding out-of-range VLAN definition");
                continue;
            }
            by_id.entry(def.id).or_insert(def);
        }
        Self { by_id }
    }

    /// The compiled-in catalogue used when no operator catalogue is configured.
    pub fn builtin() -> Self {
        Self::new([
            VlanDefinition::new(500, "Voice", "#8b5cf6"),
            VlanDefinition::new(501, "Data", "#3b82f6"),
            VlanDefinition::new(502, "Guest", "#f59e0b"),
            VlanDefinition::new(503, "Management", "#10b981"),
            VlanDefinition::new(504, "Cameras", "#ef4444"),
            VlanDefinition::new(999, "Quarantine", "#6b7280"),
        ])
    }

    /// Look up a VLAN by id. `None` is benign — render the raw id instead.
    pub fn lookup(&self, id: u16) -> Option<&VlanDefinition> {
        self.by_id.get(&id)
    }

    /// Display name for an id, falling back to a neutral marker.
    pub fn name_for(&self, id: u16) -> &str {
        self.lookup(id).map_or("unknown", |def| def.name.as_str())
    }

    /// Iterate definitions in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &VlanDefinition> {
        self.by_id.values()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
