// ── Typed request structs for inventory mutations ──

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::{Port, PortKind, SnoopState, StpMode};

// ── Ports ──────────────────────────────────────────────────────────

/// Partial update applied to one port or to every port in a selection.
///
/// `id` and `label` have no fields here: identity and physical address are
/// not editable, so the "bulk update never mutates id/label" rule holds by
/// construction rather than by runtime filtering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<PortKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub untagged_vlan: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagged_vlans: Option<BTreeSet<u16>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snoop: Option<SnoopState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stp: Option<StpMode>,
}

impl PortUpdate {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.kind.is_none()
            && self.untagged_vlan.is_none()
            && self.tagged_vlans.is_none()
            && self.snoop.is_none()
            && self.stp.is_none()
    }

    /// Build the post-update port value. The store swaps the whole port in
    /// one step so no reader ever observes a half-updated record.
    pub(crate) fn merged_into(&self, port: &Port) -> Port {
        Port {
            id: port.id,
            label: port.label.clone(),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| port.description.clone()),
            kind: self.kind.unwrap_or(port.kind),
            untagged_vlan: self.untagged_vlan.unwrap_or(port.untagged_vlan),
            tagged_vlans: self
                .tagged_vlans
                .clone()
                .unwrap_or_else(|| port.tagged_vlans.clone()),
            snoop: self.snoop.unwrap_or(port.snoop),
            stp: self.stp.unwrap_or(port.stp),
        }
    }
}

// ── Switches ───────────────────────────────────────────────────────

/// Fields for a brand-new switch record. Everything beyond the name is
/// optional; the port set is always freshly initialized by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSwitchRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_model: Option<String>,
}

/// Partial update for a switch record. Addressing values are accepted
/// verbatim — shape problems are flagged at render time, never rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwitchUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firmware_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_status: Option<crate::model::BackupStatus>,
}

/// Destination field for a scanned value. The scanner hands the core an
/// opaque string; no format is enforced on either target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum ScanTarget {
    MacAddress,
    SerialNumber,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::PortSet;

    #[test]
    fn merge_keeps_identity_and_unset_fields() {
        let set = PortSet::new(1, 0);
        let port = set.iter().next().unwrap();

        let update = PortUpdate {
            untagged_vlan: Some(501),
            ..PortUpdate::default()
        };
        let merged = update.merged_into(port);

        assert_eq!(merged.id, port.id);
        assert_eq!(merged.label, port.label);
        assert_eq!(merged.untagged_vlan, 501);
        assert_eq!(merged.kind, port.kind);
        assert_eq!(merged.snoop, port.snoop);
        assert_eq!(merged.stp, port.stp);
    }

    #[test]
    fn merge_is_idempotent() {
        let set = PortSet::new(1, 0);
        let port = set.iter().next().unwrap();

        let update = PortUpdate {
            description: Some("camera drop".into()),
            kind: Some(PortKind::Trunk),
            tagged_vlans: Some(BTreeSet::from([501, 504])),
            ..PortUpdate::default()
        };

        let once = update.merged_into(port);
        let twice = update.merged_into(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_update_is_detectable() {
        assert!(PortUpdate::default().is_empty());
        let update = PortUpdate {
            snoop: Some(SnoopState::Untrust),
            ..PortUpdate::default()
        };
        assert!(!update.is_empty());
    }
}
