// ── Switch inventory record ──
//
// One `SwitchRecord` per physical switch. Exactly one record owns its
// `PortSet`; a set is never shared between switches, so clone semantics
// are a deep copy.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ident::{self, FieldWarning};
use super::port::PortSet;

// ── Identity ────────────────────────────────────────────────────────

/// Inventory-wide switch identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SwitchId(pub Uuid);

impl SwitchId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SwitchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Supporting types ────────────────────────────────────────────────

/// Device login used by the (out-of-scope) push tooling. Stored in the
/// draft as plain text; this is a scratchpad, not a credential vault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Last known state of the config backup job for a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum BackupStatus {
    Pending,
    Success,
    Failed,
    NotApplicable,
}

// ── SwitchRecord ────────────────────────────────────────────────────

/// One physical switch in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchRecord {
    pub id: SwitchId,
    pub name: String,
    pub location: String,
    /// Addressing fields are free text on purpose — see `model::ident`.
    pub management_ip: String,
    pub secondary_ip: String,
    pub mac_address: String,
    pub credentials: Credentials,
    pub hardware_model: String,
    pub part_number: String,
    pub serial_number: String,
    pub firmware_version: String,
    pub backup_status: BackupStatus,
    pub ports: PortSet,
}

impl SwitchRecord {
    /// Fresh record with a fully initialized standard port set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: SwitchId::random(),
            name: name.into(),
            location: String::new(),
            management_ip: String::new(),
            secondary_ip: String::new(),
            mac_address: String::new(),
            credentials: Credentials::default(),
            hardware_model: String::new(),
            part_number: String::new(),
            serial_number: String::new(),
            firmware_version: String::new(),
            backup_status: BackupStatus::Pending,
            ports: PortSet::standard(),
        }
    }

    /// Deep copy with the identity fields cleared: a clone is the same
    /// hardware profile and port policy, but not the same physical device,
    /// so serial, MAC, and both addresses reset and the name is suffixed.
    pub fn clone_cleared(&self) -> Self {
        let mut copy = self.clone();
        copy.id = SwitchId::random();
        copy.name = format!("{} (copy)", self.name);
        copy.serial_number = String::new();
        copy.mac_address = String::new();
        copy.management_ip = String::new();
        copy.secondary_ip = String::new();
        copy
    }

    /// Advisory shape warnings for the renderer. Never blocks anything.
    pub fn field_warnings(&self) -> Vec<FieldWarning> {
        let mut warnings = Vec::new();
        if !ident::ipv4_ok(&self.management_ip) {
            warnings.push(FieldWarning::ManagementIp);
        }
        if !ident::ipv4_ok(&self.secondary_ip) {
            warnings.push(FieldWarning::SecondaryIp);
        }
        if !ident::mac_ok(&self.mac_address) {
            warnings.push(FieldWarning::MacAddress);
        }
        warnings
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> SwitchRecord {
        let mut sw = SwitchRecord::new("idf-3 stack");
        sw.location = "Building C / IDF-3".into();
        sw.management_ip = "10.40.3.2".into();
        sw.secondary_ip = "10.40.3.3".into();
        sw.mac_address = "a4:5d:36:aa:bb:cc".into();
        sw.hardware_model = "PD-2448".into();
        sw.part_number = "JL558A".into();
        sw.serial_number = "SN-9F2K41".into();
        sw.firmware_version = "16.11.0012".into();
        sw
    }

    #[test]
    fn clone_clears_identity_and_suffixes_name() {
        let original = sample();
        let copy = original.clone_cleared();

        assert_ne!(copy.id, original.id);
        assert_eq!(copy.name, "idf-3 stack (copy)");
        assert!(copy.serial_number.is_empty());
        assert!(copy.mac_address.is_empty());
        assert!(copy.management_ip.is_empty());
        assert!(copy.secondary_ip.is_empty());

        // Everything else rides along, ports included.
        assert_eq!(copy.location, original.location);
        assert_eq!(copy.hardware_model, original.hardware_model);
        assert_eq!(copy.part_number, original.part_number);
        assert_eq!(copy.firmware_version, original.firmware_version);
        assert_eq!(copy.backup_status, original.backup_status);
        assert_eq!(copy.ports, original.ports);
    }

    #[test]
    fn malformed_fields_are_stored_and_flagged() {
        let mut sw = sample();
        sw.management_ip = "10.40.3".into();
        sw.mac_address = "not-a-mac".into();

        // Stored as-is...
        assert_eq!(sw.management_ip, "10.40.3");
        // ...and flagged for display.
        let warnings = sw.field_warnings();
        assert!(warnings.contains(&FieldWarning::ManagementIp));
        assert!(warnings.contains(&FieldWarning::MacAddress));
        assert!(!warnings.contains(&FieldWarning::SecondaryIp));
    }

    #[test]
    fn new_record_owns_a_standard_port_set() {
        let sw = SwitchRecord::new("fresh");
        assert_eq!(sw.ports.len(), 52);
        assert_eq!(sw.backup_status, BackupStatus::Pending);
    }
}
