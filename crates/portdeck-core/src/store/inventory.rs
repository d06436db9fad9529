// ── Switch inventory ──
//
// Insertion-ordered, id-keyed collection of switch records. Every write
// entry point checks the access policy first and reports a
// `MutationOutcome` instead of raising; the store has no fatal-error
// class. Ports are always replaced as whole values (`merged_into`), so a
// reader never observes a half-updated port.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::command::{CreateSwitchRequest, PortUpdate, ScanTarget, SwitchUpdate};
use crate::model::{PortId, SwitchId, SwitchRecord};
use crate::policy::{AccessPolicy, MutationOutcome};
use crate::selection::Selection;

/// The full switch inventory for one session.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Inventory {
    switches: IndexMap<SwitchId, SwitchRecord>,

    /// Session policy, injected by the role collaborator. Not part of the
    /// draft itself, so it never round-trips through persistence.
    #[serde(skip)]
    policy: AccessPolicy,
}

impl Inventory {
    pub fn new(policy: AccessPolicy) -> Self {
        Self {
            switches: IndexMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> AccessPolicy {
        self.policy
    }

    /// Re-arm the policy gate after deserializing a draft.
    pub fn set_policy(&mut self, policy: AccessPolicy) {
        self.policy = policy;
    }

    // ── Reads ────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.switches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
    }

    pub fn get(&self, id: SwitchId) -> Option<&SwitchRecord> {
        self.switches.get(&id)
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SwitchRecord> {
        self.switches.values()
    }

    /// Resolve a user-supplied reference: full id, unambiguous id prefix,
    /// or exact name.
    pub fn resolve(&self, needle: &str) -> Option<&SwitchRecord> {
        if let Some(found) = self
            .switches
            .values()
            .find(|sw| sw.id.to_string() == needle || sw.name == needle)
        {
            return Some(found);
        }
        let mut by_prefix = self
            .switches
            .values()
            .filter(|sw| sw.id.to_string().starts_with(needle));
        match (by_prefix.next(), by_prefix.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }

    // ── Switch CRUD ──────────────────────────────────────────────────

    /// Add a fresh switch with a fully initialized standard port set.
    /// Returns `None` when the session is read-only.
    pub fn add(&mut self, req: CreateSwitchRequest) -> Option<SwitchId> {
        if !self.policy.can_mutate() {
            debug!("add rejected: read-only session");
            return None;
        }

        let mut record = SwitchRecord::new(req.name);
        if let Some(location) = req.location {
            record.location = location;
        }
        if let Some(ip) = req.management_ip {
            record.management_ip = ip;
        }
        if let Some(model) = req.hardware_model {
            record.hardware_model = model;
        }

        let id = record.id;
        debug!(switch = %id, "adding switch record");
        self.switches.insert(id, record);
        Some(id)
    }

    /// Clone an existing switch with identity fields cleared. Returns the
    /// new id, or `None` when denied or the source id is unknown.
    pub fn clone_switch(&mut self, source: SwitchId) -> Option<SwitchId> {
        if !self.policy.can_mutate() {
            debug!("clone rejected: read-only session");
            return None;
        }
        let copy = self.switches.get(&source)?.clone_cleared();
        let id = copy.id;
        debug!(source = %source, copy = %id, "cloning switch record");
        self.switches.insert(id, copy);
        Some(id)
    }

    pub fn remove(&mut self, id: SwitchId) -> MutationOutcome {
        if !self.policy.can_mutate() {
            return MutationOutcome::Denied;
        }
        if self.switches.shift_remove(&id).is_some() {
            debug!(switch = %id, "removed switch record");
            MutationOutcome::Applied
        } else {
            MutationOutcome::UnknownTarget
        }
    }

    pub fn update_switch(&mut self, id: SwitchId, update: &SwitchUpdate) -> MutationOutcome {
        if !self.policy.can_mutate() {
            return MutationOutcome::Denied;
        }
        let Some(record) = self.switches.get_mut(&id) else {
            return MutationOutcome::UnknownTarget;
        };

        apply_opt(&mut record.name, &update.name);
        apply_opt(&mut record.location, &update.location);
        apply_opt(&mut record.management_ip, &update.management_ip);
        apply_opt(&mut record.secondary_ip, &update.secondary_ip);
        apply_opt(&mut record.mac_address, &update.mac_address);
        apply_opt(&mut record.credentials.username, &update.username);
        apply_opt(&mut record.credentials.password, &update.password);
        apply_opt(&mut record.hardware_model, &update.hardware_model);
        apply_opt(&mut record.part_number, &update.part_number);
        apply_opt(&mut record.serial_number, &update.serial_number);
        apply_opt(&mut record.firmware_version, &update.firmware_version);
        if let Some(status) = update.backup_status {
            record.backup_status = status;
        }

        MutationOutcome::Applied
    }

    /// Write a scanned value into the chosen field. The value is opaque
    /// text; shape problems surface as render-time warnings only.
    pub fn record_scan(
        &mut self,
        id: SwitchId,
        target: ScanTarget,
        value: String,
    ) -> MutationOutcome {
        if !self.policy.can_mutate() {
            return MutationOutcome::Denied;
        }
        let Some(record) = self.switches.get_mut(&id) else {
            return MutationOutcome::UnknownTarget;
        };
        debug!(switch = %id, %target, "storing scanned value");
        match target {
            ScanTarget::MacAddress => record.mac_address = value,
            ScanTarget::SerialNumber => record.serial_number = value,
        }
        MutationOutcome::Applied
    }

    // ── Port edits ───────────────────────────────────────────────────

    /// Update a single port by id.
    pub fn update_port(
        &mut self,
        switch: SwitchId,
        port: PortId,
        update: &PortUpdate,
    ) -> MutationOutcome {
        if !self.policy.can_mutate() {
            return MutationOutcome::Denied;
        }
        let Some(record) = self.switches.get_mut(&switch) else {
            return MutationOutcome::UnknownTarget;
        };
        let Some(slot) = record.ports.get_mut(port) else {
            return MutationOutcome::UnknownTarget;
        };
        *slot = update.merged_into(slot);
        MutationOutcome::Applied
    }

    /// Apply the same partial update to every selected port. All-or-nothing
    /// from the caller's point of view: a read-only session leaves every
    /// port untouched, and unselected ports are never visited.
    pub fn apply_bulk(
        &mut self,
        switch: SwitchId,
        selection: &Selection,
        update: &PortUpdate,
    ) -> MutationOutcome {
        if !self.policy.can_mutate() {
            debug!("bulk update rejected: read-only session");
            return MutationOutcome::Denied;
        }
        let Some(record) = self.switches.get_mut(&switch) else {
            return MutationOutcome::UnknownTarget;
        };

        debug!(switch = %switch, ports = selection.len(), "applying bulk update");
        for id in selection.iter() {
            if let Some(slot) = record.ports.get_mut(id) {
                *slot = update.merged_into(slot);
            }
        }
        MutationOutcome::Applied
    }
}

fn apply_opt(field: &mut String, value: &Option<String>) {
    if let Some(v) = value {
        field.clone_from(v);
    }
}
