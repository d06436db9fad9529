//! End-to-end generation scenarios: seeded inventory through the store to
//! rendered vendor text.

#![allow(clippy::unwrap_used)]

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use portdeck_core::{
    AccessPolicy, CreateSwitchRequest, Inventory, PortId, PortKind, PortSet, PortUpdate,
    Selection, SwitchRecord, VendorProfile, VlanRegistry, generate, render_script,
};

fn strip_timestamp(script: &str) -> String {
    script
        .lines()
        .filter(|line| !line.contains(" generated : "))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn standard_switch_renders_52_hpe_stanzas_in_port_order() {
    let sw = SwitchRecord::new("idf-3 stack");
    let reg = VlanRegistry::builtin();
    let script = generate(&sw, &reg, VendorProfile::Hpe);

    let openers: Vec<&str> = script
        .lines()
        .filter(|l| l.starts_with("interface "))
        .collect();
    assert_eq!(openers.len(), 52);

    let expected: Vec<String> = sw
        .ports
        .iter()
        .map(|p| format!("interface {}", p.label))
        .collect();
    assert_eq!(openers, expected);

    // All ports are default access ports on the management VLAN.
    let untagged = script
        .lines()
        .filter(|l| l.trim() == "untagged vlan 503")
        .count();
    assert_eq!(untagged, 52);
}

#[test]
fn bulk_edit_flows_into_generated_output() {
    let mut inv = Inventory::new(AccessPolicy::ReadWrite);
    let id = inv
        .add(CreateSwitchRequest {
            name: "idf-1".into(),
            ..CreateSwitchRequest::default()
        })
        .unwrap();

    let selection: Selection = [PortId(1), PortId(2), PortId(3)].into_iter().collect();
    let update = PortUpdate {
        untagged_vlan: Some(501),
        ..PortUpdate::default()
    };
    assert!(inv.apply_bulk(id, &selection, &update).applied());

    let sw = inv.get(id).unwrap();
    let reg = VlanRegistry::builtin();
    let script = generate(sw, &reg, VendorProfile::Hpe);

    let on_501 = script
        .lines()
        .filter(|l| l.trim() == "untagged vlan 501")
        .count();
    let on_503 = script
        .lines()
        .filter(|l| l.trim() == "untagged vlan 503")
        .count();
    assert_eq!(on_501, 3);
    assert_eq!(on_503, 49);
}

#[test]
fn cisco_trunk_port_renders_trunk_mode_without_access_vlan() {
    let mut inv = Inventory::new(AccessPolicy::ReadWrite);
    let id = inv
        .add(CreateSwitchRequest {
            name: "core-uplink".into(),
            ..CreateSwitchRequest::default()
        })
        .unwrap();

    // Uplink bank ports become trunks.
    let selection: Selection = [PortId(49), PortId(50), PortId(51), PortId(52)]
        .into_iter()
        .collect();
    let update = PortUpdate {
        kind: Some(PortKind::Trunk),
        ..PortUpdate::default()
    };
    assert!(inv.apply_bulk(id, &selection, &update).applied());

    let sw = inv.get(id).unwrap();
    let reg = VlanRegistry::builtin();
    let script = generate(sw, &reg, VendorProfile::Cisco);

    let trunk_stanza = script
        .split("interface ")
        .find(|s| s.starts_with("GigabitEthernet2/0/0/1"))
        .unwrap();
    assert!(trunk_stanza.contains("switchport mode trunk"));
    assert!(trunk_stanza.contains("switchport trunk allowed vlan all"));
    assert!(!trunk_stanza.contains("switchport access vlan"));
}

#[test]
fn generate_succeeds_under_read_only_policy() {
    let mut inv = Inventory::new(AccessPolicy::ReadWrite);
    let id = inv
        .add(CreateSwitchRequest {
            name: "frozen".into(),
            ..CreateSwitchRequest::default()
        })
        .unwrap();
    inv.set_policy(AccessPolicy::ReadOnly);

    let sw = inv.get(id).unwrap();
    let reg = VlanRegistry::builtin();
    for profile in [
        VendorProfile::Hpe,
        VendorProfile::Cisco,
        VendorProfile::Brocade,
        VendorProfile::Mikrotik,
    ] {
        let script = generate(sw, &reg, profile);
        assert!(!script.is_empty(), "{profile} should render read-only");
    }
}

#[test]
fn small_switch_golden_script_per_profile() {
    let mut sw = SwitchRecord::new("lab-bench");
    sw.ports = PortSet::new(2, 1);
    let reg = VlanRegistry::builtin();
    let at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();

    let hpe = render_script(&sw, &reg, VendorProfile::Hpe, at);
    assert_eq!(
        strip_timestamp(&hpe),
        "\
! ======================================================
! portdeck provisioning script
! switch    : lab-bench
! profile   : HPE ProCurve
! vlans     : 503 (Management)
! ======================================================

interface 1/0/1
   untagged vlan 503
exit
interface 1/0/2
   untagged vlan 503
exit
interface 2/0/1
   untagged vlan 503
exit"
    );

    let mikrotik = render_script(&sw, &reg, VendorProfile::Mikrotik, at);
    assert_eq!(
        strip_timestamp(&mikrotik),
        "\
# ======================================================
# portdeck provisioning script
# switch    : lab-bench
# profile   : MikroTik RouterOS
# vlans     : 503 (Management)
# ======================================================

/interface bridge vlan
add bridge=bridge1 tagged=1/0/1 vlan-ids=500,501,502,503
add bridge=bridge1 tagged=1/0/2 vlan-ids=500,501,502,503
add bridge=bridge1 tagged=2/0/1 vlan-ids=500,501,502,503"
    );

    let brocade = render_script(&sw, &reg, VendorProfile::Brocade, at);
    assert_eq!(
        strip_timestamp(&brocade),
        "\
! ======================================================
! portdeck provisioning script
! switch    : lab-bench
! profile   : Brocade FastIron
! vlans     : 503 (Management)
! ======================================================

interface ethernet 1/0/1
 vlan-config control
 vlan-config dual-mode 503
 inline-power
!
interface ethernet 1/0/2
 vlan-config control
 vlan-config dual-mode 503
 inline-power
!
interface ethernet 2/0/1
 vlan-config control
 vlan-config dual-mode 503
 inline-power
!"
    );
}
