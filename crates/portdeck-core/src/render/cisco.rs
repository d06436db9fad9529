// ── Cisco IOS dialect ──
//
// Mode-based global-config style. Interface names are not the physical
// label verbatim: IOS addressing carries a module position the label does
// not, so a `0` segment is spliced in before the final port number
// (`1/0/5` → `GigabitEthernet1/0/0/5`).

use std::fmt::Write as _;

use crate::model::{Port, PortKind, SnoopState};

/// Rewrite a physical label into the IOS interface name.
pub(super) fn interface_name(label: &str) -> String {
    match label.rsplit_once('/') {
        Some((prefix, port)) => format!("GigabitEthernet{prefix}/0/{port}"),
        None => format!("GigabitEthernet{label}"),
    }
}

pub(super) fn port_stanza(out: &mut String, port: &Port) {
    let _ = writeln!(out, "interface {}", interface_name(&port.label));
    if !port.description.is_empty() {
        let _ = writeln!(out, " description {}", port.description);
    }
    match port.kind {
        PortKind::Access => {
            let _ = writeln!(out, " switchport mode access");
            let _ = writeln!(out, " switchport access vlan {}", port.untagged_vlan);
        }
        PortKind::Trunk => {
            let _ = writeln!(out, " switchport mode trunk");
            let _ = writeln!(out, " switchport trunk allowed vlan all");
        }
    }
    if port.snoop == SnoopState::Trust {
        let _ = writeln!(out, " ip dhcp snooping trust");
    }
    let _ = writeln!(out, " spanning-tree portfast");
    let _ = writeln!(out, "exit");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::PortSet;
    use pretty_assertions::assert_eq;

    #[test]
    fn label_rewrite_splices_a_module_segment() {
        assert_eq!(interface_name("1/0/5"), "GigabitEthernet1/0/0/5");
        assert_eq!(interface_name("2/0/1"), "GigabitEthernet2/0/0/1");
        assert_eq!(interface_name("7"), "GigabitEthernet7");
    }

    #[test]
    fn access_stanza() {
        let set = PortSet::new(1, 0);
        let port = set.iter().next().unwrap();

        let mut out = String::new();
        port_stanza(&mut out, port);
        assert_eq!(
            out,
            "interface GigabitEthernet1/0/0/1\n \
             switchport mode access\n \
             switchport access vlan 503\n \
             ip dhcp snooping trust\n \
             spanning-tree portfast\nexit\n"
        );
    }

    #[test]
    fn trunk_stanza_has_no_access_vlan_line() {
        let set = PortSet::new(0, 1);
        let mut port = set.iter().next().unwrap().clone();
        port.kind = PortKind::Trunk;

        let mut out = String::new();
        port_stanza(&mut out, &port);
        assert!(out.contains(" switchport mode trunk\n"));
        assert!(out.contains(" switchport trunk allowed vlan all\n"));
        assert!(!out.contains("switchport access vlan"));
    }

    #[test]
    fn untrusted_port_omits_the_snooping_line_but_keeps_portfast() {
        let set = PortSet::new(1, 0);
        let mut port = set.iter().next().unwrap().clone();
        port.snoop = SnoopState::Untrust;

        let mut out = String::new();
        port_stanza(&mut out, &port);
        assert!(!out.contains("ip dhcp snooping trust"));
        assert!(out.contains(" spanning-tree portfast\n"));
    }
}
