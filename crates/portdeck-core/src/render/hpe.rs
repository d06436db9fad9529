// ── HPE ProCurve dialect ──
//
// Flat interface syntax: the physical label is the interface name as-is.
// Trunk membership is the site policy literal, not the port's tagged set.

use std::fmt::Write as _;

use super::{SITE_POLICY_VLANS, vlan_list};
use crate::model::{Port, PortKind};

pub(super) fn port_stanza(out: &mut String, port: &Port) {
    let _ = writeln!(out, "interface {}", port.label);
    if !port.description.is_empty() {
        let _ = writeln!(out, "   name \"{}\"", port.description);
    }
    match port.kind {
        PortKind::Access => {
            let _ = writeln!(out, "   untagged vlan {}", port.untagged_vlan);
        }
        PortKind::Trunk => {
            let _ = writeln!(out, "   tagged vlan {}", vlan_list(&SITE_POLICY_VLANS));
        }
    }
    let _ = writeln!(out, "exit");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::PortSet;
    use pretty_assertions::assert_eq;

    #[test]
    fn access_stanza() {
        let set = PortSet::new(1, 0);
        let mut port = set.iter().next().unwrap().clone();
        port.description = "reception desk".into();

        let mut out = String::new();
        port_stanza(&mut out, &port);
        assert_eq!(
            out,
            "interface 1/0/1\n   name \"reception desk\"\n   untagged vlan 503\nexit\n"
        );
    }

    #[test]
    fn access_stanza_without_description_skips_name_line() {
        let set = PortSet::new(1, 0);
        let port = set.iter().next().unwrap();

        let mut out = String::new();
        port_stanza(&mut out, port);
        assert_eq!(out, "interface 1/0/1\n   untagged vlan 503\nexit\n");
    }

    #[test]
    fn trunk_stanza_uses_the_policy_literal_not_port_state() {
        let set = PortSet::new(0, 1);
        let mut port = set.iter().next().unwrap().clone();
        port.kind = PortKind::Trunk;
        // Deliberately different from the emitted list.
        port.tagged_vlans = [10, 20].into_iter().collect();

        let mut out = String::new();
        port_stanza(&mut out, &port);
        assert_eq!(
            out,
            "interface 2/0/1\n   tagged vlan 500,501,502,503\nexit\n"
        );
    }
}
