// ── MikroTik RouterOS dialect ──
//
// Declarative, aggregated framing: no per-port stanzas. One bridge-VLAN
// block covers every port regardless of kind, with one `add` directive
// per port naming its label as a tagged member of the policy VLAN list.

use std::fmt::Write as _;

use super::{SITE_POLICY_VLANS, vlan_list};
use crate::model::PortSet;

pub(super) fn bridge_block(out: &mut String, ports: &PortSet) {
    let _ = writeln!(out, "/interface bridge vlan");
    for port in ports.iter() {
        let _ = writeln!(
            out,
            "add bridge=bridge1 tagged={} vlan-ids={}",
            port.label,
            vlan_list(&SITE_POLICY_VLANS)
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::PortKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_add_line_per_port_in_physical_order() {
        let set = PortSet::new(2, 1);
        let mut out = String::new();
        bridge_block(&mut out, &set);
        assert_eq!(
            out,
            "/interface bridge vlan\n\
             add bridge=bridge1 tagged=1/0/1 vlan-ids=500,501,502,503\n\
             add bridge=bridge1 tagged=1/0/2 vlan-ids=500,501,502,503\n\
             add bridge=bridge1 tagged=2/0/1 vlan-ids=500,501,502,503\n"
        );
    }

    #[test]
    fn trunk_and_access_ports_emit_the_same_line_shape() {
        let mut set = PortSet::new(1, 1);
        let ids: Vec<_> = set.ids().collect();
        if let Some(p) = set.get_mut(ids[1]) {
            p.kind = PortKind::Trunk;
        }

        let mut out = String::new();
        bridge_block(&mut out, &set);
        let adds: Vec<&str> = out.lines().filter(|l| l.starts_with("add ")).collect();
        assert_eq!(adds.len(), 2);
        assert!(adds.iter().all(|l| l.ends_with("vlan-ids=500,501,502,503")));
    }
}
