// ── Brocade FastIron dialect ──
//
// Stanza-per-port with a trailing `!` divider instead of an exit keyword,
// a dual-mode directive carrying the untagged VLAN, and an unconditional
// inline-power directive.

use std::fmt::Write as _;

use crate::model::{Port, PortKind};

pub(super) fn port_stanza(out: &mut String, port: &Port) {
    let _ = writeln!(out, "interface ethernet {}", port.label);
    if !port.description.is_empty() {
        let _ = writeln!(out, " port-name {}", port.description);
    }
    match port.kind {
        PortKind::Access => {
            let _ = writeln!(out, " vlan-config control");
            let _ = writeln!(out, " vlan-config dual-mode {}", port.untagged_vlan);
        }
        PortKind::Trunk => {
            let _ = writeln!(out, " vlan-config trunk");
        }
    }
    let _ = writeln!(out, " inline-power");
    let _ = writeln!(out, "!");
}
