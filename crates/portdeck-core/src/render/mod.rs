// ── Vendor script generation ──
//
// Pure text rendering of a switch's port model into one vendor's
// configuration grammar. Four dialects, four render paths: the profiles
// disagree on interface addressing, on whether VLAN membership comes from
// port state or from the site policy literal, and on per-port vs
// aggregated framing, so there is deliberately no shared template.
//
// Determinism contract: same inputs ⇒ byte-identical output, except the
// timestamp line in the header. Tests strip that line.

mod brocade;
mod cisco;
mod hpe;
mod mikrotik;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Write as _;

use crate::model::{SwitchRecord, VlanRegistry};

/// Trunk membership emitted by the HPE and MikroTik dialects. This is the
/// site policy literal carried over from the original console: those two
/// dialects do not read per-port tagged sets.
pub(crate) const SITE_POLICY_VLANS: [u16; 4] = [500, 501, 502, 503];

/// One manufacturer's configuration grammar.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum VendorProfile {
    #[strum(serialize = "hpe", to_string = "HPE ProCurve")]
    Hpe,
    #[strum(serialize = "cisco", to_string = "Cisco IOS")]
    Cisco,
    #[strum(serialize = "brocade", to_string = "Brocade FastIron")]
    Brocade,
    #[strum(serialize = "mikrotik", to_string = "MikroTik RouterOS")]
    Mikrotik,
}

impl VendorProfile {
    /// Comment leader for the header block.
    fn comment_leader(self) -> &'static str {
        match self {
            Self::Mikrotik => "#",
            _ => "!",
        }
    }
}

/// Render a configuration script stamped with the current time.
pub fn generate(switch: &SwitchRecord, registry: &VlanRegistry, profile: VendorProfile) -> String {
    render_script(switch, registry, profile, Utc::now())
}

/// Pure renderer: deterministic for a fixed `generated_at`.
pub fn render_script(
    switch: &SwitchRecord,
    registry: &VlanRegistry,
    profile: VendorProfile,
    generated_at: DateTime<Utc>,
) -> String {
    tracing::debug!(switch = %switch.id, %profile, "rendering provisioning script");

    let mut out = String::new();
    render_header(&mut out, switch, registry, profile, generated_at);
    out.push('\n');

    match profile {
        VendorProfile::Hpe => {
            for port in switch.ports.iter() {
                hpe::port_stanza(&mut out, port);
            }
        }
        VendorProfile::Cisco => {
            for port in switch.ports.iter() {
                cisco::port_stanza(&mut out, port);
            }
        }
        VendorProfile::Brocade => {
            for port in switch.ports.iter() {
                brocade::port_stanza(&mut out, port);
            }
        }
        VendorProfile::Mikrotik => mikrotik::bridge_block(&mut out, &switch.ports),
    }

    out
}

/// Header block: tool banner, target switch, timestamp, profile, and an
/// advisory summary of the VLANs the port model references. Ids missing
/// from the registry render neutrally; a miss never fails generation.
fn render_header(
    out: &mut String,
    switch: &SwitchRecord,
    registry: &VlanRegistry,
    profile: VendorProfile,
    generated_at: DateTime<Utc>,
) {
    let c = profile.comment_leader();
    let rule = format!("{c} {}", "=".repeat(54));

    let referenced: BTreeSet<u16> = switch.ports.iter().map(|p| p.untagged_vlan).collect();
    let summary = referenced
        .iter()
        .map(|id| format!("{id} ({})", registry.name_for(*id)))
        .collect::<Vec<_>>()
        .join(", ");

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{c} portdeck provisioning script");
    let _ = writeln!(out, "{c} switch    : {}", switch.name);
    let _ = writeln!(
        out,
        "{c} generated : {}",
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    let _ = writeln!(out, "{c} profile   : {profile}");
    let _ = writeln!(out, "{c} vlans     : {summary}");
    let _ = writeln!(out, "{rule}");
}

/// Join VLAN ids for list-valued directives.
pub(crate) fn vlan_list(ids: &[u16]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
