// ── Advisory field checks ──
//
// IP and MAC shape validation is display-only: portdeck is a provisioning
// draft tool, so malformed values are stored as-is and merely flagged for
// the renderer. Nothing in the core rejects a value on shape grounds.

use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Which record field a warning refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum FieldWarning {
    ManagementIp,
    SecondaryIp,
    MacAddress,
}

/// Advisory check: does `value` parse as dotted-quad IPv4? Empty means
/// "not set" and is fine.
pub fn ipv4_ok(value: &str) -> bool {
    value.is_empty() || Ipv4Addr::from_str(value).is_ok()
}

/// Advisory check: six colon- or dash-separated hex octets. Empty is fine.
pub fn mac_ok(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    let sep = if value.contains(':') { ':' } else { '-' };
    let groups: Vec<&str> = value.split(sep).collect();
    groups.len() == 6
        && groups
            .iter()
            .all(|g| g.len() == 2 && g.chars().all(|c| c.is_ascii_hexdigit()))
}
