//! Simulated handheld scanner.
//!
//! Field units have no camera attached to the console build, so the scan
//! command fabricates a plausible value after a fixed capture delay. The
//! result is an opaque string as far as the core is concerned — it lands
//! verbatim in the chosen record field.

use std::time::Duration;

use rand::Rng;

use crate::cli::ScanTargetArg;

/// Capture delay of the real scanner firmware.
const CAPTURE_DELAY: Duration = Duration::from_millis(1200);

/// Block for the capture delay, then fabricate a value for the target.
pub fn capture(target: ScanTargetArg) -> String {
    std::thread::sleep(CAPTURE_DELAY);
    let mut rng = rand::thread_rng();
    match target {
        ScanTargetArg::Mac => fake_mac(&mut rng),
        ScanTargetArg::Serial => fake_serial(&mut rng),
    }
}

fn fake_mac(rng: &mut impl Rng) -> String {
    let octets: Vec<String> = (0..6)
        .map(|_| format!("{:02x}", rng.gen_range(0..=255u8)))
        .collect();
    octets.join(":")
}

fn fake_serial(rng: &mut impl Rng) -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ0123456789";
    let tail: String = (0..8)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            char::from(ALPHABET[idx])
        })
        .collect();
    format!("PD-{tail}")
}
