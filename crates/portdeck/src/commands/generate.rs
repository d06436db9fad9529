//! Vendor script generation — the console's one true artifact.
//!
//! Generation is read-only by nature and works in any session, including
//! `--read-only` ones.

use std::str::FromStr;

use portdeck_core::VendorProfile;

use crate::cli::GenerateArgs;
use crate::error::CliError;
use crate::output;

use super::{Ctx, resolve_switch};

pub fn handle(args: &GenerateArgs, ctx: &Ctx) -> Result<(), CliError> {
    let profile = resolve_profile(args, ctx)?;

    let inventory = ctx.load_inventory()?;
    let sw = resolve_switch(&inventory, &args.switch)?;

    let script = portdeck_core::generate(sw, &ctx.registry, profile);

    if let Some(path) = &args.out {
        std::fs::write(path, &script).map_err(|source| CliError::ScriptWrite {
            path: path.clone(),
            source,
        })?;
        output::print_output(&format!("wrote {} to {}", profile, path.display()), ctx.quiet);
    } else {
        // The script itself is the artifact; print it verbatim.
        print!("{script}");
    }
    Ok(())
}

/// Vendor resolution: flag > config `default_vendor`.
fn resolve_profile(args: &GenerateArgs, ctx: &Ctx) -> Result<VendorProfile, CliError> {
    if let Some(vendor) = args.vendor {
        return Ok(vendor.into());
    }
    let Some(name) = &ctx.config.default_vendor else {
        return Err(CliError::Usage {
            message: "no vendor selected; pass --vendor or set default_vendor in config".into(),
        });
    };
    VendorProfile::from_str(name).map_err(|_| CliError::Usage {
        message: format!(
            "unknown default_vendor '{name}'; expected hpe, cisco, brocade, or mikrotik"
        ),
    })
}
