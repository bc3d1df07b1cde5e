use log::debug;
use log::info;
use std::process::Command;

use anyhow::bail;

/// Make sure nhmmer can be started at all before handing it a full search.
/// -h is the cheapest invocation that exits cleanly on every HMMER version.
pub fn check_nhmmer() -> anyhow::Result<()> {
    debug!("Checking for nhmmer");
    if let Ok(_output) = Command::new("nhmmer").arg("-h").output() {
        info!("Found nhmmer");
        Ok(())
    } else {
        bail!("nhmmer is either not installed or not in PATH")
    }
}
