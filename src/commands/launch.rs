use anyhow::Result;
use colored::Colorize;
use std::process;

use crate::installer::{self, InstallOutcome, InstallTarget};
use crate::options::verbose;
use crate::platform::Platform;
use crate::{config, launcher};

/// The default flow: make sure the pinned major is cached, installing it with
/// the progress UI if it is not, then hand the process over to Electron.
/// Never returns normally; the process exits with the runtime's status, 0 on
/// a clean cancel, or 1 on a fatal error.
pub fn execute(major_override: Option<u64>) -> Result<()> {
    let platform = Platform::current();
    let major = config::desired_major(major_override)?;
    let cache = config::cache_dirs()?;

    let version_dir = cache.version_dir(major);

    if version_dir.exists() {
        verbose::log(&format!("Electron {} is already installed", major));
    } else {
        let target = InstallTarget::new(major, &cache);

        match installer::run_install(target, platform) {
            InstallOutcome::Ready => {}
            InstallOutcome::Cancelled => process::exit(0),
            InstallOutcome::Failed => process::exit(1),
        }
    }

    println!("Launching {}...", "Electron".bright_green());

    let status = launcher::launch(&version_dir, &platform)?;

    process::exit(status.code().unwrap_or(1));
}
