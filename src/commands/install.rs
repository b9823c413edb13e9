use anyhow::Result;
use colored::Colorize;
use std::process;

use crate::config;
use crate::installer::{self, InstallOutcome, InstallTarget};
use crate::platform::Platform;

/// Installs the requested (or pinned) major without launching it.
pub fn execute(major_arg: Option<u64>) -> Result<()> {
    let platform = Platform::current();
    let major = config::desired_major(major_arg)?;
    let cache = config::cache_dirs()?;

    if cache.version_dir(major).exists() {
        println!("Electron {} is already installed", major);
        return Ok(());
    }

    println!("Installing Electron {}", major.to_string().green());

    let target = InstallTarget::new(major, &cache);

    match installer::run_install(target, platform) {
        InstallOutcome::Ready => {
            println!(
                "Successfully installed Electron {}",
                major.to_string().green()
            );
            Ok(())
        }
        InstallOutcome::Cancelled => process::exit(0),
        InstallOutcome::Failed => process::exit(1),
    }
}
