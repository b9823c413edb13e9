use anyhow::{anyhow, Result};
use colored::Colorize;
use std::fs;

use crate::config;

pub fn execute(major: u64) -> Result<()> {
    let cache = config::cache_dirs()?;

    let version_dir = cache.version_dir(major);
    if !version_dir.exists() {
        return Err(anyhow!("Electron {} is not installed", major));
    }

    fs::remove_dir_all(&version_dir)?;

    println!(
        "Successfully removed Electron {}",
        major.to_string().green()
    );

    Ok(())
}
