use anyhow::Result;
use colored::Colorize;
use std::fs;

use crate::config;
use crate::utils::registry;

pub fn execute(remote: bool) -> Result<()> {
    if remote {
        list_remote_versions()?;
    } else {
        list_local_versions()?;
    }

    Ok(())
}

fn list_local_versions() -> Result<()> {
    let cache = config::cache_dirs()?;

    println!("Installed Electron versions:");

    let mut majors = Vec::new();
    for entry in fs::read_dir(&cache.cache_root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if let Some(major) = entry
            .file_name()
            .to_str()
            .and_then(|name| name.parse::<u64>().ok())
        {
            majors.push(major);
        }
    }

    if majors.is_empty() {
        println!("  No versions installed");
        return Ok(());
    }

    majors.sort_unstable_by(|a, b| b.cmp(a));

    for major in majors {
        println!("  {}", major.to_string().green());
    }

    Ok(())
}

fn list_remote_versions() -> Result<()> {
    println!("Fetching available Electron versions...");

    let document = registry::fetch_registry()?;
    let latest = registry::latest_per_major(&document);

    if latest.is_empty() {
        println!("No available versions found");
        return Ok(());
    }

    let cache = config::cache_dirs()?;

    println!("\nNewest release per major version:");

    for (major, version) in latest.iter().take(30) {
        if cache.version_dir(*major).exists() {
            println!("* {} ({})", version.green(), "installed".yellow());
        } else {
            println!("  {}", version);
        }
    }

    Ok(())
}
