use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Name of the single-line file, bundled next to the launcher executable,
/// whose leading digits pin the desired Electron major version.
pub const VERSION_FILE: &str = "electron_version";

const CACHE_DIR_NAME: &str = ".electron-global";
const ARCHIVE_NAME: &str = "electron.zip";

pub struct CacheDirs {
    pub cache_root: PathBuf,
}

impl CacheDirs {
    /// The cache is keyed by major version, so a new download only happens
    /// when the major changes, not on every patch release.
    pub fn version_dir(&self, major: u64) -> PathBuf {
        self.cache_root.join(major.to_string())
    }

    pub fn archive_path(&self) -> PathBuf {
        self.cache_root.join(ARCHIVE_NAME)
    }
}

pub fn cache_dirs() -> Result<CacheDirs> {
    let base_dirs = BaseDirs::new().context("Failed to determine the user home directory")?;

    let cache_root = base_dirs.home_dir().join(CACHE_DIR_NAME);

    fs::create_dir_all(&cache_root)
        .with_context(|| format!("Failed to create cache directory {}", cache_root.display()))?;

    Ok(CacheDirs { cache_root })
}

/// The major version to install: an explicit override wins, otherwise the
/// pinned version file next to the launcher executable is consulted.
pub fn desired_major(major_override: Option<u64>) -> Result<u64> {
    if let Some(major) = major_override {
        return Ok(major);
    }

    let executable = env::current_exe()?;
    let version_file = executable
        .parent()
        .context("Failed to locate the launcher directory")?
        .join(VERSION_FILE);

    let content = fs::read_to_string(&version_file).with_context(|| {
        format!(
            "Failed to read the pinned version file {}",
            version_file.display()
        )
    })?;

    parse_pinned_major(&content)
        .ok_or_else(|| anyhow!("No major version found in {}", version_file.display()))
}

/// Extracts the leading integer of the first token, so both "6" and "6.0.2"
/// pin major 6.
pub fn parse_pinned_major(content: &str) -> Option<u64> {
    let token = content.split_whitespace().next()?;
    let digits: String = token.chars().take_while(|c| c.is_ascii_digit()).collect();

    if digits.is_empty() {
        return None;
    }

    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_pinned_major;

    #[test]
    fn parses_a_bare_major() {
        assert_eq!(parse_pinned_major("6"), Some(6));
        assert_eq!(parse_pinned_major("6\n"), Some(6));
        assert_eq!(parse_pinned_major("  22  "), Some(22));
    }

    #[test]
    fn parses_the_leading_digits_of_a_full_version() {
        assert_eq!(parse_pinned_major("6.0.2"), Some(6));
        assert_eq!(parse_pinned_major("10.1.0\n"), Some(10));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_pinned_major(""), None);
        assert_eq!(parse_pinned_major("   "), None);
        assert_eq!(parse_pinned_major("latest"), None);
        assert_eq!(parse_pinned_major("v6"), None);
    }
}
