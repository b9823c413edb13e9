use crate::error::InstallError;
use crate::options::verbose;
use crate::utils::{classify_transport_error, http_client};
use semver::Version;
use serde::Deserialize;

const REGISTRY_URL: &str = "https://registry.npmjs.org/electron";

/// The npm registry document for the electron package. Only the keys of the
/// `versions` object matter; their insertion order is ascending by release
/// time, which the reverse scan in `select_version` relies on (hence
/// serde_json's preserve_order feature).
#[derive(Debug, Deserialize)]
pub struct RegistryDocument {
    pub versions: serde_json::Map<String, serde_json::Value>,
}

fn fetch_registry_text() -> Result<String, InstallError> {
    verbose::log(&format!("Fetching {}", REGISTRY_URL));

    let client = http_client()?;
    let response = client
        .get(REGISTRY_URL)
        .send()
        .map_err(classify_transport_error)?;

    if !response.status().is_success() {
        return Err(InstallError::TransferFailed(format!(
            "registry returned {}",
            response.status()
        )));
    }

    response.text().map_err(classify_transport_error)
}

pub fn fetch_registry() -> Result<RegistryDocument, InstallError> {
    let text = fetch_registry_text()?;
    serde_json::from_str(&text)
        .map_err(|err| InstallError::TransferFailed(format!("invalid registry document: {}", err)))
}

/// Resolves the newest published version with the requested semver major.
/// A document that does not parse resolves to nothing, the same as a
/// document with no matching entry.
pub fn resolve(major: u64) -> Result<String, InstallError> {
    let text = fetch_registry_text()?;

    let document: RegistryDocument = match serde_json::from_str(&text) {
        Ok(document) => document,
        Err(_) => return Err(InstallError::VersionNotFound(major)),
    };

    let version = select_version(&document, major)?;
    verbose::log(&format!("Resolved Electron {}", version));
    Ok(version)
}

/// Scans the registry keys from the end, so the newest matching release wins.
/// Matching compares the parsed semver major, not a string prefix: major 1
/// must not match 10.2.0. Keys that do not parse as semver are skipped.
pub fn select_version(document: &RegistryDocument, major: u64) -> Result<String, InstallError> {
    for key in document.versions.keys().rev() {
        if let Ok(version) = Version::parse(key) {
            if version.major == major {
                return Ok(key.clone());
            }
        }
    }

    Err(InstallError::VersionNotFound(major))
}

/// The newest release per major, newest major first. Used by `list --remote`.
pub fn latest_per_major(document: &RegistryDocument) -> Vec<(u64, String)> {
    let mut latest = std::collections::BTreeMap::new();

    for key in document.versions.keys() {
        if let Ok(version) = Version::parse(key) {
            latest.insert(version.major, key.clone());
        }
    }

    latest.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::{latest_per_major, select_version, RegistryDocument};
    use crate::error::InstallError;

    fn snapshot(keys: &[&str]) -> RegistryDocument {
        let mut versions = serde_json::Map::new();
        for key in keys {
            versions.insert(key.to_string(), serde_json::json!({}));
        }
        RegistryDocument { versions }
    }

    #[test]
    fn picks_the_last_matching_entry_scanning_from_the_end() {
        let document = snapshot(&["6.0.0", "6.0.2", "7.1.0"]);
        assert_eq!(select_version(&document, 6).unwrap(), "6.0.2");
        assert_eq!(select_version(&document, 7).unwrap(), "7.1.0");
    }

    #[test]
    fn reports_not_found_when_no_major_matches() {
        let document = snapshot(&["6.0.0", "6.0.2", "7.1.0"]);
        match select_version(&document, 9) {
            Err(InstallError::VersionNotFound(9)) => {}
            other => panic!("expected VersionNotFound, got {:?}", other),
        }
    }

    #[test]
    fn major_comparison_respects_version_boundaries() {
        // A string-prefix match would wrongly pick 10.2.0 here.
        let document = snapshot(&["1.3.5", "10.2.0"]);
        assert_eq!(select_version(&document, 1).unwrap(), "1.3.5");
        assert_eq!(select_version(&document, 10).unwrap(), "10.2.0");
    }

    #[test]
    fn skips_keys_that_are_not_semver() {
        let document = snapshot(&["6.0.0", "not-a-version", "6.0.1"]);
        assert_eq!(select_version(&document, 6).unwrap(), "6.0.1");
    }

    #[test]
    fn prerelease_versions_still_carry_their_major() {
        let document = snapshot(&["7.0.0-beta.1", "6.1.0"]);
        assert_eq!(select_version(&document, 7).unwrap(), "7.0.0-beta.1");
    }

    #[test]
    fn latest_per_major_keeps_registry_newest_and_sorts_descending() {
        let document = snapshot(&["5.0.0", "6.0.0", "5.0.13", "6.0.2", "7.1.0"]);
        assert_eq!(
            latest_per_major(&document),
            vec![
                (7, "7.1.0".to_string()),
                (6, "6.0.2".to_string()),
                (5, "5.0.13".to_string()),
            ]
        );
    }
}
