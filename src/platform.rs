use std::path::{Path, PathBuf};

/// Platform-dependent naming resolved once at startup. Everything downstream
/// (URL template, executable lookup, app archive location) reads from this
/// struct instead of branching on cfg! directly.
#[derive(Debug, Clone, Copy)]
pub struct Platform {
    pub os: &'static str,
    pub arch: &'static str,
    executable: &'static str,
    app_asar: &'static str,
}

impl Platform {
    pub fn current() -> Platform {
        let os = if cfg!(target_os = "windows") {
            "win32"
        } else if cfg!(target_os = "macos") {
            "darwin"
        } else {
            "linux"
        };

        let arch = if cfg!(target_arch = "x86") {
            "ia32"
        } else if cfg!(target_arch = "x86_64") {
            "x64"
        } else if cfg!(target_arch = "arm") {
            "armv7l"
        } else if cfg!(target_arch = "aarch64") {
            "arm64"
        } else {
            "x64"
        };

        let executable = if cfg!(target_os = "windows") {
            "electron.exe"
        } else if cfg!(target_os = "macos") {
            "Electron.app/Contents/MacOS/Electron"
        } else {
            "electron"
        };

        let app_asar = if cfg!(target_os = "macos") {
            "../Resources/app.asar"
        } else {
            "resources/app.asar"
        };

        Platform {
            os,
            arch,
            executable,
            app_asar,
        }
    }

    pub fn download_url(&self, version: &str) -> String {
        format!(
            "https://github.com/electron/electron/releases/download/v{}/electron-v{}-{}-{}.zip",
            version, version, self.os, self.arch
        )
    }

    /// The Electron binary inside an installed version directory.
    pub fn executable_path(&self, version_dir: &Path) -> PathBuf {
        version_dir.join(self.executable)
    }

    /// The bundled application archive, relative to the launcher's own
    /// directory.
    pub fn app_archive_path(&self, launcher_dir: &Path) -> PathBuf {
        launcher_dir.join(self.app_asar)
    }
}

#[cfg(test)]
mod tests {
    use super::Platform;
    use std::path::Path;

    #[test]
    fn download_url_names_version_os_and_arch() {
        let platform = Platform::current();
        let url = platform.download_url("6.0.2");

        assert!(url.starts_with("https://github.com/electron/electron/releases/download/v6.0.2/"));
        assert!(url.ends_with(&format!(
            "electron-v6.0.2-{}-{}.zip",
            platform.os, platform.arch
        )));
    }

    #[test]
    fn platform_tokens_are_known_values() {
        let platform = Platform::current();
        assert!(["win32", "darwin", "linux"].contains(&platform.os));
        assert!(["ia32", "x64", "armv7l", "arm64"].contains(&platform.arch));
    }

    #[test]
    fn executable_path_is_inside_the_version_dir() {
        let platform = Platform::current();
        let path = platform.executable_path(Path::new("/cache/6"));
        assert!(path.starts_with("/cache/6"));
    }
}
