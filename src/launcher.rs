use crate::error::InstallError;
use crate::options::verbose;
use crate::platform::Platform;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Spawns the cached Electron binary against the bundled application archive
/// and waits for it, so the launcher's exit code is the runtime's exit code.
pub fn launch(version_dir: &Path, platform: &Platform) -> Result<ExitStatus, InstallError> {
    let executable = platform.executable_path(version_dir);

    if !executable.exists() {
        return Err(InstallError::LaunchFailed {
            path: executable,
            source: io::Error::new(io::ErrorKind::NotFound, "executable not found"),
        });
    }

    let launcher_dir = std::env::current_exe()?
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "launcher has no parent directory"))?;
    let app_archive = platform.app_archive_path(&launcher_dir);

    verbose::log(&format!(
        "Launching {} {}",
        executable.display(),
        app_archive.display()
    ));

    Command::new(&executable)
        .arg(&app_archive)
        .status()
        .map_err(|source| InstallError::LaunchFailed {
            path: executable,
            source,
        })
}
