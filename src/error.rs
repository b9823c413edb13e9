use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal installation failures. User cancellation is deliberately not a
/// variant: an aborted transfer is reported as `DownloadOutcome::Aborted`
/// and exits the process cleanly.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("could not connect. Please ensure you have access to the internet")]
    NetworkUnreachable,

    #[error("download failed: {0}")]
    TransferFailed(String),

    #[error("no published Electron release matches major version {0}")]
    VersionNotFound(u64),

    #[error("failed to extract {}: {}", archive.display(), detail)]
    ExtractionFailed { archive: PathBuf, detail: String },

    #[error("failed to launch {}: {}", path.display(), source)]
    LaunchFailed { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),
}
