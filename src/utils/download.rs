use crate::error::InstallError;
use crate::installer::InstallerContext;
use crate::options::verbose;
use crate::utils::{classify_transport_error, http_client};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::time::{Duration, Instant};

/// How a transfer ended. An abort is not an error: the user asked for it,
/// and the orchestrator turns it into a clean exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    Completed,
    Aborted,
}

/// Caps progress emissions at one per frame (60 per second) so a fast
/// download cannot flood the UI channel.
pub struct ProgressThrottle {
    last_emit: Option<Instant>,
}

impl ProgressThrottle {
    const MIN_INTERVAL: Duration = Duration::from_millis(1000 / 60);

    pub fn new() -> ProgressThrottle {
        ProgressThrottle { last_emit: None }
    }

    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last_emit {
            Some(last) if now.duration_since(last) < Self::MIN_INTERVAL => false,
            _ => {
                self.last_emit = Some(now);
                true
            }
        }
    }
}

pub fn percent(received: u64, total: u64) -> u8 {
    if total > 0 {
        ((received * 100) / total).min(100) as u8
    } else {
        0
    }
}

/// Streams `url` into `dest_path` in chunks. The cancellation gate is
/// consulted on every chunk regardless of the throttle, so a cancel is
/// honored within one chunk interval.
pub fn download_file(
    url: &str,
    dest_path: &Path,
    ctx: &InstallerContext,
) -> Result<DownloadOutcome, InstallError> {
    verbose::log(&format!("Downloading from {}", url));

    let client = http_client()?;
    let mut response = client.get(url).send().map_err(classify_transport_error)?;

    if !response.status().is_success() {
        return Err(InstallError::TransferFailed(format!(
            "server returned {} for {}",
            response.status(),
            url
        )));
    }

    let total_size = response.content_length().unwrap_or(0);

    let mut file = File::create(dest_path)?;

    let mut received: u64 = 0;
    let mut buffer = [0u8; 8192];
    let mut throttle = ProgressThrottle::new();

    loop {
        if ctx.cancel.is_cancelled() {
            return Ok(DownloadOutcome::Aborted);
        }

        let bytes_read = response
            .read(&mut buffer)
            .map_err(|err| InstallError::TransferFailed(err.to_string()))?;

        if bytes_read == 0 {
            break;
        }

        file.write_all(&buffer[..bytes_read])?;
        received += bytes_read as u64;

        if throttle.ready(Instant::now()) {
            ctx.sink.progress(percent(received, total_size));
        }
    }

    // Final emission bypasses the throttle so the bar always lands on 100.
    ctx.sink.progress(100);

    Ok(DownloadOutcome::Completed)
}
