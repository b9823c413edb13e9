pub mod cancel;
pub mod events;
pub mod ui;

use crate::config::CacheDirs;
use crate::error::InstallError;
use crate::options::verbose;
use crate::platform::Platform;
use crate::utils::{download, extract, registry};
use cancel::CancelGate;
use events::UiSink;
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::channel;
use std::thread;

/// Everything the worker needs to know about one install, fixed at process
/// start. `resolved_version` is filled in once the registry answers.
pub struct InstallTarget {
    pub major: u64,
    pub resolved_version: Option<String>,
    pub cache_root: PathBuf,
    pub version_dir: PathBuf,
    pub archive_path: PathBuf,
}

impl InstallTarget {
    pub fn new(major: u64, cache: &CacheDirs) -> InstallTarget {
        InstallTarget {
            major,
            resolved_version: None,
            cache_root: cache.cache_root.clone(),
            version_dir: cache.version_dir(major),
            archive_path: cache.archive_path(),
        }
    }
}

/// Handles the worker carries into every step: the event channel to the
/// presentation thread and the shared cancellation flag. Passing this
/// explicitly (rather than globals) keeps the orchestrator testable with a
/// plain channel as a fake sink.
pub struct InstallerContext {
    pub sink: UiSink,
    pub cancel: CancelGate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Ready,
    Cancelled,
    Failed,
}

/// Runs the install on a worker thread while the calling (presentation)
/// thread renders progress and watches for Ctrl-C. Returns once the worker
/// has reported a terminal event and exited.
pub fn run_install(target: InstallTarget, platform: Platform) -> InstallOutcome {
    let (tx, rx) = channel();
    let gate = CancelGate::new();

    let ctx = InstallerContext {
        sink: UiSink::new(tx),
        cancel: gate.clone(),
    };

    let worker = thread::spawn(move || install_worker(target, platform, &ctx));

    let outcome = ui::run_event_loop(rx, &gate);
    let _ = worker.join();

    outcome
}

/// The install state machine:
/// Resolve -> Download -> Extract -> Cleanup, with cancellation honored at
/// download chunk boundaries and again once extraction has finished (the
/// extractor itself has no cancellation hook).
fn install_worker(mut target: InstallTarget, platform: Platform, ctx: &InstallerContext) {
    verbose::log(&format!("Cache root {}", target.cache_root.display()));

    ctx.sink.status("Resolving Electron version...");

    let version = match registry::resolve(target.major) {
        Ok(version) => version,
        Err(err) => return fail(&target, ctx, err),
    };
    target.resolved_version = Some(version.clone());

    if let Err(err) = fs::create_dir_all(&target.version_dir) {
        return fail(&target, ctx, err.into());
    }

    ctx.sink
        .status(format!("Downloading Electron {}...", version));

    let url = platform.download_url(&version);
    match download::download_file(&url, &target.archive_path, ctx) {
        Ok(download::DownloadOutcome::Completed) => {}
        Ok(download::DownloadOutcome::Aborted) => return cancelled(&target, ctx),
        Err(err) => return fail(&target, ctx, err),
    }

    ctx.sink.status("Extracting Electron...");

    if let Err(err) = extract::extract_archive(&target.archive_path, &target.version_dir) {
        return fail(&target, ctx, err);
    }

    // A cancel requested mid-extraction lands here, after the blocking
    // extract call returns.
    if ctx.cancel.is_cancelled() {
        return cancelled(&target, ctx);
    }

    if let Err(err) = fs::remove_file(&target.archive_path) {
        verbose::log(&format!("Failed to remove downloaded archive: {}", err));
    }

    if let Some(version) = &target.resolved_version {
        verbose::log(&format!("Installed Electron {}", version));
    }

    ctx.sink.finished();
}

/// A failed install leaves nothing behind: the next run starts from scratch.
fn fail(target: &InstallTarget, ctx: &InstallerContext, err: InstallError) {
    remove_partial_install(target);
    ctx.sink.failed(err.to_string());
}

fn cancelled(target: &InstallTarget, ctx: &InstallerContext) {
    remove_partial_install(target);
    ctx.sink.cancelled();
}

fn remove_partial_install(target: &InstallTarget) {
    let _ = fs::remove_dir_all(&target.version_dir);
    let _ = fs::remove_file(&target.archive_path);
}
