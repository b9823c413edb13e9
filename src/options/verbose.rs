use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::SeqCst);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Diagnostics go to stderr so they never interleave with the progress bar
/// or command output on stdout.
pub fn log(message: &str) {
    if is_verbose() {
        eprintln!("{} {}", "[verbose]".blue(), message);
    }
}
