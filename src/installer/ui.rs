use crate::installer::cancel::CancelGate;
use crate::installer::events::UiEvent;
use crate::installer::InstallOutcome;
use crate::options::verbose;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

/// Drains worker events onto the progress bar, in emission order, until a
/// terminal event arrives. Ctrl-C flips the cancellation gate; the actual
/// cleanup happens on the worker thread once it observes the flag, so this
/// loop keeps draining until the worker's Cancelled event comes back.
pub fn run_event_loop(events: Receiver<UiEvent>, gate: &CancelGate) -> InstallOutcome {
    let interrupted = Arc::new(AtomicBool::new(false));
    if let Err(err) = signal_hook::flag::register(signal_hook::consts::SIGINT, interrupted.clone())
    {
        verbose::log(&format!("Failed to register the Ctrl-C handler: {}", err));
    }

    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {percent}% {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    loop {
        if interrupted.swap(false, Ordering::SeqCst) && !gate.is_cancelled() {
            gate.request_cancel();
            bar.set_message("Cancelling...");
        }

        match events.recv_timeout(Duration::from_millis(50)) {
            Ok(UiEvent::Status(text)) => {
                verbose::log(&text);
                bar.set_message(text);
            }
            Ok(UiEvent::Progress(percent)) => {
                bar.set_position(u64::from(percent));
            }
            Ok(UiEvent::Failed(message)) => {
                bar.finish_and_clear();
                eprintln!("{} {}", "error:".red().bold(), message);
                return InstallOutcome::Failed;
            }
            Ok(UiEvent::Cancelled) => {
                bar.finish_and_clear();
                println!("Installation cancelled");
                return InstallOutcome::Cancelled;
            }
            Ok(UiEvent::Finished) => {
                bar.finish_and_clear();
                return InstallOutcome::Ready;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                // Worker died without a terminal event.
                bar.finish_and_clear();
                eprintln!(
                    "{} the installer stopped unexpectedly",
                    "error:".red().bold()
                );
                return InstallOutcome::Failed;
            }
        }
    }
}
