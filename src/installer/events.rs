use std::sync::mpsc::Sender;

/// Events posted by the orchestrator thread for the presentation thread to
/// render. The channel preserves emission order; the transfer engine's rate
/// limit only reduces volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Status(String),
    Progress(u8),
    Failed(String),
    Cancelled,
    Finished,
}

/// Sending half of the UI channel. Send failures mean the presentation loop
/// is gone, in which case the worker has nobody left to report to and the
/// events are dropped on the floor.
#[derive(Clone)]
pub struct UiSink {
    events: Sender<UiEvent>,
}

impl UiSink {
    pub fn new(events: Sender<UiEvent>) -> UiSink {
        UiSink { events }
    }

    pub fn status(&self, text: impl Into<String>) {
        let _ = self.events.send(UiEvent::Status(text.into()));
    }

    pub fn progress(&self, percent: u8) {
        let _ = self.events.send(UiEvent::Progress(percent));
    }

    pub fn failed(&self, message: impl Into<String>) {
        let _ = self.events.send(UiEvent::Failed(message.into()));
    }

    pub fn cancelled(&self) {
        let _ = self.events.send(UiEvent::Cancelled);
    }

    pub fn finished(&self) {
        let _ = self.events.send(UiEvent::Finished);
    }
}
