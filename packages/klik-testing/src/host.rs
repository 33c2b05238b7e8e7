use klik_core::Host;

/// Host implementation that records every notification instead of showing it.
#[derive(Debug, Default)]
pub struct RecordingHost {
    messages: Vec<String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages passed to `alert`, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn call_count(&self) -> usize {
        self.messages.len()
    }
}

impl Host for RecordingHost {
    fn alert(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
