use skill_prune::prelude::*;
use std::sync::{Arc, Mutex};

/// Records per-row progress, warnings and the completion summary
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    fn record(&self, message: String) {
        self.messages.lock().unwrap().push(message);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, _message: &str) {}

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.record(format!(
            "Progress: {}/{} - {}",
            current,
            total,
            message.unwrap_or_default()
        ));
    }

    fn report_error(&self, message: &str) {
        self.record(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.record(format!("Completed: {}", message));
    }
}
