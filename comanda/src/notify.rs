//! User-visible notices
//!
//! The flow emits exactly two alert-style notices: menu-load failure and
//! the end-of-flow thank-you. They go through an injected [`Notifier`] so
//! no component is tied to a particular presentation surface.

use std::sync::{Arc, Mutex};

/// Notice shown when the menu endpoint cannot be loaded
pub const MENU_FAILURE_NOTICE: &str = "Failed to load menu. See logs for details.";

/// Terminal notice shown after a successful payment
pub const THANK_YOU_NOTICE: &str = "Thank you for eating with us today!";

/// Sink for user-visible notices
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Prints notices to stdout and mirrors them into the log
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        println!("🔔 {message}");
        tracing::info!(notice = %message, "User notice");
    }
}

/// Records notices for tests
///
/// Clones share the same backing list.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received so far, in emission order
    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().expect("notifier poisoned").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.notices
            .lock()
            .expect("notifier poisoned")
            .push(message.to_string());
    }
}
