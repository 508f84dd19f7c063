//! Mock namer for testing.

use std::sync::Mutex;

use crate::namer::{NamerError, TicketNamer};
use crate::ticket::Ticket;

/// A recorded naming call for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// The ticket the name was requested for.
    pub ticket: Ticket,
    /// The base directory supplied, if any.
    pub base_dir: Option<String>,
}

/// Mock implementation of the [`TicketNamer`] trait.
///
/// Provides controllable behavior for testing:
/// - Track naming calls for assertions
/// - Return a canned name instead of deriving one
/// - Simulate a failure on the next call
///
/// Uses std `Mutex` internally since the trait is sync; the mock stays
/// `Send + Sync` like the real policies.
#[derive(Debug, Default)]
pub struct MockNamer {
    /// Recorded calls.
    calls: Mutex<Vec<RecordedCall>>,
    /// If set, returned instead of the derived name.
    canned_name: Mutex<Option<String>>,
    /// If set, the next call will fail with this error.
    next_error: Mutex<Option<NamerError>>,
}

impl MockNamer {
    /// Create a new mock namer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls.
    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of calls performed.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Clear recorded calls.
    pub fn clear_recorded_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Configure a fixed name to return for every call.
    pub fn set_canned_name(&self, name: impl Into<String>) {
        *self.canned_name.lock().unwrap() = Some(name.into());
    }

    /// Configure the next call to fail with the given error.
    pub fn set_next_error(&self, error: NamerError) {
        *self.next_error.lock().unwrap() = Some(error);
    }
}

impl TicketNamer for MockNamer {
    fn policy_name(&self) -> &'static str {
        "mock"
    }

    fn generate_name(
        &self,
        ticket: &Ticket,
        base_dir: Option<&str>,
    ) -> Result<String, NamerError> {
        self.calls.lock().unwrap().push(RecordedCall {
            ticket: ticket.clone(),
            base_dir: base_dir.map(str::to_string),
        });

        if let Some(error) = self.next_error.lock().unwrap().take() {
            return Err(error);
        }

        let name = match self.canned_name.lock().unwrap().clone() {
            Some(canned) => canned,
            None => format!("{}_mock", ticket.id),
        };

        Ok(match base_dir {
            Some(base) => format!("{base}{}{name}", std::path::MAIN_SEPARATOR),
            None => name,
        })
    }
}
