//! Testing utilities and mock implementations.
//!
//! Provides a mock [`TicketNamer`](crate::namer::TicketNamer) so hosts can
//! test their artifact-download flow without caring about the concrete
//! naming policy, plus fixture constructors for tickets.

mod mock_namer;

pub use mock_namer::{MockNamer, RecordedCall};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::ticket::Ticket;

    /// Create a test ticket with just an id and title.
    pub fn ticket(id: &str, title: &str) -> Ticket {
        Ticket::new(id, title)
    }

    /// Create a test ticket with the full field set populated.
    pub fn tracked_ticket(id: &str, title: &str, kpm: u64) -> Ticket {
        Ticket::new(id, title)
            .with_kpm(kpm)
            .with_url(format!("https://forge.example.com/{id}"))
            .with_tracker("defects")
    }
}
