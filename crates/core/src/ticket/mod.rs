//! Tickets: work items whose downloaded artifacts need a directory.

mod types;

pub use types::Ticket;
