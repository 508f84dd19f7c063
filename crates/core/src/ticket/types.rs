//! Core ticket data types.

use serde::{Deserialize, Serialize};

/// A work item from an external issue tracker.
///
/// Tickets are read-only inputs to the naming policies: the generator never
/// mutates one and holds no state between calls. Only `id` and `title`
/// participate in name derivation; the remaining fields are carried for the
/// host application's bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    /// Stable unique identifier (e.g. "artf74149"). Assumed already
    /// filesystem-safe. An empty id is treated as absent.
    pub id: String,

    /// Free-form human-written title. Arbitrary Unicode; may carry
    /// punctuation, whitespace runs, and leading/trailing whitespace.
    /// Absent on the wire deserializes to the empty string.
    #[serde(default)]
    pub title: String,

    /// Numeric identifier from the upstream tracker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kpm: Option<u64>,

    /// URL of the ticket in the upstream tracker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Name of the tracker the ticket came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracker: Option<String>,
}

impl Ticket {
    /// Creates a ticket with the given id and title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kpm: None,
            url: None,
            tracker: None,
        }
    }

    /// Sets the KPM number.
    pub fn with_kpm(mut self, kpm: u64) -> Self {
        self.kpm = Some(kpm);
        self
    }

    /// Sets the tracker URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the tracker name.
    pub fn with_tracker(mut self, tracker: impl Into<String>) -> Self {
        self.tracker = Some(tracker.into());
        self
    }
}
