//! The id-only fallback naming policy.

use tracing::debug;

use super::error::NamerError;
use super::traits::TicketNamer;
use crate::ticket::Ticket;

/// Names the directory after the ticket id alone, ignoring the title.
///
/// This is the safe fallback a host can switch to when a richer policy
/// fails: the id is assumed filesystem-safe, so no sanitization is needed
/// and uniqueness still holds.
#[derive(Debug, Clone)]
pub struct IdOnlyNamer {
    separator: char,
}

impl IdOnlyNamer {
    pub fn new() -> Self {
        Self {
            separator: std::path::MAIN_SEPARATOR,
        }
    }

    /// Sets the path separator used when a base directory is supplied.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

impl Default for IdOnlyNamer {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketNamer for IdOnlyNamer {
    fn policy_name(&self) -> &'static str {
        "id_only"
    }

    fn generate_name(
        &self,
        ticket: &Ticket,
        base_dir: Option<&str>,
    ) -> Result<String, NamerError> {
        if ticket.id.is_empty() {
            return Err(NamerError::invalid_input(
                "ticket id is required to generate a directory name",
            ));
        }

        debug!(ticket_id = %ticket.id, "generating id-only directory name");

        Ok(match base_dir {
            Some(base) => format!("{base}{}{}", self.separator, ticket.id),
            None => ticket.id.clone(),
        })
    }
}
