//! The default underscore naming policy.

use tracing::{debug, trace};

use super::error::NamerError;
use super::sanitize::{collapse_whitespace, lowercase, strip_punctuation, PunctuationClass};
use super::traits::TicketNamer;
use crate::ticket::Ticket;

/// Derives `id_cleaned_title` names: the title is trimmed, de-punctuated,
/// whitespace-collapsed, joined with underscores and lowercased, then
/// prefixed with the ticket id.
///
/// Every knob has a builder setter; the default configuration reproduces
/// the classic scheme:
///
/// ```
/// use ticketino_core::{Ticket, TicketNamer, UnderscoreNamer};
///
/// let namer = UnderscoreNamer::new();
/// let ticket = Ticket::new("artf74149", "[Screen] The buttons are not visible");
///
/// let name = namer.generate_name(&ticket, None).unwrap();
/// assert_eq!(name, "artf74149_screen_the_buttons_are_not_visible");
/// ```
#[derive(Debug, Clone)]
pub struct UnderscoreNamer {
    punctuation: PunctuationClass,
    join: String,
    lowercase: bool,
    separator: char,
}

impl Default for UnderscoreNamer {
    fn default() -> Self {
        Self::new()
    }
}

impl UnderscoreNamer {
    /// Creates the policy with the default knobs: ASCII punctuation
    /// stripping, `_` join token, lowercasing on, platform separator.
    pub fn new() -> Self {
        Self {
            punctuation: PunctuationClass::Ascii,
            join: "_".to_string(),
            lowercase: true,
            separator: std::path::MAIN_SEPARATOR,
        }
    }

    /// Sets the punctuation class stripped from titles.
    pub fn with_punctuation(mut self, class: PunctuationClass) -> Self {
        self.punctuation = class;
        self
    }

    /// Sets the token that joins the id to the title and replaces spaces.
    pub fn with_join(mut self, join: impl Into<String>) -> Self {
        self.join = join.into();
        self
    }

    /// Enables or disables lowercasing of the sanitized title.
    pub fn with_lowercase(mut self, enabled: bool) -> Self {
        self.lowercase = enabled;
        self
    }

    /// Sets the path separator used when a base directory is supplied.
    /// Defaults to the platform separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Runs the title sanitization pipeline. Order matters: punctuation
    /// stripping and whitespace collapsing must happen before the join
    /// replacement, otherwise stray separators leak through.
    fn clean_title(&self, title: &str) -> String {
        let trimmed = title.trim();
        let stripped = strip_punctuation(trimmed, &self.punctuation);
        let collapsed = collapse_whitespace(&stripped);
        let joined = collapsed.replace(' ', &self.join);
        if self.lowercase {
            lowercase(&joined)
        } else {
            joined
        }
    }
}

impl TicketNamer for UnderscoreNamer {
    fn policy_name(&self) -> &'static str {
        "underscore"
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

        debug!(ticket_id = %ticket.id, "generating directory name");
        if let Some(base) = base_dir {
            trace!(base_dir = %base, "base directory in use");
        }

        let cleaned = self.clean_title(&ticket.title);
        let name = format!("{}{}{}", ticket.id, self.join, cleaned);

        Ok(match base_dir {
            Some(base) => format!("{base}{}{name}", self.separator),
            None => name,
        })
    }
}
