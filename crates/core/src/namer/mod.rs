//! Ticket-to-directory-name derivation.
//!
//! The host application downloads a ticket's artifacts into a directory
//! whose path is derived here. Derivation is a pure function of the ticket
//! and an optional base directory, exposed behind the [`TicketNamer`] trait
//! so the policy can be swapped per deployment: pick a built-in through
//! [`create_namer`], or inject any custom `TicketNamer` implementation in
//! its place.

mod config;
mod error;
mod id_only;
mod sanitize;
mod traits;
mod underscore;

pub use config::{namer_config_from_str, NamerConfig, NamingPolicy, UnderscoreConfig};
pub use error::NamerError;
pub use id_only::IdOnlyNamer;
pub use sanitize::{collapse_whitespace, lowercase, strip_punctuation, PunctuationClass};
pub use traits::TicketNamer;
pub use underscore::UnderscoreNamer;

use tracing::debug;

/// Factory function to create a naming policy from config
pub fn create_namer(config: &NamerConfig) -> Result<Box<dyn TicketNamer>, NamerError> {
    match config.policy {
        NamingPolicy::IdOnly => {
            debug!(policy = "id_only", "naming policy selected");
            Ok(Box::new(IdOnlyNamer::new()))
        }
        NamingPolicy::Underscore => {
            let opts = config.underscore.clone().unwrap_or_default();

            if let PunctuationClass::Chars { chars } = &opts.punctuation {
                if chars.is_empty() {
                    return Err(NamerError::configuration(
                        "punctuation class \"chars\" must list at least one character",
                    ));
                }
            }
            if opts.join.chars().any(char::is_whitespace) {
                return Err(NamerError::configuration(
                    "join token must not contain whitespace",
                ));
            }
            if opts.join.contains(std::path::MAIN_SEPARATOR) {
                return Err(NamerError::configuration(
                    "join token must not contain the path separator",
                ));
            }

            debug!(policy = "underscore", join = %opts.join, "naming policy selected");
            Ok(Box::new(
                UnderscoreNamer::new()
                    .with_join(opts.join)
                    .with_lowercase(opts.lowercase)
                    .with_punctuation(opts.punctuation),
            ))
        }
    }
}
