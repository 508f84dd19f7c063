//! Trait definitions for the namer module.

use super::error::NamerError;
use crate::ticket::Ticket;

/// A naming policy that derives the directory path for a ticket's artifacts.
///
/// Implementations must be pure: the same `(ticket, base_dir)` pair always
/// yields the identical string, with no randomness, no clock reads, and no
/// state shared between calls. Derivation is synchronous and bounded by
/// input length, so the trait is sync; `Send + Sync` lets a host share one
/// policy object across worker tasks.
pub trait TicketNamer: Send + Sync {
    /// Name of this naming policy.
    fn policy_name(&self) -> &'static str;

    /// Derives the path under which the ticket's artifacts will be stored.
    ///
    /// With `base_dir` absent the result is a bare path segment; with it
    /// present the segment is prefixed with `base_dir` and the platform
    /// separator. The caller creates the directory, not this trait.
    fn generate_name(
        &self,
        ticket: &Ticket,
        base_dir: Option<&str>,
    ) -> Result<String, NamerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedNamer;

    impl TicketNamer for FixedNamer {
        fn policy_name(&self) -> &'static str {
            "fixed"
        }

        fn generate_name(
            &self,
            ticket: &Ticket,
            base_dir: Option<&str>,
        ) -> Result<String, NamerError> {
            let name = format!("{}_fixed", ticket.id);
            Ok(match base_dir {
                Some(base) => format!("{base}/{name}"),
                None => name,
            })
        }
    }

    #[test]
    fn test_trait_object_dispatch() {
        let namer: Box<dyn TicketNamer> = Box::new(FixedNamer);
        let ticket = Ticket::new("artf1", "whatever");

        assert_eq!(namer.policy_name(), "fixed");
        assert_eq!(namer.generate_name(&ticket, None).unwrap(), "artf1_fixed");
        assert_eq!(
            namer.generate_name(&ticket, Some("/base")).unwrap(),
            "/base/artf1_fixed"
        );
    }
}
