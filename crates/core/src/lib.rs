pub mod namer;
pub mod testing;
pub mod ticket;

pub use namer::{
    create_namer, namer_config_from_str, IdOnlyNamer, NamerConfig, NamerError, NamingPolicy,
    PunctuationClass, TicketNamer, UnderscoreConfig, UnderscoreNamer,
};
pub use ticket::Ticket;
