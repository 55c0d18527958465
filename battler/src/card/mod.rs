pub mod base_card;
pub mod id;
pub mod upgrade;

pub use base_card::*;
pub use id::*;
pub use upgrade::*;
