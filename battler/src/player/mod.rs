pub mod combatant;
pub mod health;

pub use combatant::*;
pub use health::*;
