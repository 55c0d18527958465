pub mod battle;
pub mod card;
pub mod deck;
pub mod dispatch;
pub mod enemy;
pub mod event;
pub mod outcome;
pub mod player;
pub mod profile;
pub mod resolver;
pub mod statics;
pub mod template;

pub use battle::*;
pub use card::*;
pub use deck::*;
pub use dispatch::*;
pub use enemy::*;
pub use event::*;
pub use outcome::*;
pub use player::*;
pub use profile::*;
pub use resolver::*;
pub use statics::*;
pub use template::*;
