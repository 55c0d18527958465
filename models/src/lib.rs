pub mod action;
pub mod card;
pub mod data;
pub mod side;

pub use action::*;
pub use card::*;
pub use data::*;
pub use side::*;
