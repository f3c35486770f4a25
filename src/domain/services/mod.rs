pub mod actions;

mod conversation;
mod identity;

pub use conversation::*;
pub use identity::*;
