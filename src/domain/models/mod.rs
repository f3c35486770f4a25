mod action;
mod author;
mod backend;
mod event;
mod message;

pub use action::*;
pub use author::*;
pub use backend::*;
pub use event::*;
pub use message::*;
