//! Protocol layer: wire-level constants and the message envelope

pub mod constants;
pub mod message;

pub use constants::*;
pub use message::*;
