//! Protocol constants
//!
//! These values define the envelope layout and must stay in sync between
//! every producer and consumer of a message.

use std::mem::size_of;

/// Width of the header size field
pub const SIZE_FIELD_BYTES: usize = size_of::<u32>();

/// Largest total message size (header + body) the u32 size field can record
pub const MAX_MESSAGE_SIZE: usize = u32::MAX as usize;
