//! Error types for message body push/pop operations
//!
//! The body of a message is a byte stack. Every failure mode here describes a
//! request the stack could not satisfy; none of them leave the message
//! partially modified.

use thiserror::Error;

/// Errors raised while pushing values into or popping values out of a message
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MessageError {
    /// Pop requested more bytes than the body holds
    #[error("Buffer underflow: need {need} bytes to pop {type_name}, body has {available}")]
    BufferUnderflow {
        need: usize,
        available: usize,
        type_name: &'static str,
    },

    /// Tail bytes are not a valid value of the requested type (e.g. `2u8` as `bool`)
    #[error("Invalid bit pattern: the last {size} bytes of the body are not a valid {type_name}")]
    InvalidBitPattern { type_name: &'static str, size: usize },

    /// Message would no longer fit in the u32 size field
    #[error("Message too large: {size} bytes exceeds maximum {max}")]
    MessageTooLarge { size: usize, max: usize },
}

impl MessageError {
    /// Underflow for a pop of `V`
    pub fn underflow<V>(available: usize) -> Self {
        Self::BufferUnderflow {
            need: std::mem::size_of::<V>(),
            available,
            type_name: std::any::type_name::<V>(),
        }
    }

    /// Invalid bit pattern for a pop of `V`
    pub fn invalid_bit_pattern<V>() -> Self {
        Self::InvalidBitPattern {
            type_name: std::any::type_name::<V>(),
            size: std::mem::size_of::<V>(),
        }
    }
}

/// Result type for message operations
pub type MessageResult<T> = std::result::Result<T, MessageError>;
