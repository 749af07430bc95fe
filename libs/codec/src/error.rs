//! Protocol-level errors for message encoding and decoding
//!
//! Each variant carries the sizes involved so a failed decode can be traced
//! back to the transport read that produced it.

use netmsg_types::MessageError;
use std::fmt;
use thiserror::Error;

/// Wire encoding/decoding errors with diagnostic context
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProtocolError {
    /// Buffer is too small to contain the expected structure
    #[error("Message too small: need {need} bytes, got {got} (context: {context})")]
    MessageTooSmall {
        need: usize,
        got: usize,
        context: String,
    },

    /// Header size field is smaller than the header itself
    #[error("Invalid declared size {declared}: a message is at least {min} bytes")]
    InvalidDeclaredSize { declared: u32, min: usize },

    /// Header size field disagrees with the bytes handed to the decoder
    #[error("Size mismatch: header declares {declared} bytes, buffer has {actual} (indicates: {diagnosis})")]
    SizeMismatch {
        declared: usize,
        actual: usize,
        diagnosis: String,
    },

    /// Discriminant bytes do not match any variant of the message type
    #[error("Unknown message id {raw} for {type_name}")]
    UnknownMessageId {
        raw: String,
        type_name: &'static str,
    },

    /// Message exceeds the configured size limit
    #[error("Message too large: {size} bytes exceeds maximum {max}")]
    MessageTooLarge { size: usize, max: usize },

    /// Output buffer cannot hold the encoded message
    #[error("Buffer too small: need {need} bytes, got {got}")]
    BufferTooSmall { need: usize, got: usize },

    /// Body could not be assembled into a message
    #[error(transparent)]
    Message(#[from] MessageError),
}

impl ProtocolError {
    /// Create MessageTooSmall error with diagnostic context
    pub fn message_too_small(need: usize, got: usize, context: impl Into<String>) -> Self {
        Self::MessageTooSmall {
            need,
            got,
            context: context.into(),
        }
    }

    /// Create SizeMismatch error, guessing what went wrong on the transport
    pub fn size_mismatch(declared: usize, actual: usize) -> Self {
        let diagnosis = if (declared as u32).swap_bytes() as usize == actual {
            "byte order (endianness) mismatch between peers"
        } else if actual < declared {
            "partial read - transport delivered an incomplete message"
        } else {
            "trailing bytes - transport delivered more than one message"
        };

        Self::SizeMismatch {
            declared,
            actual,
            diagnosis: diagnosis.to_string(),
        }
    }

    /// Create UnknownMessageId error for discriminant type `T`
    pub fn unknown_message_id<T>(raw: impl fmt::Display) -> Self {
        Self::UnknownMessageId {
            raw: raw.to_string(),
            type_name: std::any::type_name::<T>(),
        }
    }
}

/// Result type for protocol operations
pub type ProtocolResult<T> = std::result::Result<T, ProtocolError>;
