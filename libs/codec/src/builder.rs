//! # Message Encoding - Envelope to Wire Bytes
//!
//! ## Purpose
//!
//! Lays a [`Message`] out as contiguous bytes for the transport to write:
//!
//! ```text
//! ┌──────────────────────┬────────────────┬──────────────────────────────┐
//! │ id (raw, native)     │ size (u32)     │ body (verbatim)              │
//! │ ID_SIZE bytes        │ 4 bytes        │ size - SIZE bytes            │
//! └──────────────────────┴────────────────┴──────────────────────────────┘
//! ```
//!
//! Integers are written in native byte order. Peers must share the same
//! representation; the encoder does not normalize endianness.

use crate::error::{ProtocolError, ProtocolResult};
use netmsg_types::{Message, MessageHeader, MessageId, SIZE_FIELD_BYTES};
use tracing::trace;

/// Encode a message into a freshly allocated buffer of exactly `message.size()` bytes
pub fn encode_message<T: MessageId>(message: &Message<T>) -> Vec<u8> {
    let mut bytes = vec![0u8; message.size()];
    let size = write_message(message, &mut bytes);

    trace!(id = %message.header().raw_id(), size, "encoded message");
    bytes
}

/// Encode a message into a caller-provided buffer, returning the bytes written
pub fn encode_into_buffer<T: MessageId>(
    message: &Message<T>,
    buffer: &mut [u8],
) -> ProtocolResult<usize> {
    let size = message.size();
    if buffer.len() < size {
        return Err(ProtocolError::BufferTooSmall {
            need: size,
            got: buffer.len(),
        });
    }

    let written = write_message(message, buffer);
    trace!(id = %message.header().raw_id(), size = written, "encoded message into buffer");
    Ok(written)
}

/// Callers guarantee `buffer.len() >= message.size()`
fn write_message<T: MessageId>(message: &Message<T>, buffer: &mut [u8]) -> usize {
    let id_end = MessageHeader::<T>::ID_SIZE;
    let header_end = id_end + SIZE_FIELD_BYTES;
    let size = message.size();

    buffer[..id_end].copy_from_slice(bytemuck::bytes_of(&message.header().raw_id()));
    buffer[id_end..header_end].copy_from_slice(&message.header().size().to_ne_bytes());
    buffer[header_end..size].copy_from_slice(message.body());
    size
}
