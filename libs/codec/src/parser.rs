//! # Message Parser - Wire Bytes to Envelope
//!
//! ## Purpose
//!
//! Rebuilds a [`Message`] from one complete message handed over by the
//! transport. Every field read off the wire is checked before it is trusted:
//!
//! - the buffer must hold a full header
//! - the discriminant must map to a variant of `T`
//! - the size field must cover at least the header, stay under the configured
//!   limit, and agree with the number of bytes supplied
//!
//! Splitting a byte stream into messages is the transport's job. It can use
//! [`declared_size`] on the first `MessageHeader::<T>::SIZE` bytes to learn how
//! many bytes belong to the next message.

use crate::config::CodecConfig;
use crate::error::{ProtocolError, ProtocolResult};
use netmsg_types::{Message, MessageHeader, MessageId, MAX_MESSAGE_SIZE};
use tracing::{debug, warn};

/// Parse and validate a message header from the start of `data`
pub fn parse_header<T: MessageId>(data: &[u8]) -> ProtocolResult<MessageHeader<T>> {
    let id_end = MessageHeader::<T>::ID_SIZE;
    let header_end = MessageHeader::<T>::SIZE;

    if data.len() < header_end {
        return Err(ProtocolError::message_too_small(
            header_end,
            data.len(),
            "MessageHeader parsing",
        ));
    }

    let raw = bytemuck::pod_read_unaligned::<T::Repr>(&data[..id_end]);
    let id = T::from_repr(raw).ok_or_else(|| {
        warn!(raw = %raw, "rejecting message with unknown id");
        ProtocolError::unknown_message_id::<T>(raw)
    })?;

    let declared = u32::from_ne_bytes(bytemuck::pod_read_unaligned(&data[id_end..header_end]));
    if (declared as usize) < header_end {
        warn!(declared, min = header_end, "rejecting header with undersized size field");
        return Err(ProtocolError::InvalidDeclaredSize {
            declared,
            min: header_end,
        });
    }

    Ok(MessageHeader::from_wire(id, declared))
}

/// Total size of the message whose header starts `data`
pub fn declared_size<T: MessageId>(data: &[u8]) -> ProtocolResult<usize> {
    parse_header::<T>(data).map(|header| header.size() as usize)
}

/// Decode exactly one message, applying only the wire format's own limits
///
/// Accepts anything [`encode_message`](crate::encode_message) can produce.
/// Use [`MessageCodec`](crate::MessageCodec) to enforce a deployment limit.
pub fn decode_message<T: MessageId>(data: &[u8]) -> ProtocolResult<Message<T>> {
    let wire_limits = CodecConfig {
        max_message_size: MAX_MESSAGE_SIZE,
        allow_trailing_bytes: false,
    };
    decode_with_config(data, &wire_limits)
}

pub(crate) fn decode_with_config<T: MessageId>(
    data: &[u8],
    config: &CodecConfig,
) -> ProtocolResult<Message<T>> {
    let header = parse_header::<T>(data)?;
    let declared = header.size() as usize;

    if declared > config.max_message_size {
        warn!(
            declared,
            max = config.max_message_size,
            "rejecting oversized message"
        );
        return Err(ProtocolError::MessageTooLarge {
            size: declared,
            max: config.max_message_size,
        });
    }

    let trailing_ok = config.allow_trailing_bytes && data.len() > declared;
    if data.len() != declared && !trailing_ok {
        warn!(declared, actual = data.len(), "rejecting message with size mismatch");
        return Err(ProtocolError::size_mismatch(declared, data.len()));
    }

    let body = data[MessageHeader::<T>::SIZE..declared].to_vec();
    let message = Message::from_parts(header.id, body)?;

    debug!(
        id = %header.raw_id(),
        size = declared,
        ignored = data.len() - declared,
        "decoded message"
    );
    Ok(message)
}
