//! # netmsg Codec - Wire Encoding for Typed Messages
//!
//! ## Purpose
//!
//! The "rules" layer between the message envelope and the transport:
//! - Encoding a [`Message`](netmsg_types::Message) into contiguous bytes
//! - Parsing and validating headers read off the wire
//! - Rebuilding a message from one complete byte sequence
//! - Configurable size limits shared by both directions
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [codec] → transport (external)
//!     ↑           ↓              ↓
//! Message<T>  encode/decode   socket reads
//! push/pop    size checks     and writes
//! ```
//!
//! ## What This Crate Does NOT Contain
//! - Connection handling or retries
//! - Splitting a byte stream into messages; [`declared_size`] exposes what a
//!   transport needs to do that itself
//! - Endianness normalization: the wire format is native representation
//!
//! ## Example
//!
//! ```rust
//! use netmsg_codec::{decode_message, encode_message};
//! use netmsg_types::Message;
//! use num_enum::{IntoPrimitive, TryFromPrimitive};
//!
//! #[repr(u32)]
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
//! enum Chat {
//!     Text = 1,
//! }
//!
//! impl Default for Chat {
//!     fn default() -> Self {
//!         Chat::Text
//!     }
//! }
//!
//! let mut outgoing = Message::<Chat>::new();
//! outgoing.push(&42u64);
//!
//! let bytes = encode_message(&outgoing);
//! let mut incoming = decode_message::<Chat>(&bytes)?;
//! assert_eq!(incoming.pop::<u64>()?, 42);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod codec;
pub mod config;
pub mod error;
pub mod parser;

pub use builder::{encode_into_buffer, encode_message};
pub use codec::MessageCodec;
pub use config::{CodecConfig, DEFAULT_MAX_MESSAGE_SIZE, MAX_MESSAGE_SIZE_ENV};
pub use error::{ProtocolError, ProtocolResult};
pub use parser::{declared_size, decode_message, parse_header};
