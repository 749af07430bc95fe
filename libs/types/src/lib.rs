//! # Typed Message Envelope
//!
//! Fixed-size header plus a raw byte body, with a stack-like push/pop
//! protocol for plain fixed-layout values.
//!
//! ## Design Philosophy
//!
//! - **Typed Discriminant**: the header `id` is an application enum backed by a
//!   fixed-width integer (see [`MessageId`])
//! - **Compile-Time Plain Data**: push and pop only accept `bytemuck` plain-data
//!   types; anything with pointers or padding is rejected by the type checker
//! - **Size Bookkeeping**: the header size field is derived from the body and
//!   cannot be set independently
//! - **Hardened Pops**: underflow and invalid bit patterns are recoverable
//!   errors, and a failed pop never modifies the message
//!
//! ## Quick Start
//!
//! ```rust
//! # #![allow(clippy::approx_constant)]
//! use netmsg_types::Message;
//! use num_enum::{IntoPrimitive, TryFromPrimitive};
//!
//! #[repr(u32)]
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
//! enum CustomMsgTypes {
//!     FireBullet,
//!     MovePlayer,
//! }
//!
//! impl Default for CustomMsgTypes {
//!     fn default() -> Self {
//!         CustomMsgTypes::FireBullet
//!     }
//! }
//!
//! let mut msg = Message::<CustomMsgTypes>::new();
//! msg.set_id(CustomMsgTypes::MovePlayer);
//! msg.push(&1i32).push(&true).push(&3.14159f32);
//!
//! // Reverse order of the pushes
//! let c: f32 = msg.pop()?;
//! let b: bool = msg.pop()?;
//! let a: i32 = msg.pop()?;
//! assert_eq!((a, b, c), (1, true, 3.14159));
//! # Ok::<(), netmsg_types::MessageError>(())
//! ```
//!
//! Turning a message into wire bytes and back lives in the codec crate.

pub mod common;
pub mod protocol;

pub use common::errors::{MessageError, MessageResult};
pub use protocol::constants::{MAX_MESSAGE_SIZE, SIZE_FIELD_BYTES};
pub use protocol::message::{Message, MessageHeader, MessageId};

// Plain-data traits accepted by push and pop, re-exported for deriving
pub use bytemuck::{CheckedBitPattern, NoUninit, Pod, Zeroable};
