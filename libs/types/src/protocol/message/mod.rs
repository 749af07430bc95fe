//! # Message Structure and Header Definitions
//!
//! ## Purpose
//!
//! Defines the message envelope exchanged between peers: a typed header and a
//! variable-length body that values are pushed into and popped out of.
//!
//! ## Architecture Role
//!
//! ```text
//! Application Layer → [Message<T>] → codec → Transport Layer
//!                          ↓
//!     ┌──────────────────────────────────────────┐
//!     │ id (size_of::<T::Repr>()) │ size (u32)    │
//!     ├──────────────────────────────────────────┤
//!     │ body: pushed values, lowest offset first │
//!     └──────────────────────────────────────────┘
//! ```
//!
//! ## The LIFO Contract
//!
//! The body is a byte stack and carries no field tags. Producer and consumer
//! must agree on the exact sequence of types:
//!
//! ```text
//! producer:  push(a) → push(b) → push(c)      body = a | b | c
//! consumer:  pop::<C>() → pop::<B>() → pop::<A>()
//! ```
//!
//! Popping in push order, or with different types, silently returns garbage.
//! Nothing in the envelope can detect it, so message schemas should be
//! documented next to the discriminant they belong to.
//!
//! ## Size Bookkeeping
//!
//! `header.size()` always equals `MessageHeader::<T>::SIZE + body.len()`. A fresh
//! message therefore reports exactly the header size.
//!
//! ## Error Handling
//!
//! - **Compile time**: pushing a type that is not `NoUninit`, or popping one
//!   that is not `CheckedBitPattern`, does not build
//! - **BufferUnderflow**: pop asked for more bytes than the body holds
//! - **InvalidBitPattern**: tail bytes are not a valid value (e.g. a `bool`
//!   that is neither 0 nor 1)
//! - **MessageTooLarge**: the u32 size field cannot describe the message
//!
//! Failed pops leave the message exactly as it was.
//!
//! ## Portability
//!
//! Values are copied byte for byte in native representation. Both ends must
//! share endianness and struct layout; there is no canonical encoding.
//!
//! ## Module Structure
//!
//! - [`header`] - discriminant trait and header layout
//! - [`envelope`] - the message container and push/pop protocol

pub mod envelope;
pub mod header;

pub use envelope::Message;
pub use header::{MessageHeader, MessageId};
