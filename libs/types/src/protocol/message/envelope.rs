//! Message envelope: one header plus a body that behaves as a byte stack
//!
//! Values go in with [`Message::push`] and come out with [`Message::pop`].
//! Both operate on the tail of the body, so pops must mirror pushes in
//! reverse order.

use super::header::{MessageHeader, MessageId};
use crate::common::errors::{MessageError, MessageResult};
use crate::protocol::constants::MAX_MESSAGE_SIZE;
use bytemuck::checked::{self, CheckedCastError};
use bytemuck::{CheckedBitPattern, NoUninit};
use std::fmt;
use std::mem::size_of;
use tracing::trace;

/// Typed message: header plus raw body
///
/// The header's size field always equals `MessageHeader::<T>::SIZE + body.len()`.
/// Every method that changes the body resynchronizes it before returning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message<T: MessageId> {
    header: MessageHeader<T>,
    body: Vec<u8>,
}

impl<T: MessageId> Default for Message<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MessageId> Message<T> {
    /// Empty message with the default discriminant
    pub fn new() -> Self {
        Self::with_id(T::default())
    }

    /// Empty message with the given discriminant
    pub fn with_id(id: T) -> Self {
        Self::with_capacity(id, 0)
    }

    /// Empty message with room for `capacity` body bytes before reallocating
    pub fn with_capacity(id: T, capacity: usize) -> Self {
        let mut message = Self {
            header: MessageHeader::from_wire(id, 0),
            body: Vec::with_capacity(capacity),
        };
        message.sync_size();
        message
    }

    /// Assemble a message from a discriminant and an already serialized body
    ///
    /// The size field is derived from `body`, never taken on trust.
    pub fn from_parts(id: T, body: Vec<u8>) -> MessageResult<Self> {
        Self::checked_size(body.len())?;

        let mut message = Self {
            header: MessageHeader::from_wire(id, 0),
            body,
        };
        message.sync_size();
        Ok(message)
    }

    /// Total size in bytes: header layout plus current body length
    #[inline]
    pub fn size(&self) -> usize {
        MessageHeader::<T>::SIZE + self.body.len()
    }

    #[inline]
    pub fn id(&self) -> T {
        self.header.id
    }

    pub fn set_id(&mut self, id: T) -> &mut Self {
        self.header.id = id;
        self
    }

    #[inline]
    pub fn header(&self) -> &MessageHeader<T> {
        &self.header
    }

    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    #[inline]
    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    /// True when the body holds no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Drop the whole body, keeping the discriminant
    pub fn clear(&mut self) -> &mut Self {
        self.body.clear();
        self.sync_size();
        self
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Append the raw bytes of `value` to the tail of the body
    ///
    /// Only plain-data types (no padding, no pointers) satisfy `NoUninit`, so
    /// anything else is rejected at compile time. Returns `self` so pushes
    /// chain left to right: `msg.push(&a).push(&b)` lays out `a` then `b`.
    ///
    /// # Panics
    ///
    /// Panics if the message would outgrow the u32 size field. Use
    /// [`try_push`](Self::try_push) to handle that case.
    pub fn push<V: NoUninit>(&mut self, value: &V) -> &mut Self {
        match self.try_push(value) {
            Ok(message) => message,
            Err(err) => panic!("cannot push {}: {}", std::any::type_name::<V>(), err),
        }
    }

    /// Fallible [`push`](Self::push)
    pub fn try_push<V: NoUninit>(&mut self, value: &V) -> MessageResult<&mut Self> {
        self.append(bytemuck::bytes_of(value))
    }

    /// Append a contiguous run of values, first element at the lowest offset
    ///
    /// The run can be popped back in one go as an array `[V; N]`.
    ///
    /// # Panics
    ///
    /// Same as [`push`](Self::push).
    pub fn push_slice<V: NoUninit>(&mut self, values: &[V]) -> &mut Self {
        match self.append(bytemuck::cast_slice(values)) {
            Ok(message) => message,
            Err(err) => panic!("cannot push [{}]: {}", std::any::type_name::<V>(), err),
        }
    }

    /// Remove the value at the tail of the body
    ///
    /// Reads the last `size_of::<V>()` bytes and truncates them. The body is a
    /// stack: the value pushed last is the one popped first. Popping types in
    /// any other order yields well-formed but meaningless values; there is no
    /// tagging in the body to detect it.
    ///
    /// On error the message is left untouched.
    pub fn pop<V: CheckedBitPattern>(&mut self) -> MessageResult<V> {
        let value = self.peek::<V>()?;
        let remaining = self.body.len() - size_of::<V>();
        self.body.truncate(remaining);
        self.sync_size();
        Ok(value)
    }

    /// [`pop`](Self::pop) into an existing slot, returning `self` for chaining
    ///
    /// ```
    /// # use num_enum::{IntoPrimitive, TryFromPrimitive};
    /// # #[repr(u8)]
    /// # #[derive(Debug, Clone, Copy, IntoPrimitive, TryFromPrimitive)]
    /// # enum Kind { Data = 0 }
    /// # impl Default for Kind { fn default() -> Self { Kind::Data } }
    /// use netmsg_types::Message;
    ///
    /// let mut msg = Message::<Kind>::new();
    /// msg.push(&1i32).push(&true);
    ///
    /// let (mut a, mut b) = (0i32, false);
    /// msg.pop_into(&mut b)?.pop_into(&mut a)?;
    /// assert_eq!((a, b), (1, true));
    /// # Ok::<(), netmsg_types::MessageError>(())
    /// ```
    pub fn pop_into<V: CheckedBitPattern>(&mut self, out: &mut V) -> MessageResult<&mut Self> {
        *out = self.pop()?;
        Ok(self)
    }

    /// Read the value at the tail of the body without removing it
    pub fn peek<V: CheckedBitPattern>(&self) -> MessageResult<V> {
        let available = self.body.len();
        let Some(start) = available.checked_sub(size_of::<V>()) else {
            trace!(
                need = size_of::<V>(),
                available,
                "pop rejected: buffer underflow"
            );
            return Err(MessageError::underflow::<V>(available));
        };

        checked::try_pod_read_unaligned::<V>(&self.body[start..]).map_err(|err| match err {
            CheckedCastError::InvalidBitPattern => {
                trace!(size = size_of::<V>(), "pop rejected: invalid bit pattern");
                MessageError::invalid_bit_pattern::<V>()
            }
            _ => MessageError::underflow::<V>(available),
        })
    }

    fn append(&mut self, bytes: &[u8]) -> MessageResult<&mut Self> {
        Self::checked_size(self.body.len().saturating_add(bytes.len()))?;

        self.body.extend_from_slice(bytes);
        self.sync_size();
        Ok(self)
    }

    /// Total size for a body of `body_len` bytes, if it fits the size field
    fn checked_size(body_len: usize) -> MessageResult<usize> {
        match MessageHeader::<T>::SIZE.checked_add(body_len) {
            Some(size) if size <= MAX_MESSAGE_SIZE => Ok(size),
            size => Err(MessageError::MessageTooLarge {
                size: size.unwrap_or(usize::MAX),
                max: MAX_MESSAGE_SIZE,
            }),
        }
    }

    fn sync_size(&mut self) {
        // Growth paths reject anything above MAX_MESSAGE_SIZE, so this fits
        self.header.set_size(self.size() as u32);
    }
}

impl<T: MessageId> fmt::Display for Message<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.header, f)
    }
}
