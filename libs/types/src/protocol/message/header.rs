//! Message Header Implementation
//!
//! The header is identical in shape for every message of a given discriminant
//! type: a typed identifier followed by the total message size.

use crate::protocol::constants::SIZE_FIELD_BYTES;
use bytemuck::Pod;
use num_enum::TryFromPrimitive;
use std::fmt;
use std::mem::size_of;

/// Discriminant carried in the `id` field of every [`MessageHeader`]
///
/// The header layout must not depend on the discriminant's value, only on its
/// storage width, so identifiers are restricted to enums backed by a
/// fixed-width integer. Any enum deriving `num_enum`'s `TryFromPrimitive` and
/// `IntoPrimitive` picks this trait up automatically:
///
/// ```
/// use num_enum::{IntoPrimitive, TryFromPrimitive};
///
/// #[repr(u32)]
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
/// enum GameMessage {
///     FireBullet = 0,
///     MovePlayer = 1,
/// }
///
/// impl Default for GameMessage {
///     fn default() -> Self {
///         GameMessage::FireBullet
///     }
/// }
///
/// let header = netmsg_types::MessageHeader::<GameMessage>::default();
/// assert_eq!(header.id, GameMessage::FireBullet);
/// ```
pub trait MessageId: Copy + Default + fmt::Debug {
    /// Integer storage of the discriminant, copied verbatim onto the wire
    type Repr: Pod + fmt::Display;

    /// Underlying integer value of this discriminant
    fn to_repr(self) -> Self::Repr;

    /// Map a raw integer back to a discriminant, `None` if no variant matches
    fn from_repr(repr: Self::Repr) -> Option<Self>;
}

impl<E> MessageId for E
where
    E: TryFromPrimitive + Copy + Default + fmt::Debug,
    E::Primitive: Pod + fmt::Display + From<E>,
{
    type Repr = E::Primitive;

    #[inline]
    fn to_repr(self) -> Self::Repr {
        self.into()
    }

    #[inline]
    fn from_repr(repr: Self::Repr) -> Option<Self> {
        E::try_from_primitive(repr).ok()
    }
}

/// Message Header
///
/// ```text
/// ┌──────────────────────┬────────────────┬─────────────────────────┐
/// │ id                   │ size           │ body                    │
/// │ (size_of::<Repr>())  │ (4 bytes, u32) │ (size - SIZE bytes)     │
/// └──────────────────────┴────────────────┴─────────────────────────┘
/// ```
///
/// `size` counts the header itself plus the body. It can only be written by
/// the owning [`Message`](super::Message), which keeps it synchronized after
/// every push and pop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageHeader<T: MessageId> {
    /// Semantic type of the message
    pub id: T,
    size: u32,
}

impl<T: MessageId> MessageHeader<T> {
    /// Width of the discriminant on the wire
    pub const ID_SIZE: usize = size_of::<T::Repr>();

    /// Header size in bytes: discriminant followed by the u32 size field
    pub const SIZE: usize = Self::ID_SIZE + SIZE_FIELD_BYTES;

    /// Total message size (header + body) recorded in this header
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Body length implied by the recorded size
    ///
    /// Zero for a standalone header whose size has never been synchronized.
    #[inline]
    pub fn body_len(&self) -> usize {
        (self.size as usize).saturating_sub(Self::SIZE)
    }

    /// Underlying integer value of the discriminant
    #[inline]
    pub fn raw_id(&self) -> T::Repr {
        self.id.to_repr()
    }

    pub(crate) fn set_size(&mut self, size: u32) {
        self.size = size;
    }

    /// Rebuild a header from fields read off the wire
    ///
    /// The caller is responsible for checking that `size` is consistent with
    /// the body it will be attached to; [`Message::from_parts`](super::Message::from_parts)
    /// recomputes it regardless.
    pub fn from_wire(id: T, size: u32) -> Self {
        Self { id, size }
    }
}

impl<T: MessageId> fmt::Display for MessageHeader<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID:{} Size:{}", self.id.to_repr(), self.size)
    }
}
