//! Context-specific tagging and nested streams.
//!
//! EXPLICIT and IMPLICIT modes differ only in whether the wrapped value
//! keeps its own TLV inside the context tag, so both are thin wrappers
//! parameterized by the tag number.

use super::schema::DerRead;
use super::types::OctetString;
use super::Header;
use crate::cursor::Cursor;
use pemder_types::DecodeError;

/// `[N] EXPLICIT T`: the context payload is a complete TLV of `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextExplicit<const N: u8, T>(pub T);

impl<const N: u8, T> ContextExplicit<N, T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<'a, const N: u8, T: DerRead<'a>> DerRead<'a> for ContextExplicit<N, T> {
    fn read(cur: &mut Cursor<'a>) -> Result<Self, DecodeError> {
        let header = Header::expect_context(cur, N)?;
        Self::read_value(cur, header.length)
    }

    fn read_value(cur: &mut Cursor<'a>, length: u32) -> Result<Self, DecodeError> {
        let payload = cur.take(length as usize)?;
        let mut sub = Cursor::new(payload);
        Ok(ContextExplicit(T::read(&mut sub)?))
    }
}

/// `[N] IMPLICIT T`: the context tag replaces `T`'s own tag, so the
/// payload bytes are `T`'s content directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextImplicit<const N: u8, T>(pub T);

impl<const N: u8, T> ContextImplicit<N, T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<'a, const N: u8, T: DerRead<'a>> DerRead<'a> for ContextImplicit<N, T> {
    fn read(cur: &mut Cursor<'a>) -> Result<Self, DecodeError> {
        let header = Header::expect_context(cur, N)?;
        Ok(ContextImplicit(T::read_value(cur, header.length)?))
    }

    fn read_value(cur: &mut Cursor<'a>, length: u32) -> Result<Self, DecodeError> {
        Ok(ContextImplicit(T::read_value(cur, length)?))
    }
}

/// An OCTET STRING whose payload is itself a DER stream of `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nested<T>(pub T);

impl<T> Nested<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<'a, T: DerRead<'a>> DerRead<'a> for Nested<T> {
    fn read(cur: &mut Cursor<'a>) -> Result<Self, DecodeError> {
        let outer = OctetString::read(cur)?;
        let mut sub = Cursor::new(outer.as_bytes());
        Ok(Nested(T::read(&mut sub)?))
    }

    fn read_value(cur: &mut Cursor<'a>, length: u32) -> Result<Self, DecodeError> {
        let outer = OctetString::read_value(cur, length)?;
        let mut sub = Cursor::new(outer.as_bytes());
        Ok(Nested(T::read(&mut sub)?))
    }
}
