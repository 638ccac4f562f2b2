//! Borrowed views over DER primitive and constructed values.

use super::{DerRead, Header, Tag, UniversalTagNumber};
use crate::cursor::Cursor;
use crate::oid::{Oid, MAX_OID_LEN};
use pemder_types::DecodeError;

/// A BIT STRING: an unused-bit count (0..=7) and the content bytes.
///
/// Trailing unused bits are not masked; the content is handed over as
/// encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitString<'a> {
    unused_bits: u8,
    bytes: &'a [u8],
}

impl<'a> BitString<'a> {
    /// Number of unused bits in the final content byte.
    pub fn unused_bits(&self) -> u8 {
        self.unused_bits
    }

    /// The content bytes, without the unused-bit prefix octet.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> DerRead<'a> for BitString<'a> {
    fn read(cur: &mut Cursor<'a>) -> Result<Self, DecodeError> {
        let header = Header::expect(cur, UniversalTagNumber::BitString)?;
        Self::read_value(cur, header.length)
    }

    fn read_value(cur: &mut Cursor<'a>, length: u32) -> Result<Self, DecodeError> {
        if length == 0 {
            return Err(DecodeError::Empty);
        }
        let payload = cur.take(length as usize)?;
        let unused_bits = payload[0];
        if unused_bits > 7 {
            return Err(DecodeError::MaxUnusedBitsExceeded);
        }
        Ok(BitString {
            unused_bits,
            bytes: &payload[1..],
        })
    }
}

/// An OCTET STRING: the payload, as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OctetString<'a> {
    bytes: &'a [u8],
}

impl<'a> OctetString<'a> {
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> DerRead<'a> for OctetString<'a> {
    fn read(cur: &mut Cursor<'a>) -> Result<Self, DecodeError> {
        let header = Header::expect(cur, UniversalTagNumber::OctetString)?;
        Self::read_value(cur, header.length)
    }

    fn read_value(cur: &mut Cursor<'a>, length: u32) -> Result<Self, DecodeError> {
        Ok(OctetString {
            bytes: cur.take(length as usize)?,
        })
    }
}

/// The NULL value. DER requires an empty payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Null;

impl<'a> DerRead<'a> for Null {
    fn read(cur: &mut Cursor<'a>) -> Result<Self, DecodeError> {
        let header = Header::expect(cur, UniversalTagNumber::Null)?;
        Self::read_value(cur, header.length)
    }

    fn read_value(_cur: &mut Cursor<'a>, length: u32) -> Result<Self, DecodeError> {
        if length != 0 {
            return Err(DecodeError::NonCanonical);
        }
        Ok(Null)
    }
}

/// A borrowed OBJECT IDENTIFIER in encoded form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectIdentifier<'a> {
    bytes: &'a [u8],
}

impl<'a> ObjectIdentifier<'a> {
    /// The encoded value bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Copy into an owned [`Oid`].
    pub fn to_oid(&self) -> Result<Oid, DecodeError> {
        Oid::from_encoded(self.bytes)
    }
}

impl PartialEq<Oid> for ObjectIdentifier<'_> {
    fn eq(&self, other: &Oid) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<ObjectIdentifier<'_>> for Oid {
    fn eq(&self, other: &ObjectIdentifier<'_>) -> bool {
        self.as_bytes() == other.bytes
    }
}

impl<'a> DerRead<'a> for ObjectIdentifier<'a> {
    fn read(cur: &mut Cursor<'a>) -> Result<Self, DecodeError> {
        let header = Header::expect(cur, UniversalTagNumber::ObjectIdentifier)?;
        Self::read_value(cur, header.length)
    }

    fn read_value(cur: &mut Cursor<'a>, length: u32) -> Result<Self, DecodeError> {
        if length as usize > MAX_OID_LEN {
            return Err(DecodeError::OidTooLong);
        }
        let bytes = cur.take(length as usize)?;
        if bytes.is_empty() {
            return Err(DecodeError::NonCanonical);
        }
        Ok(ObjectIdentifier { bytes })
    }
}

/// A SEQUENCE: the payload as an opaque slice, iterated by a sub-cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequence<'a> {
    bytes: &'a [u8],
}

impl<'a> Sequence<'a> {
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// A cursor over the child elements.
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor::new(self.bytes)
    }
}

impl<'a> DerRead<'a> for Sequence<'a> {
    fn read(cur: &mut Cursor<'a>) -> Result<Self, DecodeError> {
        let header = Header::expect(cur, UniversalTagNumber::Sequence)?;
        if !header.tag.constructed() {
            return Err(DecodeError::NonCanonical);
        }
        Self::read_value(cur, header.length)
    }

    fn read_value(cur: &mut Cursor<'a>, length: u32) -> Result<Self, DecodeError> {
        Ok(Sequence {
            bytes: cur.take(length as usize)?,
        })
    }
}

/// Any single element, with parsing deferred.
///
/// `tag` is `None` when the value was read under an IMPLICIT context tag
/// and the original tag is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnyRef<'a> {
    tag: Option<Tag>,
    bytes: &'a [u8],
}

impl<'a> AnyRef<'a> {
    pub fn tag(&self) -> Option<Tag> {
        self.tag
    }

    /// The payload bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> DerRead<'a> for AnyRef<'a> {
    fn read(cur: &mut Cursor<'a>) -> Result<Self, DecodeError> {
        let header = Header::read(cur)?;
        Ok(AnyRef {
            tag: Some(header.tag),
            bytes: cur.take(header.length as usize)?,
        })
    }

    fn read_value(cur: &mut Cursor<'a>, length: u32) -> Result<Self, DecodeError> {
        Ok(AnyRef {
            tag: None,
            bytes: cur.take(length as usize)?,
        })
    }
}
