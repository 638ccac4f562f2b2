//! The schema-driven reading contract.
//!
//! A schema is expressed in the type system: each record is a struct whose
//! declaration order is its field order, with a hand-written [`DerRead`]
//! impl; choices are enums whose impls try the alternatives in declaration
//! order. The combinators here carry the generic semantics — optional
//! fields, choice backtracking, fixed-length arrays.

use super::types::OctetString;
use crate::cursor::Cursor;
use pemder_types::DecodeError;

/// Reading a value out of a DER stream, at two levels.
pub trait DerRead<'a>: Sized {
    /// Read a complete TLV.
    fn read(cur: &mut Cursor<'a>) -> Result<Self, DecodeError>;

    /// Read only the payload of `length` bytes; the caller has already
    /// consumed the header (IMPLICIT context tagging, for instance).
    fn read_value(cur: &mut Cursor<'a>, length: u32) -> Result<Self, DecodeError>;
}

/// Read an OPTIONAL field inside a record.
///
/// An exhausted record payload yields `None` (trailing optionals). Any
/// other failure except `EndOfInput` rolls the cursor back and yields
/// `None`; an `EndOfInput` inside a present element is a truncation and
/// propagates.
pub fn read_optional<'a, T: DerRead<'a>>(
    cur: &mut Cursor<'a>,
) -> Result<Option<T>, DecodeError> {
    if cur.is_empty() {
        return Ok(None);
    }
    let mark = cur.pos();
    match T::read(cur) {
        Ok(value) => Ok(Some(value)),
        Err(DecodeError::EndOfInput) => Err(DecodeError::EndOfInput),
        Err(_) => {
            cur.seek(mark);
            Ok(None)
        }
    }
}

/// Attempt one CHOICE alternative, rolling the cursor back on any failure.
///
/// Choice impls call this per alternative in declaration order; the first
/// success wins, and a choice with no matching alternative fails `Cast`.
pub fn try_read<'a, T: DerRead<'a>>(cur: &mut Cursor<'a>) -> Option<T> {
    let mark = cur.pos();
    match T::read(cur) {
        Ok(value) => Some(value),
        Err(_) => {
            cur.seek(mark);
            None
        }
    }
}

/// Byte slices map to OCTET STRING, zero-copy.
impl<'a> DerRead<'a> for &'a [u8] {
    fn read(cur: &mut Cursor<'a>) -> Result<Self, DecodeError> {
        Ok(OctetString::read(cur)?.as_bytes())
    }

    fn read_value(cur: &mut Cursor<'a>, length: u32) -> Result<Self, DecodeError> {
        Ok(OctetString::read_value(cur, length)?.as_bytes())
    }
}

/// Fixed-length arrays map to an OCTET STRING whose payload length must
/// equal `N`.
impl<'a, const N: usize> DerRead<'a> for [u8; N] {
    fn read(cur: &mut Cursor<'a>) -> Result<Self, DecodeError> {
        let bytes = <&[u8]>::read(cur)?;
        bytes.try_into().map_err(|_| DecodeError::WrongArrayLength)
    }

    fn read_value(cur: &mut Cursor<'a>, length: u32) -> Result<Self, DecodeError> {
        let bytes = <&[u8]>::read_value(cur, length)?;
        bytes.try_into().map_err(|_| DecodeError::WrongArrayLength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asn1::{Null, Sequence};

    #[test]
    fn test_byte_slice() {
        let data = [0x04, 0x02, 0xAB, 0xCD];
        let bytes = <&[u8]>::read(&mut Cursor::new(&data)).unwrap();
        assert_eq!(bytes, &[0xAB, 0xCD]);
    }

    #[test]
    fn test_fixed_array() {
        let data = [0x04, 0x02, 0xAB, 0xCD];
        let arr = <[u8; 2]>::read(&mut Cursor::new(&data)).unwrap();
        assert_eq!(arr, [0xAB, 0xCD]);

        assert_eq!(
            <[u8; 3]>::read(&mut Cursor::new(&data)),
            Err(DecodeError::WrongArrayLength)
        );
    }

    #[test]
    fn test_optional_present() {
        let data = [0x02, 0x01, 0x07];
        let mut cur = Cursor::new(&data);
        assert_eq!(read_optional::<i32>(&mut cur).unwrap(), Some(7));
        assert!(cur.is_empty());
    }

    #[test]
    fn test_optional_absent_on_mismatch() {
        // NULL where an optional INTEGER might sit: rollback, then the NULL
        // is still readable.
        let data = [0x05, 0x00];
        let mut cur = Cursor::new(&data);
        assert_eq!(read_optional::<i32>(&mut cur).unwrap(), None);
        Null::read(&mut cur).unwrap();
    }

    #[test]
    fn test_optional_absent_at_end() {
        let mut cur = Cursor::new(&[]);
        assert_eq!(read_optional::<i32>(&mut cur).unwrap(), None);
    }

    #[test]
    fn test_optional_truncation_propagates() {
        // INTEGER header claims two content bytes, only one present
        let data = [0x02, 0x02, 0x00];
        let mut cur = Cursor::new(&data);
        assert_eq!(read_optional::<i32>(&mut cur), Err(DecodeError::EndOfInput));
    }

    #[test]
    fn test_try_read_rolls_back() {
        let data = [0x30, 0x02, 0x05, 0x00];
        let mut cur = Cursor::new(&data);
        assert!(try_read::<i32>(&mut cur).is_none());
        assert_eq!(cur.pos(), 0);
        assert!(try_read::<Sequence>(&mut cur).is_some());
        assert!(cur.is_empty());
    }
}
