//! X.509 SubjectPublicKeyInfo (RFC 5280).

use crate::algorithm::AlgorithmIdentifier;
use pemder_types::DecodeError;
use pemder_utils::asn1::{BitString, DerRead, Sequence};
use pemder_utils::Cursor;

/// ```text
/// SubjectPublicKeyInfo ::= SEQUENCE {
///     algorithm        AlgorithmIdentifier,
///     subjectPublicKey BIT STRING
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectPublicKeyInfo<'a> {
    pub algorithm: AlgorithmIdentifier<'a>,
    pub public_key: BitString<'a>,
}

impl<'a> SubjectPublicKeyInfo<'a> {
    /// Parse from a DER-encoded SubjectPublicKeyInfo.
    pub fn from_der(der: &'a [u8]) -> Result<Self, DecodeError> {
        Self::read(&mut Cursor::new(der))
    }

    fn read_fields(cur: &mut Cursor<'a>) -> Result<Self, DecodeError> {
        let algorithm = AlgorithmIdentifier::read(cur)?;
        let public_key = BitString::read(cur)?;
        Ok(SubjectPublicKeyInfo {
            algorithm,
            public_key,
        })
    }
}

impl<'a> DerRead<'a> for SubjectPublicKeyInfo<'a> {
    fn read(cur: &mut Cursor<'a>) -> Result<Self, DecodeError> {
        let seq = Sequence::read(cur)?;
        Self::read_fields(&mut seq.cursor())
    }

    fn read_value(cur: &mut Cursor<'a>, length: u32) -> Result<Self, DecodeError> {
        let seq = Sequence::read_value(cur, length)?;
        Self::read_fields(&mut seq.cursor())
    }
}
