//! The X.509 AlgorithmIdentifier.

use pemder_types::DecodeError;
use pemder_utils::asn1::{
    read_optional, try_read, AnyRef, DerRead, Null, ObjectIdentifier, Sequence,
};
use pemder_utils::Cursor;

/// ```text
/// AlgorithmIdentifier ::= SEQUENCE {
///     algorithm   OBJECT IDENTIFIER,
///     parameters  ANY DEFINED BY algorithm OPTIONAL
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlgorithmIdentifier<'a> {
    pub algorithm: ObjectIdentifier<'a>,
    pub parameters: Option<AlgorithmParameters<'a>>,
}

/// The parameter shapes that occur in key containers.
///
/// A CHOICE, tried in declaration order; EC keys use `NamedCurve`, RSA-era
/// encoders emit `Null`, everything else is deferred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlgorithmParameters<'a> {
    NamedCurve(ObjectIdentifier<'a>),
    Null,
    Other(AnyRef<'a>),
}

impl<'a> AlgorithmIdentifier<'a> {
    fn read_fields(cur: &mut Cursor<'a>) -> Result<Self, DecodeError> {
        let algorithm = ObjectIdentifier::read(cur)?;
        let parameters = read_optional::<AlgorithmParameters<'a>>(cur)?;
        Ok(AlgorithmIdentifier {
            algorithm,
            parameters,
        })
    }

    /// The named-curve parameter, when present.
    pub fn named_curve(&self) -> Option<ObjectIdentifier<'a>> {
        match self.parameters {
            Some(AlgorithmParameters::NamedCurve(oid)) => Some(oid),
            _ => None,
        }
    }
}

impl<'a> DerRead<'a> for AlgorithmIdentifier<'a> {
    fn read(cur: &mut Cursor<'a>) -> Result<Self, DecodeError> {
        let seq = Sequence::read(cur)?;
        Self::read_fields(&mut seq.cursor())
    }

    fn read_value(cur: &mut Cursor<'a>, length: u32) -> Result<Self, DecodeError> {
        let seq = Sequence::read_value(cur, length)?;
        Self::read_fields(&mut seq.cursor())
    }
}

impl<'a> DerRead<'a> for AlgorithmParameters<'a> {
    fn read(cur: &mut Cursor<'a>) -> Result<Self, DecodeError> {
        if cur.is_empty() {
            return Err(DecodeError::EndOfInput);
        }
        if let Some(oid) = try_read::<ObjectIdentifier>(cur) {
            return Ok(AlgorithmParameters::NamedCurve(oid));
        }
        if try_read::<Null>(cur).is_some() {
            return Ok(AlgorithmParameters::Null);
        }
        if let Some(any) = try_read::<AnyRef>(cur) {
            return Ok(AlgorithmParameters::Other(any));
        }
        Err(DecodeError::Cast)
    }

    fn read_value(_cur: &mut Cursor<'a>, _length: u32) -> Result<Self, DecodeError> {
        // A CHOICE carries its discriminator in its own tag, so it cannot
        // appear under an IMPLICIT wrapper.
        Err(DecodeError::Cast)
    }
}
