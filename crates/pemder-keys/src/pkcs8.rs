//! PKCS#8 PrivateKeyInfo (RFC 5958).

use crate::algorithm::AlgorithmIdentifier;
use crate::ec::EcPrivateKey;
use pemder_types::DecodeError;
use pemder_utils::asn1::{
    read_optional, AnyRef, BitString, ContextImplicit, DerRead, Nested, Sequence,
};
use pemder_utils::Cursor;

/// ```text
/// PrivateKeyInfo ::= SEQUENCE {
///     version                   INTEGER,
///     privateKeyAlgorithm       AlgorithmIdentifier,
///     privateKey                OCTET STRING,
///     attributes            [0] IMPLICIT Attributes OPTIONAL,
///     publicKey             [1] IMPLICIT BIT STRING OPTIONAL
/// }
/// ```
///
/// The privateKey OCTET STRING nests an ECPrivateKey; attributes are kept
/// unparsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrivateKeyInfo<'a> {
    pub version: u8,
    pub algorithm: AlgorithmIdentifier<'a>,
    pub private_key: EcPrivateKey<'a>,
    pub attributes: Option<AnyRef<'a>>,
    pub public_key: Option<BitString<'a>>,
}

impl<'a> PrivateKeyInfo<'a> {
    /// Parse from a DER-encoded PrivateKeyInfo.
    pub fn from_der(der: &'a [u8]) -> Result<Self, DecodeError> {
        Self::read(&mut Cursor::new(der))
    }

    fn read_fields(cur: &mut Cursor<'a>) -> Result<Self, DecodeError> {
        let version = u8::read(cur)?;
        let algorithm = AlgorithmIdentifier::read(cur)?;
        let private_key = Nested::<EcPrivateKey<'a>>::read(cur)?.into_inner();
        let attributes =
            read_optional::<ContextImplicit<0, AnyRef<'a>>>(cur)?.map(ContextImplicit::into_inner);
        let public_key = read_optional::<ContextImplicit<1, BitString<'a>>>(cur)?
            .map(ContextImplicit::into_inner);
        Ok(PrivateKeyInfo {
            version,
            algorithm,
            private_key,
            attributes,
            public_key,
        })
    }
}

impl<'a> DerRead<'a> for PrivateKeyInfo<'a> {
    fn read(cur: &mut Cursor<'a>) -> Result<Self, DecodeError> {
        let seq = Sequence::read(cur)?;
        Self::read_fields(&mut seq.cursor())
    }

    fn read_value(cur: &mut Cursor<'a>, length: u32) -> Result<Self, DecodeError> {
        let seq = Sequence::read_value(cur, length)?;
        Self::read_fields(&mut seq.cursor())
    }
}
