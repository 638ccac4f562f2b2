//! SEC1 / RFC 5915 elliptic-curve private keys.

use pemder_types::DecodeError;
use pemder_utils::asn1::{
    read_optional, try_read, BitString, ContextExplicit, DerRead, ObjectIdentifier, Sequence,
};
use pemder_utils::Cursor;

/// ```text
/// ECPrivateKey ::= SEQUENCE {
///     version        INTEGER { ecPrivkeyVer1(1) },
///     privateKey     OCTET STRING,
///     parameters [0] ECParameters OPTIONAL,
///     publicKey  [1] BIT STRING OPTIONAL
/// }
/// ```
///
/// Both context wrappers are EXPLICIT, as RFC 5915 requires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EcPrivateKey<'a> {
    pub version: u8,
    pub private_key: &'a [u8],
    pub parameters: Option<EcParameters<'a>>,
    pub public_key: Option<BitString<'a>>,
}

/// ```text
/// ECParameters ::= CHOICE { namedCurve OBJECT IDENTIFIER }
/// ```
///
/// Specified-curve and implicit-curve forms are deliberately unsupported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EcParameters<'a> {
    NamedCurve(ObjectIdentifier<'a>),
}

impl<'a> EcPrivateKey<'a> {
    /// Parse from a DER-encoded ECPrivateKey.
    pub fn from_der(der: &'a [u8]) -> Result<Self, DecodeError> {
        Self::read(&mut Cursor::new(der))
    }

    fn read_fields(cur: &mut Cursor<'a>) -> Result<Self, DecodeError> {
        let version = u8::read(cur)?;
        let private_key = <&[u8]>::read(cur)?;
        let parameters = read_optional::<ContextExplicit<0, EcParameters<'a>>>(cur)?
            .map(ContextExplicit::into_inner);
        let public_key = read_optional::<ContextExplicit<1, BitString<'a>>>(cur)?
            .map(ContextExplicit::into_inner);
        Ok(EcPrivateKey {
            version,
            private_key,
            parameters,
            public_key,
        })
    }

    /// The named-curve OID from the `[0]` parameters, when present.
    pub fn named_curve(&self) -> Option<ObjectIdentifier<'a>> {
        match self.parameters {
            Some(EcParameters::NamedCurve(oid)) => Some(oid),
            None => None,
        }
    }
}

impl<'a> DerRead<'a> for EcPrivateKey<'a> {
    fn read(cur: &mut Cursor<'a>) -> Result<Self, DecodeError> {
        let seq = Sequence::read(cur)?;
        Self::read_fields(&mut seq.cursor())
    }

    fn read_value(cur: &mut Cursor<'a>, length: u32) -> Result<Self, DecodeError> {
        let seq = Sequence::read_value(cur, length)?;
        Self::read_fields(&mut seq.cursor())
    }
}

impl<'a> DerRead<'a> for EcParameters<'a> {
    fn read(cur: &mut Cursor<'a>) -> Result<Self, DecodeError> {
        if cur.is_empty() {
            return Err(DecodeError::EndOfInput);
        }
        if let Some(oid) = try_read::<ObjectIdentifier>(cur) {
            return Ok(EcParameters::NamedCurve(oid));
        }
        Err(DecodeError::Cast)
    }

    fn read_value(_cur: &mut Cursor<'a>, _length: u32) -> Result<Self, DecodeError> {
        // A CHOICE carries its discriminator in its own tag, so it cannot
        // appear under an IMPLICIT wrapper.
        Err(DecodeError::Cast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pemder_utils::oid::known;

    // ECPrivateKey { 1, key, [0] prime256v1, [1] pubkey } skeleton with a
    // 4-byte key and 3-byte point, small enough to write out literally.
    const FULL: &[u8] = &[
        0x30, 0x1E, // SEQUENCE
        0x02, 0x01, 0x01, // version 1
        0x04, 0x04, 0xDE, 0xAD, 0xBE, 0xEF, // privateKey
        0xA0, 0x0C, // [0]
        0x06, 0x0A, 0x2B, 0x24, 0x03, 0x03, 0x02, 0x08, 0x01, 0x01, 0x07, 0x01, // some curve
        0xA1, 0x05, // [1]
        0x03, 0x03, 0x00, 0x04, 0x2A, // BIT STRING
    ];

    #[test]
    fn test_full_shape() {
        let key = EcPrivateKey::from_der(FULL).unwrap();
        assert_eq!(key.version, 1);
        assert_eq!(key.private_key, &[0xDE, 0xAD, 0xBE, 0xEF]);
        assert!(key.named_curve().is_some());
        assert_eq!(key.public_key.unwrap().as_bytes(), &[0x04, 0x2A]);
    }

    #[test]
    fn test_optionals_absent() {
        let data = [
            0x30, 0x09, 0x02, 0x01, 0x01, 0x04, 0x04, 0xDE, 0xAD, 0xBE, 0xEF,
        ];
        let key = EcPrivateKey::from_der(&data).unwrap();
        assert_eq!(key.version, 1);
        assert!(key.parameters.is_none());
        assert!(key.public_key.is_none());
    }

    #[test]
    fn test_params_only() {
        let data = [
            0x30, 0x15, 0x02, 0x01, 0x01, 0x04, 0x04, 0xDE, 0xAD, 0xBE, 0xEF, 0xA0, 0x0A,
            0x06, 0x08, 0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x03, 0x01, 0x07,
        ];
        let key = EcPrivateKey::from_der(&data).unwrap();
        assert_eq!(key.named_curve().unwrap(), known::PRIME256V1);
        assert!(key.public_key.is_none());
    }

    #[test]
    fn test_params_must_be_a_curve_oid() {
        // [0] wrapping NULL instead of an OID: the single-alternative
        // CHOICE matches nothing, so the optional parameters roll back and
        // the NULL-bearing [0] is left unconsumed for [1], which it is not.
        let data = [
            0x30, 0x0D, 0x02, 0x01, 0x01, 0x04, 0x04, 0xDE, 0xAD, 0xBE, 0xEF, 0xA0, 0x02,
            0x05, 0x00,
        ];
        let key = EcPrivateKey::from_der(&data).unwrap();
        assert!(key.parameters.is_none());
        assert!(key.public_key.is_none());
    }

    #[test]
    fn test_missing_private_key_fatal() {
        let data = [0x30, 0x03, 0x02, 0x01, 0x01];
        assert_eq!(EcPrivateKey::from_der(&data), Err(DecodeError::EndOfInput));
    }
}
