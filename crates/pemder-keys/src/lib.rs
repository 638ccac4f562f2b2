#![forbid(unsafe_code)]
#![doc = "PEM/DER key container decoding for pemder: PKCS#8, SEC1, SPKI."]

pub mod algorithm;
pub mod ec;
pub mod pkcs8;
pub mod spki;

use pemder_types::{DecodeError, KeyKind};
use pemder_utils::oid::known;
use pemder_utils::pem::{self, PemDocument};
use zeroize::Zeroize;

use ec::EcPrivateKey;
use pkcs8::PrivateKeyInfo;
use spki::SubjectPublicKeyInfo;

/// Key material decoded from a PEM document.
///
/// Owns its bytes: 32 bytes of private scalar, or 65 bytes of uncompressed
/// public point starting with `0x04`, ready for a signer or verifier. The
/// bytes are wiped on drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedKey {
    kind: KeyKind,
    bytes: Vec<u8>,
}

impl DecodedKey {
    /// What kind of key this is.
    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Drop for DecodedKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Decode a PEM-encoded key document.
///
/// Recognized labels and their schemas:
///  - `PRIVATE KEY` — PKCS#8 PrivateKeyInfo wrapping an ECPrivateKey
///  - `EC PRIVATE KEY` — ECPrivateKey (RFC 5915)
///  - `PUBLIC KEY` — SubjectPublicKeyInfo
///
/// Any other label fails `UnknownEncoding`. For the PKCS#8 and SPKI forms
/// the algorithm OID must be id-ecPublicKey, else `UnsupportedAlgorithm`.
pub fn decode_pem(input: &[u8]) -> Result<DecodedKey, DecodeError> {
    let document = pem::parse(input)?;
    decode_document(&document)
}

/// Decode an already-parsed PEM document.
pub fn decode_document(document: &PemDocument) -> Result<DecodedKey, DecodeError> {
    match document.label.as_str() {
        "PRIVATE KEY" => {
            let info = PrivateKeyInfo::from_der(&document.body)?;
            if info.algorithm.algorithm != known::EC_PUBLIC_KEY {
                return Err(DecodeError::UnsupportedAlgorithm);
            }
            Ok(DecodedKey {
                kind: KeyKind::EcdsaPrivateKey,
                bytes: info.private_key.private_key.to_vec(),
            })
        }
        "EC PRIVATE KEY" => {
            // A params OID other than P-256 is left to the caller to judge;
            // the bytes decode either way.
            let key = EcPrivateKey::from_der(&document.body)?;
            Ok(DecodedKey {
                kind: KeyKind::EcdsaPrivateKey,
                bytes: key.private_key.to_vec(),
            })
        }
        "PUBLIC KEY" => {
            let info = SubjectPublicKeyInfo::from_der(&document.body)?;
            if info.algorithm.algorithm != known::EC_PUBLIC_KEY {
                return Err(DecodeError::UnsupportedAlgorithm);
            }
            Ok(DecodedKey {
                kind: KeyKind::EcdsaPublicKey,
                bytes: info.public_key.as_bytes().to_vec(),
            })
        }
        _ => Err(DecodeError::UnknownEncoding),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_label() {
        let pem = b"-----BEGIN UNKNOWN-----\nAQID\n-----END UNKNOWN-----\n";
        assert_eq!(decode_pem(pem), Err(DecodeError::UnknownEncoding));
    }

    #[test]
    fn test_decoded_key_accessors() {
        let key = DecodedKey {
            kind: KeyKind::EcdsaPrivateKey,
            bytes: vec![0x11; 32],
        };
        assert_eq!(key.kind(), KeyKind::EcdsaPrivateKey);
        assert_eq!(key.as_bytes().len(), 32);
    }
}
