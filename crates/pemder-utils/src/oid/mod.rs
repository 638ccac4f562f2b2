//! Object identifiers.
//!
//! An [`Oid`] holds the DER-encoded value bytes (no tag or length) in a
//! fixed buffer; equality is byte-wise, including against the borrowed
//! [`crate::asn1::ObjectIdentifier`] view parsed from a DER stream.

use std::fmt;

use crate::cursor::Cursor;
use crate::vlq;
use pemder_types::DecodeError;

/// Maximum supported encoded OID length in bytes.
pub const MAX_OID_LEN: usize = 39;

/// An owned object identifier in encoded form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Oid {
    buf: [u8; MAX_OID_LEN],
    len: u8,
}

impl Oid {
    /// Build an OID from its dotted-arc text form, e.g. `"1.2.840.10045.2.1"`.
    ///
    /// The first arc must be 0, 1 or 2; the second must be below 40 when the
    /// first is 0 or 1. Violations and malformed numbers fail `Parse`; an
    /// encoding longer than [`MAX_OID_LEN`] fails `OidTooLong`.
    pub fn from_dotted(s: &str) -> Result<Self, DecodeError> {
        let mut arcs = [0u32; MAX_OID_LEN + 2];
        let mut count = 0;
        for part in s.split('.') {
            if count == arcs.len() {
                return Err(DecodeError::OidTooLong);
            }
            arcs[count] = part.parse::<u32>().map_err(|_| DecodeError::Parse)?;
            count += 1;
        }
        Self::from_arcs(&arcs[..count])
    }

    /// Build an OID from a list of arc values.
    pub fn from_arcs(arcs: &[u32]) -> Result<Self, DecodeError> {
        if arcs.len() < 2 {
            return Err(DecodeError::Parse);
        }
        let first = arcs[0];
        let second = arcs[1];
        if first > 2 || (first < 2 && second >= 40) {
            return Err(DecodeError::Parse);
        }

        let mut out = Vec::with_capacity(vlq::max_encoded_len(4) * arcs.len());
        vlq::encode_u32(first * 40 + second, &mut out);
        for &arc in &arcs[2..] {
            vlq::encode_u32(arc, &mut out);
        }
        Self::from_encoded(&out)
    }

    /// Build an OID from already-encoded value bytes.
    pub fn from_encoded(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::NonCanonical);
        }
        if bytes.len() > MAX_OID_LEN {
            return Err(DecodeError::OidTooLong);
        }
        let mut buf = [0u8; MAX_OID_LEN];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            buf,
            len: bytes.len() as u8,
        })
    }

    /// Compile-time constructor for well-known constants.
    const fn from_static(bytes: &'static [u8]) -> Self {
        assert!(!bytes.is_empty() && bytes.len() <= MAX_OID_LEN);
        let mut buf = [0u8; MAX_OID_LEN];
        let mut i = 0;
        while i < bytes.len() {
            buf[i] = bytes[i];
            i += 1;
        }
        Self {
            buf,
            len: bytes.len() as u8,
        }
    }

    /// The encoded value bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    /// Decode the arc values.
    ///
    /// Fails `Parse` only for byte sequences that did not come out of this
    /// type's constructors (e.g. a truncated final arc).
    pub fn arcs(&self) -> Result<Vec<u32>, DecodeError> {
        let mut cur = Cursor::new(self.as_bytes());
        let mut arcs = Vec::new();
        let head = vlq::decode_u32(&mut cur).map_err(|_| DecodeError::Parse)?;
        if head < 40 {
            arcs.push(0);
            arcs.push(head);
        } else if head < 80 {
            arcs.push(1);
            arcs.push(head - 40);
        } else {
            arcs.push(2);
            arcs.push(head - 80);
        }
        while !cur.is_empty() {
            arcs.push(vlq::decode_u32(&mut cur).map_err(|_| DecodeError::Parse)?);
        }
        Ok(arcs)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arcs = self.arcs().map_err(|_| fmt::Error)?;
        let mut first = true;
        for arc in arcs {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{arc}")?;
            first = false;
        }
        Ok(())
    }
}

/// Well-known object identifiers.
pub mod known {
    use super::Oid;

    /// id-ecPublicKey, `1.2.840.10045.2.1`.
    pub const EC_PUBLIC_KEY: Oid =
        Oid::from_static(&[0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x02, 0x01]);

    /// prime256v1 / secp256r1 / NIST P-256, `1.2.840.10045.3.1.7`.
    pub const PRIME256V1: Oid =
        Oid::from_static(&[0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x03, 0x01, 0x07]);

    /// secp384r1 / NIST P-384, `1.3.132.0.34`.
    pub const SECP384R1: Oid = Oid::from_static(&[0x2B, 0x81, 0x04, 0x00, 0x22]);

    /// secp521r1 / NIST P-521, `1.3.132.0.35`.
    pub const SECP521R1: Oid = Oid::from_static(&[0x2B, 0x81, 0x04, 0x00, 0x23]);
}
