#![forbid(unsafe_code)]
#![doc = "Codec utilities for pemder: byte cursor, Base64, VLQ, PEM, OID, ASN.1 DER."]

#[cfg(feature = "asn1")]
pub mod asn1;

#[cfg(feature = "base64")]
pub mod base64;

pub mod cursor;

#[cfg(feature = "oid")]
pub mod oid;

#[cfg(feature = "pem")]
pub mod pem;

pub mod vlq;

pub use cursor::Cursor;
