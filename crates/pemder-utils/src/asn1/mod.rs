//! ASN.1 DER decoding.
//!
//! A deliberately small, canonical-only subset of X.690: definite lengths
//! only, low-tag-number form only, strict INTEGER/NULL/SEQUENCE encoding
//! rules. Values are borrowed views over the input; nothing is copied.

mod context;
mod header;
mod integer;
mod schema;
mod types;

pub use context::{ContextExplicit, ContextImplicit, Nested};
pub use header::Header;
pub use integer::Integer;
pub use schema::{read_optional, try_read, DerRead};
pub use types::{AnyRef, BitString, Null, ObjectIdentifier, OctetString, Sequence};

use pemder_types::DecodeError;

/// Largest accepted content length: 2^28 − 1 (just under 256 MiB).
pub const MAX_LENGTH: u32 = (1 << 28) - 1;

/// ASN.1 tag class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClass {
    Universal,
    Application,
    ContextSpecific,
    Private,
}

/// A parsed tag, discriminated by class.
///
/// Tag numbers use the low-tag-number form only, so non-universal numbers
/// fit five bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Universal {
        number: UniversalTagNumber,
        constructed: bool,
    },
    Application {
        number: u8,
        constructed: bool,
    },
    ContextSpecific {
        number: u8,
        constructed: bool,
    },
    Private {
        number: u8,
        constructed: bool,
    },
}

impl Tag {
    /// The tag's class.
    pub fn class(&self) -> TagClass {
        match self {
            Tag::Universal { .. } => TagClass::Universal,
            Tag::Application { .. } => TagClass::Application,
            Tag::ContextSpecific { .. } => TagClass::ContextSpecific,
            Tag::Private { .. } => TagClass::Private,
        }
    }

    /// The constructed bit.
    pub fn constructed(&self) -> bool {
        match *self {
            Tag::Universal { constructed, .. }
            | Tag::Application { constructed, .. }
            | Tag::ContextSpecific { constructed, .. }
            | Tag::Private { constructed, .. } => constructed,
        }
    }
}

/// Universal tag numbers, with their values fixed by X.680.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum UniversalTagNumber {
    Boolean = 1,
    Integer = 2,
    BitString = 3,
    OctetString = 4,
    Null = 5,
    ObjectIdentifier = 6,
    Real = 9,
    Enumerated = 10,
    Utf8String = 12,
    Sequence = 16,
    Set = 17,
    NumericString = 18,
    PrintableString = 19,
    TeletexString = 20,
    VideotexString = 21,
    Ia5String = 22,
    UtcTime = 23,
    GeneralizedTime = 24,
    VisibleString = 26,
    GeneralString = 27,
    BmpString = 30,
}

impl TryFrom<u8> for UniversalTagNumber {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, DecodeError> {
        Ok(match value {
            1 => Self::Boolean,
            2 => Self::Integer,
            3 => Self::BitString,
            4 => Self::OctetString,
            5 => Self::Null,
            6 => Self::ObjectIdentifier,
            9 => Self::Real,
            10 => Self::Enumerated,
            12 => Self::Utf8String,
            16 => Self::Sequence,
            17 => Self::Set,
            18 => Self::NumericString,
            19 => Self::PrintableString,
            20 => Self::TeletexString,
            21 => Self::VideotexString,
            22 => Self::Ia5String,
            23 => Self::UtcTime,
            24 => Self::GeneralizedTime,
            26 => Self::VisibleString,
            27 => Self::GeneralString,
            30 => Self::BmpString,
            _ => return Err(DecodeError::UnexpectedTag),
        })
    }
}
