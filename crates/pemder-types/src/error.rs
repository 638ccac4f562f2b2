/// Decoding errors.
///
/// The taxonomy is flat: any stage of the pipeline (PEM grammar, DER
/// framing, schema reading, key dispatch) may surface any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    // Input framing
    #[error("unexpected end of input")]
    EndOfInput,
    #[error("parse: grammar violation")]
    Parse,

    // DER header
    #[error("der: unexpected tag number")]
    UnexpectedTag,
    #[error("der: unexpected tag class")]
    UnexpectedClass,
    #[error("der: indefinite length is forbidden")]
    IndefiniteLength,
    #[error("der: length exceeds maximum")]
    LengthExceedsMax,
    #[error("der: high tag number form not supported")]
    HighTagNumberNotSupported,

    // DER values
    #[error("der: non-canonical encoding")]
    NonCanonical,
    #[error("bit string: more than 7 unused bits")]
    MaxUnusedBitsExceeded,
    #[error("bit string: empty payload")]
    Empty,
    #[error("oid: encoded form too long")]
    OidTooLong,

    // Schema reading
    #[error("schema: octet string length mismatch for fixed array")]
    WrongArrayLength,
    #[error("integer does not fit destination type")]
    Overflow,
    #[error("choice: no alternative matched")]
    Cast,

    // Key dispatch
    #[error("pem label is not a supported key encoding")]
    UnknownEncoding,
    #[error("algorithm oid is not supported")]
    UnsupportedAlgorithm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(DecodeError::EndOfInput.to_string(), "unexpected end of input");
        assert_eq!(
            DecodeError::IndefiniteLength.to_string(),
            "der: indefinite length is forbidden"
        );
        assert_eq!(
            DecodeError::UnsupportedAlgorithm.to_string(),
            "algorithm oid is not supported"
        );
    }

    #[test]
    fn test_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DecodeError>();
    }

    #[test]
    fn test_eq() {
        assert_eq!(DecodeError::Parse, DecodeError::Parse);
        assert_ne!(DecodeError::Parse, DecodeError::EndOfInput);
    }
}
