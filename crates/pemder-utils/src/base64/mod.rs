//! Base64 decoding.
//!
//! Standard alphabet (RFC 4648, not URL-safe) with `=` padding. The library
//! only consumes PEM, so there is no encoder.

use pemder_types::DecodeError;

/// Decode a Base64 byte string.
///
/// The input must contain base64 characters only (the PEM layer strips line
/// structure before calling this). Invalid characters, a length that is not
/// a multiple of four, and misplaced padding all fail `Parse`.
pub fn decode(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut output = Vec::with_capacity(input.len() / 4 * 3);
    decode_into(input, &mut output)?;
    Ok(output)
}

/// Decode a Base64 byte string, appending to `out`.
pub fn decode_into(input: &[u8], out: &mut Vec<u8>) -> Result<(), DecodeError> {
    if input.is_empty() {
        return Ok(());
    }
    if input.len() % 4 != 0 {
        return Err(DecodeError::Parse);
    }

    let (body, last) = input.split_at(input.len() - 4);
    for chunk in body.chunks_exact(4) {
        let triple = (decode_char(chunk[0])? << 18)
            | (decode_char(chunk[1])? << 12)
            | (decode_char(chunk[2])? << 6)
            | decode_char(chunk[3])?;
        out.push((triple >> 16) as u8);
        out.push((triple >> 8) as u8);
        out.push(triple as u8);
    }

    // Padding may appear only in the final quantum: "xx==" or "xxx=".
    let a = decode_char(last[0])?;
    let b = decode_char(last[1])?;
    if last[2] == b'=' {
        if last[3] != b'=' {
            return Err(DecodeError::Parse);
        }
        out.push(((a << 18 | b << 12) >> 16) as u8);
    } else {
        let c = decode_char(last[2])?;
        if last[3] == b'=' {
            let val = a << 18 | b << 12 | c << 6;
            out.push((val >> 16) as u8);
            out.push((val >> 8) as u8);
        } else {
            let val = a << 18 | b << 12 | c << 6 | decode_char(last[3])?;
            out.push((val >> 16) as u8);
            out.push((val >> 8) as u8);
            out.push(val as u8);
        }
    }

    Ok(())
}

fn decode_char(c: u8) -> Result<u32, DecodeError> {
    match c {
        b'A'..=b'Z' => Ok((c - b'A') as u32),
        b'a'..=b'z' => Ok((c - b'a' + 26) as u32),
        b'0'..=b'9' => Ok((c - b'0' + 52) as u32),
        b'+' => Ok(62),
        b'/' => Ok(63),
        _ => Err(DecodeError::Parse),
    }
}

/// Returns true for bytes of the standard alphabet, `=` included.
pub fn is_base64_byte(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'+' || c == b'/' || c == b'='
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc4648_vectors() {
        assert_eq!(decode(b"").unwrap(), b"");
        assert_eq!(decode(b"Zg==").unwrap(), b"f");
        assert_eq!(decode(b"Zm8=").unwrap(), b"fo");
        assert_eq!(decode(b"Zm9v").unwrap(), b"foo");
        assert_eq!(decode(b"Zm9vYg==").unwrap(), b"foob");
        assert_eq!(decode(b"Zm9vYmE=").unwrap(), b"fooba");
        assert_eq!(decode(b"Zm9vYmFy").unwrap(), b"foobar");
    }

    #[test]
    fn test_bad_length() {
        assert_eq!(decode(b"Zm9"), Err(DecodeError::Parse));
        assert_eq!(decode(b"Z"), Err(DecodeError::Parse));
    }

    #[test]
    fn test_bad_character() {
        assert_eq!(decode(b"Zm9*"), Err(DecodeError::Parse));
        // URL-safe alphabet is rejected
        assert_eq!(decode(b"Zm9-"), Err(DecodeError::Parse));
        // Whitespace is the PEM layer's business, not ours
        assert_eq!(decode(b"Zm9v Zg=="), Err(DecodeError::Parse));
    }

    #[test]
    fn test_bad_padding() {
        // '=' in the third slot requires '=' in the fourth
        assert_eq!(decode(b"Zm=v"), Err(DecodeError::Parse));
        // Padding before the final quantum
        assert_eq!(decode(b"Zg==Zm9v"), Err(DecodeError::Parse));
    }

    #[test]
    fn test_decode_into_appends() {
        let mut out = vec![0xAA];
        decode_into(b"Zm9v", &mut out).unwrap();
        assert_eq!(out, [0xAA, b'f', b'o', b'o']);
    }
}
