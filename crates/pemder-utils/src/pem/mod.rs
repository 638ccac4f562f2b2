//! PEM document parsing (RFC 7468, relaxed).
//!
//! One encapsulated document per input: a `-----BEGIN <label>-----` line,
//! base64 body lines, and a matching `-----END <label>-----` line. Lines may
//! end with LF or CRLF; inline whitespace is tolerated after the
//! pre-boundary.

use crate::base64;
use crate::cursor::Cursor;
use pemder_types::DecodeError;

const BEGIN_PREFIX: &[u8] = b"-----BEGIN ";
const END_PREFIX: &[u8] = b"-----END ";
const DASHES: &[u8] = b"-----";

/// A parsed PEM document.
///
/// `body` is the owned, base64-decoded payload; every DER view produced
/// from it borrows from this vector, so dropping the document releases all
/// decoded state at once.
#[derive(Debug, Clone, PartialEq)]
pub struct PemDocument {
    /// The label between `-----BEGIN ` and `-----`.
    pub label: String,
    /// The decoded binary payload.
    pub body: Vec<u8>,
}

/// Parse a single PEM document.
///
/// Truncation fails `EndOfInput`; every other grammar violation, including
/// an END label that does not match the BEGIN label, fails `Parse`.
pub fn parse(input: &[u8]) -> Result<PemDocument, DecodeError> {
    let mut cur = Cursor::new(input);

    cur.expect_literal(BEGIN_PREFIX)?;
    let label = cur.take_while1(is_label_byte)?;
    cur.expect_literal(DASHES)?;
    cur.skip_while(is_inline_wsp);
    read_eol(&mut cur)?;

    let mut encoded = Vec::new();
    loop {
        match cur.peek() {
            None => return Err(DecodeError::EndOfInput),
            Some(b'-') => break,
            Some(_) => {}
        }
        let line = cur.take_while1(base64::is_base64_byte)?;
        encoded.extend_from_slice(line);
        read_eol(&mut cur)?;
    }

    cur.expect_literal(END_PREFIX)?;
    let end_label = cur.take_while1(is_label_byte)?;
    if end_label != label {
        return Err(DecodeError::Parse);
    }
    cur.expect_literal(DASHES)?;

    let body = base64::decode(&encoded)?;
    let label = String::from_utf8(label.to_vec()).map_err(|_| DecodeError::Parse)?;
    Ok(PemDocument { label, body })
}

/// Label alphabet: printable ASCII except `-`, plus space.
fn is_label_byte(b: u8) -> bool {
    b == b' ' || (b.is_ascii_graphic() && b != b'-')
}

/// Whitespace that is not a line break.
fn is_inline_wsp(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// CR, CRLF, or LF.
fn read_eol(cur: &mut Cursor<'_>) -> Result<(), DecodeError> {
    match cur.accept_any_of(b"\r\n")? {
        b'\r' => {
            if cur.peek() == Some(b'\n') {
                cur.take_one()?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "-----BEGIN TEST DATA-----\nAQID\n-----END TEST DATA-----\n";

    #[test]
    fn test_parse_basic() {
        let doc = parse(DOC.as_bytes()).unwrap();
        assert_eq!(doc.label, "TEST DATA");
        assert_eq!(doc.body, [1, 2, 3]);
    }

    #[test]
    fn test_parse_crlf() {
        let crlf = DOC.replace('\n', "\r\n");
        let doc = parse(crlf.as_bytes()).unwrap();
        assert_eq!(doc.label, "TEST DATA");
        assert_eq!(doc.body, [1, 2, 3]);
    }

    #[test]
    fn test_inline_whitespace_after_boundary() {
        let doc = parse(b"-----BEGIN X----- \t\nAQID\n-----END X-----").unwrap();
        assert_eq!(doc.label, "X");
        assert_eq!(doc.body, [1, 2, 3]);
    }

    #[test]
    fn test_multi_line_body() {
        let pem = "-----BEGIN X-----\nAQ\nID\nBA==\n-----END X-----\n";
        let doc = parse(pem.as_bytes()).unwrap();
        assert_eq!(doc.body, [1, 2, 3, 4]);
    }

    #[test]
    fn test_label_mismatch() {
        let pem = "-----BEGIN A-----\nAQID\n-----END B-----\n";
        assert_eq!(parse(pem.as_bytes()), Err(DecodeError::Parse));
    }

    #[test]
    fn test_missing_end_boundary() {
        let pem = "-----BEGIN A-----\nAQID\n";
        assert_eq!(parse(pem.as_bytes()), Err(DecodeError::EndOfInput));
    }

    #[test]
    fn test_not_a_pem() {
        assert_eq!(parse(b"hello world, not a pem"), Err(DecodeError::Parse));
        // Shorter than the pre-boundary literal: the stream simply ends
        assert_eq!(parse(b"--"), Err(DecodeError::EndOfInput));
    }

    #[test]
    fn test_bad_base64_line() {
        let pem = "-----BEGIN A-----\nAQI*\n-----END A-----\n";
        assert_eq!(parse(pem.as_bytes()), Err(DecodeError::Parse));
    }

    #[test]
    fn test_empty_body() {
        // No body lines at all: decodes to zero bytes
        let pem = "-----BEGIN A-----\n-----END A-----\n";
        let doc = parse(pem.as_bytes()).unwrap();
        assert!(doc.body.is_empty());
    }
}
