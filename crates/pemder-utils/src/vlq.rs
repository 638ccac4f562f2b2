//! Base-128 variable-length integers.
//!
//! The big-endian, 7-bits-per-byte continuation encoding used by ASN.1 OID
//! arcs: every byte except the last carries the high bit.

use crate::cursor::Cursor;
use pemder_types::DecodeError;

macro_rules! impl_vlq_decode {
    ($($name:ident => $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Decode one base-128 group sequence into a `", stringify!($ty), "`.")]
            ///
            /// Fails `Overflow` when the accumulated value no longer fits the
            /// target width, `EndOfInput` when the stream ends before a byte
            /// without the continuation bit.
            pub fn $name(cur: &mut Cursor<'_>) -> Result<$ty, DecodeError> {
                let mut value: $ty = 0;
                loop {
                    let byte = cur.take_one()?;
                    if value > <$ty>::MAX >> 7 {
                        return Err(DecodeError::Overflow);
                    }
                    value = (value << 7) | (byte & 0x7F) as $ty;
                    if byte & 0x80 == 0 {
                        return Ok(value);
                    }
                }
            }
        )*
    };
}

impl_vlq_decode! {
    decode_u8 => u8,
    decode_u16 => u16,
    decode_u32 => u32,
}

/// Encode `value` with the minimum number of bytes, continuation bit set on
/// all but the last.
pub fn encode_u32(value: u32, out: &mut Vec<u8>) {
    let len = encoded_len(value);
    for i in (0..len).rev() {
        let group = ((value >> (7 * i)) & 0x7F) as u8;
        if i == 0 {
            out.push(group);
        } else {
            out.push(group | 0x80);
        }
    }
}

/// Number of bytes `encode_u32` emits for `value`: ceil(log2(v+1) / 7),
/// with a one-byte floor for zero.
pub fn encoded_len(value: u32) -> usize {
    let bits = 32 - value.leading_zeros() as usize;
    bits.div_ceil(7).max(1)
}

/// Worst-case encoded size for an `n`-byte value: ceil(8n / 7).
pub fn max_encoded_len(n: usize) -> usize {
    (8 * n).div_ceil(7)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(v: u32) -> u32 {
        let mut buf = Vec::new();
        encode_u32(v, &mut buf);
        assert_eq!(buf.len(), encoded_len(v));
        let mut cur = Cursor::new(&buf);
        let out = decode_u32(&mut cur).unwrap();
        assert!(cur.is_empty());
        out
    }

    #[test]
    fn test_roundtrip_boundaries() {
        for v in [
            0u32,
            1,
            0x7F,
            0x80,
            0x3FFF,
            0x4000,
            0x1F_FFFF,
            0x20_0000,
            0x0FFF_FFFF,
            0x1000_0000,
            u32::MAX,
        ] {
            assert_eq!(roundtrip(v), v);
        }
    }

    #[test]
    fn test_known_encodings() {
        // 840 = 0x348 -> 86 48
        let mut buf = Vec::new();
        encode_u32(840, &mut buf);
        assert_eq!(buf, [0x86, 0x48]);

        // 113549 -> 86 F7 0D
        buf.clear();
        encode_u32(113_549, &mut buf);
        assert_eq!(buf, [0x86, 0xF7, 0x0D]);
    }

    #[test]
    fn test_decode_overflow_small_width() {
        // 840 does not fit a u8
        let mut cur = Cursor::new(&[0x86, 0x48]);
        assert_eq!(decode_u8(&mut cur), Err(DecodeError::Overflow));

        // but fits a u16
        let mut cur = Cursor::new(&[0x86, 0x48]);
        assert_eq!(decode_u16(&mut cur).unwrap(), 840);
    }

    #[test]
    fn test_decode_overflow_u32() {
        // Five full groups (35 bits) overflow a u32
        let mut cur = Cursor::new(&[0xFF, 0xFF, 0xFF, 0xFF, 0x7F]);
        assert_eq!(decode_u32(&mut cur), Err(DecodeError::Overflow));
    }

    #[test]
    fn test_decode_truncated() {
        // Continuation bit set on the last available byte
        let mut cur = Cursor::new(&[0x86]);
        assert_eq!(decode_u32(&mut cur), Err(DecodeError::EndOfInput));
    }

    #[test]
    fn test_sizing_helpers() {
        assert_eq!(encoded_len(0), 1);
        assert_eq!(encoded_len(0x7F), 1);
        assert_eq!(encoded_len(0x80), 2);
        assert_eq!(encoded_len(u32::MAX), 5);
        assert_eq!(max_encoded_len(4), 5);
        assert_eq!(max_encoded_len(7), 8);
    }
}
