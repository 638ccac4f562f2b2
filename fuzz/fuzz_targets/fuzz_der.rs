#![no_main]
use libfuzzer_sys::fuzz_target;
use pemder_utils::asn1::{AnyRef, DerRead};
use pemder_utils::Cursor;

fuzz_target!(|data: &[u8]| {
    let mut cur = Cursor::new(data);
    while !cur.is_empty() {
        if AnyRef::read(&mut cur).is_err() {
            break;
        }
    }
});
