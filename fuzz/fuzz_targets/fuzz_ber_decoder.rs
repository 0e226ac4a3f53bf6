#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;

use tcap_ie::{DecodeOptions, decode_all, decode_one, decode_recursive, decode_sequence_with};

fuzz_target!(|data: &[u8]| {
    let bytes = Bytes::copy_from_slice(data);

    // Flat path
    let _ = decode_one(&bytes);
    let _ = decode_all(bytes.clone());

    // Recursive engine, both policies
    let _ = decode_recursive(&bytes);
    let _ = decode_sequence_with(bytes.clone(), &DecodeOptions::new());
    let _ = decode_sequence_with(bytes, &DecodeOptions::new().strict().max_depth(8));
});
