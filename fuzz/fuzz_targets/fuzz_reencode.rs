#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;

use tcap_ie::{DecodeOptions, decode_sequence_with};

// Anything the strict engine accepts must re-encode to a tree that decodes
// to the same values.
fuzz_target!(|data: &[u8]| {
    let opts = DecodeOptions::new().strict();
    let Ok(ies) = decode_sequence_with(Bytes::copy_from_slice(data), &opts) else {
        return;
    };

    for ie in ies {
        let again = decode_sequence_with(ie.encode(), &opts).expect("re-encoded IE decodes");
        assert_eq!(again.len(), 1);
        assert_eq!(again[0].tag, ie.tag);
        assert_eq!(again[0].value, ie.value);
    }
});
