//! Common test fixtures: hand-assembled TCAP messages.

use bytes::Bytes;

// =============================================================================
// TC-BEGIN carrying a single Invoke (opcode 3, cancelLocation)
// =============================================================================

/// Originating transaction ID used by the fixtures.
pub const OTID: [u8; 4] = [0x11, 0x11, 0x11, 0x11];

/// Operation argument carried by the Invoke: an OCTET STRING TLV.
pub const INVOKE_PARAMETER: [u8; 10] = [0x04, 0x08, 0x00, 0x01, 0x01, 0x21, 0x43, 0x65, 0x87, 0xF9];

/// Begin { OTID, ComponentPortion { Invoke { id 0, opcode 3, parameter } } }
pub fn begin_invoke() -> Bytes {
    Bytes::from_static(&[
        0x62, 0x1A, // Begin
        0x48, 0x04, 0x11, 0x11, 0x11, 0x11, // OTID
        0x6C, 0x12, // Component portion
        0xA1, 0x10, // Invoke
        0x02, 0x01, 0x00, // Invoke ID
        0x02, 0x01, 0x03, // Operation code
        0x04, 0x08, 0x00, 0x01, 0x01, 0x21, 0x43, 0x65, 0x87, 0xF9, // Parameter
    ])
}

/// End { DTID, ComponentPortion { ReturnResultLast { id 0 } } }
pub fn end_return_result() -> Bytes {
    Bytes::from_static(&[
        0x64, 0x0D, // End
        0x49, 0x04, 0x22, 0x22, 0x22, 0x22, // DTID
        0x6C, 0x05, // Component portion
        0xA2, 0x03, // ReturnResultLast
        0x02, 0x01, 0x00, // Invoke ID
    ])
}

// =============================================================================
// Long-form lengths
// =============================================================================

/// Component portion whose Invoke parameter is `len` bytes long.
///
/// Built by hand so the expected header octets are visible.
pub fn invoke_with_parameter(len: usize) -> Vec<u8> {
    fn header(tag: u8, len: usize) -> Vec<u8> {
        let mut out = vec![tag];
        if len < 0x80 {
            out.push(len as u8);
        } else if len <= 0xFF {
            out.extend([0x81, len as u8]);
        } else {
            out.extend([0x82, (len >> 8) as u8, len as u8]);
        }
        out
    }

    let mut param = header(0x04, len);
    param.extend(std::iter::repeat_n(0x5A, len));

    let mut invoke_body = vec![0x02, 0x01, 0x01, 0x02, 0x01, 0x2D];
    invoke_body.extend(&param);

    let mut invoke = header(0xA1, invoke_body.len());
    invoke.extend(invoke_body);

    let mut portion = header(0x6C, invoke.len());
    portion.extend(invoke);
    portion
}
