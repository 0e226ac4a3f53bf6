//! BER length octets.
//!
//! Short form: one octet, high bit clear, value 0-127.
//! Long form: one octet `0x80 | n` followed by `n` big-endian length octets.
//!
//! TCAP never uses the indefinite form (`0x80` alone), so it is either read
//! as a zero length or rejected, depending on the caller's policy.

use crate::error::DecodeErrorKind;

/// Hard upper bound on long-form length octets (a `u64` worth).
pub const MAX_LENGTH_OCTETS: usize = 8;

/// A decoded length field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Length {
    /// Declared number of value octets.
    pub value: usize,
    /// Octets occupied by the length field, the indicator included.
    pub octets: usize,
    /// Long-form length octets that lay past the end of the input.
    pub missing: usize,
}

/// Decode a length field starting at the indicator octet.
///
/// `max_octets` bounds the long-form octet count. With `strict` unset,
/// length octets beyond the end of `data` count as zero and an indefinite
/// indicator reads as length 0; with `strict` set both are errors.
pub fn decode_length(
    data: &[u8],
    max_octets: usize,
    strict: bool,
) -> Result<Length, DecodeErrorKind> {
    let Some(&indicator) = data.first() else {
        return Err(DecodeErrorKind::TruncatedData);
    };

    if indicator & 0x80 == 0 {
        return Ok(Length {
            value: indicator as usize,
            octets: 1,
            missing: 0,
        });
    }

    let count = (indicator & 0x7F) as usize;
    if count == 0 && strict {
        return Err(DecodeErrorKind::IndefiniteLength);
    }
    if count > max_octets.min(MAX_LENGTH_OCTETS) {
        return Err(DecodeErrorKind::LengthTooLong { octets: count });
    }

    let available = data.len() - 1;
    if count > available && strict {
        return Err(DecodeErrorKind::InsufficientData {
            needed: count,
            available,
        });
    }

    let mut value: u64 = 0;
    for i in 1..=count {
        // Missing octets keep their place value but contribute nothing
        value = (value << 8) | data.get(i).copied().unwrap_or(0) as u64;
    }
    let value =
        usize::try_from(value).map_err(|_| DecodeErrorKind::LengthTooLong { octets: count })?;

    Ok(Length {
        value,
        octets: 1 + count,
        missing: count.saturating_sub(available),
    })
}

/// Number of octets [`encode_length`] produces for `len`.
pub const fn length_octets(len: usize) -> usize {
    if len < 0x80 {
        1
    } else {
        1 + (usize::BITS - len.leading_zeros()).div_ceil(8) as usize
    }
}

/// Encode a definite length in minimal form.
///
/// Returns a stack-allocated array and the number of valid bytes.
/// The bytes are in REVERSE order (indicator last) for the reverse encode
/// buffer.
pub fn encode_length(len: usize) -> ([u8; MAX_LENGTH_OCTETS + 1], usize) {
    let mut out = [0u8; MAX_LENGTH_OCTETS + 1];
    if len < 0x80 {
        out[0] = len as u8;
        return (out, 1);
    }

    let mut rest = len;
    let mut count = 0;
    while rest > 0 {
        out[count] = rest as u8;
        rest >>= 8;
        count += 1;
    }
    out[count] = 0x80 | count as u8;
    (out, count + 1)
}
