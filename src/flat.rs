//! Flat short-form codec.
//!
//! Treats the input as a linear run of sibling TLVs with one-octet lengths
//! (0-255, no long form) and never descends into constructed values. Every
//! irregularity is an error; see [`crate::engine`] for the lenient path.

use bytes::Bytes;

use crate::ber::Tag;
use crate::error::{DecodeErrorKind, Error, Result};
use crate::ie::Ie;

/// Decode one TLV from the front of `data`.
///
/// Returns the IE and the number of bytes it occupied. The value is a
/// zero-copy slice of `data`.
pub fn decode_one(data: &Bytes) -> Result<(Ie, usize)> {
    decode_one_at(data, 0)
}

fn decode_one_at(data: &Bytes, offset: usize) -> Result<(Ie, usize)> {
    if data.len() < 2 {
        return Err(Error::decode(
            offset + data.len(),
            DecodeErrorKind::TruncatedData,
        ));
    }

    let tag = Tag::from(data[0]);
    let length = data[1] as usize;
    let end = 2 + length;
    if data.len() < end {
        return Err(Error::decode(
            offset + 2,
            DecodeErrorKind::InsufficientData {
                needed: length,
                available: data.len() - 2,
            },
        ));
    }

    Ok((Ie::new(tag, data.slice(2..end)), end))
}

/// Decode every TLV in `data` as a flat, ordered list of siblings.
///
/// Fails on the first malformed TLV; nothing decoded before it is returned.
/// An empty input yields an empty list.
pub fn decode_all(data: impl Into<Bytes>) -> Result<Vec<Ie>> {
    let data = data.into();
    let mut ies = Vec::new();
    let mut pos = 0;

    while pos < data.len() {
        let (ie, consumed) = decode_one_at(&data.slice(pos..), pos)?;
        tracing::trace!(tag = %ie.tag, offset = pos, length = ie.length, "decoded flat IE");
        ies.push(ie);
        pos += consumed;
    }

    Ok(ies)
}
