//! Recursive BER engine.
//!
//! Decodes short- and long-form lengths and descends into constructed
//! values, attaching the result of each descent to the IE as [`Children`].
//!
//! # Lenient decoding
//!
//! By default the engine prefers a best-effort tree to an error, matching
//! what signaling peers in the field actually send:
//!
//! - long-form length octets missing at the end of input count as zero;
//! - a value cut short by the end of input is returned as far as it goes
//!   ([`Ie::is_truncated`]) and its children are [`Children::Truncated`];
//! - a constructed value that does not parse as nested IEs leaves the IE
//!   intact with [`Children::Failed`].
//!
//! [`DecodeOptions::strict`] turns each of these into an error. Length
//! fields wider than [`DecodeOptions::max_length_octets`] and inputs larger
//! than [`DecodeOptions::max_input_len`] are errors under both policies.
//!
//! # Resynchronization
//!
//! When the children of a constructed IE do not cover its whole value
//! (typically a single trailing pad octet), [`decode_sequence`] continues
//! right after the last child rather than after the declared value. This
//! applies under both policies, as does ignoring a single trailing octet
//! too short to hold a header.
//!
//! # Examples
//!
//! ```rust
//! use tcap_ie::engine::decode_sequence;
//!
//! let ies = decode_sequence(vec![0x30, 0x07, 0x04, 0x02, 0xAA, 0xBB, 0x04, 0x01, 0xCC])?;
//! assert_eq!(ies[0].children().len(), 2);
//! # Ok::<(), tcap_ie::Error>(())
//! ```

use bytes::Bytes;

use crate::ber::{Tag, decode_length};
use crate::config::DecodeOptions;
use crate::error::{DecodeErrorKind, Error, Result};
use crate::ie::{Children, Ie};

/// Decode one IE, descending into it if constructed.
pub fn decode_recursive(data: &Bytes) -> Result<Ie> {
    decode_recursive_with(data, &DecodeOptions::default())
}

/// Decode one IE with explicit options.
pub fn decode_recursive_with(data: &Bytes, opts: &DecodeOptions) -> Result<Ie> {
    check_input_len(data, opts)?;
    Parser { opts }.node(data, 0, 0).map(|node| node.ie)
}

/// Decode every IE in `data`, descending into constructed values.
///
/// An input shorter than two bytes yields an empty list.
pub fn decode_sequence(data: impl Into<Bytes>) -> Result<Vec<Ie>> {
    decode_sequence_with(data, &DecodeOptions::default())
}

/// Decode every IE in `data` with explicit options.
pub fn decode_sequence_with(data: impl Into<Bytes>, opts: &DecodeOptions) -> Result<Vec<Ie>> {
    let data = data.into();
    check_input_len(&data, opts)?;
    Parser { opts }.sequence(&data, 0, 0).map(|seq| seq.ies)
}

fn check_input_len(data: &Bytes, opts: &DecodeOptions) -> Result<()> {
    if data.len() > opts.max_input_len {
        return Err(Error::MessageTooLarge {
            size: data.len(),
            max: opts.max_input_len,
        });
    }
    Ok(())
}

/// A decoded IE plus the bookkeeping the sequence driver needs.
struct Node {
    ie: Ie,
    /// Tag and length octets as they appeared on the wire.
    header_len: usize,
    /// Bytes of input the IE occupied.
    consumed: usize,
    /// Combined on-wire size of the children, if descent succeeded.
    children_span: Option<usize>,
}

impl Node {
    /// How far the enclosing sequence moves past this node.
    fn advance(&self) -> usize {
        match self.children_span {
            Some(used) if !self.ie.children().is_empty() && used != self.ie.value.len() => {
                tracing::trace!(
                    tag = %self.ie.tag,
                    declared = self.ie.value.len(),
                    used,
                    "children end before value, resynchronizing"
                );
                // Overlapping children can claim more than the node holds
                (self.header_len + used).min(self.consumed)
            }
            _ => self.consumed,
        }
    }
}

struct Sequence {
    ies: Vec<Ie>,
    /// Sum of each IE's own size on the wire, regardless of resynchronization.
    span: usize,
}

struct Parser<'o> {
    opts: &'o DecodeOptions,
}

impl Parser<'_> {
    /// `base` is the offset of `data` within the top-level input, for
    /// error reporting; `depth` is the number of constructed values above.
    fn node(&self, data: &Bytes, base: usize, depth: usize) -> Result<Node> {
        if data.len() < 2 {
            return Err(Error::decode(base + data.len(), DecodeErrorKind::TruncatedData));
        }

        let tag = Tag::from(data[0]);
        let length = decode_length(&data[1..], self.opts.max_length_octets, self.opts.strict)
            .map_err(|kind| Error::decode(base + 1, kind))?;

        if length.missing > 0 {
            tracing::debug!(
                tag = %tag,
                offset = base,
                missing = length.missing,
                "length octets past end of input, treating as zero"
            );
        }

        let header_len = 1 + length.octets;
        let declared_end = header_len.saturating_add(length.value);
        let end = declared_end.min(data.len());
        let value = data.slice(header_len.min(end)..end);

        tracing::trace!(
            tag = %tag,
            offset = base,
            length = length.value,
            header_len,
            "decoded IE header"
        );

        if declared_end > data.len() {
            if self.opts.strict {
                return Err(Error::decode(base, DecodeErrorKind::TlvOverflow));
            }
            tracing::debug!(
                tag = %tag,
                offset = base,
                declared = length.value,
                available = value.len(),
                "value truncated by end of input"
            );
            let children = if tag.is_constructed() {
                Children::Truncated
            } else {
                Children::NotParsed
            };
            return Ok(Node {
                ie: Ie::parsed(tag, length.value, value, children),
                header_len,
                consumed: end,
                children_span: None,
            });
        }

        let (children, children_span) = if tag.is_constructed() {
            self.children(&value, base + header_len, depth + 1)?
        } else {
            (Children::NotParsed, None)
        };

        Ok(Node {
            ie: Ie::parsed(tag, length.value, value, children),
            header_len,
            consumed: end,
            children_span,
        })
    }

    fn children(
        &self,
        value: &Bytes,
        base: usize,
        depth: usize,
    ) -> Result<(Children, Option<usize>)> {
        let outcome = if depth > self.opts.max_depth {
            Err(Error::decode(
                base,
                DecodeErrorKind::DepthExceeded {
                    max: self.opts.max_depth,
                },
            ))
        } else {
            self.sequence(value, base, depth)
        };

        match outcome {
            Ok(seq) => Ok((Children::Parsed(seq.ies), Some(seq.span))),
            Err(err) if self.opts.strict => Err(err),
            Err(err) => {
                tracing::debug!(offset = base, error = %err, "nested IEs did not parse");
                Ok((Children::Failed(err), None))
            }
        }
    }

    fn sequence(&self, data: &Bytes, base: usize, depth: usize) -> Result<Sequence> {
        let mut ies = Vec::new();
        let mut span = 0;
        let mut pos = 0;

        while data.len() - pos >= 2 {
            let node = self.node(&data.slice(pos..), base + pos, depth)?;
            span += node.consumed;
            pos += node.advance();
            ies.push(node.ie);
        }

        Ok(Sequence { ies, span })
    }
}
