//! Information Elements.
//!
//! An [`Ie`] is one TLV node: a tag, the declared length, the value octets
//! and the outcome of descending into the value when the tag is constructed.
//!
//! Parsed values are [`Bytes`] slices of the decoder's input. They share the
//! input allocation by reference count, so a parsed tree stays valid after
//! the caller drops its own handle to the input, and no octet is copied.

use std::fmt;

use bytes::Bytes;
use smallvec::SmallVec;

use crate::ber::length::{MAX_LENGTH_OCTETS, encode_length, length_octets};
use crate::ber::{EncodeBuf, Tag};
use crate::error::{EncodeErrorKind, Error, Result};

/// Outcome of descending into an IE's value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Children {
    /// No descent was attempted: the tag is primitive, the IE was built
    /// from a value, or it came from the flat codec.
    #[default]
    NotParsed,
    /// The value parsed as a sequence of nested IEs.
    Parsed(Vec<Ie>),
    /// Descent was attempted and failed; the IE is otherwise intact.
    Failed(Error),
    /// The value was cut short by the end of input, so descent was skipped.
    Truncated,
}

impl Children {
    /// Parsed children, or an empty slice for every other outcome.
    pub fn as_slice(&self) -> &[Ie] {
        match self {
            Children::Parsed(ies) => ies,
            _ => &[],
        }
    }

    /// Whether the value was successfully parsed into nested IEs.
    pub fn is_parsed(&self) -> bool {
        matches!(self, Children::Parsed(_))
    }

    /// The error that stopped descent, if any.
    pub fn error(&self) -> Option<&Error> {
        match self {
            Children::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// A TLV information element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ie {
    pub tag: Tag,
    /// Declared value length. For parsed IEs this is what the wire said,
    /// which exceeds `value.len()` when the input was truncated.
    pub length: usize,
    pub value: Bytes,
    pub children: Children,
}

impl Ie {
    /// Create an IE from a tag and value; the length is derived from the value.
    pub fn new(tag: Tag, value: impl Into<Bytes>) -> Self {
        let value = value.into();
        Self {
            tag,
            length: value.len(),
            value,
            children: Children::NotParsed,
        }
    }

    /// Create a constructed IE whose value is the encoding of `children`.
    ///
    /// Fails if `tag` is primitive.
    pub fn constructed(tag: Tag, children: Vec<Ie>) -> Result<Self> {
        if !tag.is_constructed() {
            return Err(Error::encode(EncodeErrorKind::NotConstructed {
                tag: tag.as_u8(),
            }));
        }

        let capacity = children.iter().map(Ie::encoded_len).sum();
        let mut buf = EncodeBuf::with_capacity(capacity);
        for child in children.iter().rev() {
            child.encode_into(&mut buf);
        }
        let value = buf.finish();

        Ok(Self {
            tag,
            length: value.len(),
            value,
            children: Children::Parsed(children),
        })
    }

    pub(crate) fn parsed(tag: Tag, length: usize, value: Bytes, children: Children) -> Self {
        Self {
            tag,
            length,
            value,
            children,
        }
    }

    /// Parsed child IEs; empty unless descent succeeded.
    pub fn children(&self) -> &[Ie] {
        self.children.as_slice()
    }

    /// First direct child carrying `tag`.
    pub fn find(&self, tag: Tag) -> Option<&Ie> {
        self.children().iter().find(|ie| ie.tag == tag)
    }

    /// Whether the declared length promised more octets than were present.
    pub fn is_truncated(&self) -> bool {
        self.length > self.value.len()
    }

    /// Recompute `length` from `value`. Call after replacing `value`.
    pub fn set_length(&mut self) {
        self.length = self.value.len();
    }

    /// Size of the encoding: tag, minimal length field, value.
    pub fn encoded_len(&self) -> usize {
        1 + length_octets(self.value.len()) + self.value.len()
    }

    /// Tag and length octets, in wire order.
    fn header(&self) -> SmallVec<[u8; MAX_LENGTH_OCTETS + 2]> {
        let mut header = SmallVec::new();
        header.push(self.tag.as_u8());
        let (len, count) = encode_length(self.value.len());
        header.extend(len[..count].iter().rev().copied());
        header
    }

    /// Write the encoding into `dst`, returning the number of bytes written.
    ///
    /// Fails with `BufferTooSmall` if `dst` is shorter than [`encoded_len`](Self::encoded_len).
    pub fn encode_to(&self, dst: &mut [u8]) -> Result<usize> {
        let needed = self.encoded_len();
        if dst.len() < needed {
            return Err(Error::encode(EncodeErrorKind::BufferTooSmall {
                needed,
                available: dst.len(),
            }));
        }

        let header = self.header();
        dst[..header.len()].copy_from_slice(&header);
        dst[header.len()..needed].copy_from_slice(&self.value);
        Ok(needed)
    }

    /// Prepend this IE to a reverse encode buffer.
    pub fn encode_into(&self, buf: &mut EncodeBuf) {
        buf.push_ie(self);
    }

    /// Encode to a new buffer.
    pub fn encode(&self) -> Bytes {
        let mut buf = EncodeBuf::with_capacity(self.encoded_len());
        self.encode_into(&mut buf);
        buf.finish()
    }
}

impl fmt::Display for Ie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Tag: {}, Length: {}, Value: ", self.tag, self.length)?;
        for byte in self.value.iter() {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ", IE: [")?;
        for (i, child) in self.children().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", child)?;
        }
        write!(f, "]}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ber::tag::{component, tcap, universal};

    #[test]
    fn test_new_sets_length() {
        let ie = Ie::new(universal::OCTET_STRING, vec![1, 2, 3]);
        assert_eq!(ie.length, 3);
        assert_eq!(ie.children, Children::NotParsed);
        assert!(!ie.is_truncated());
    }

    #[test]
    fn test_set_length_after_mutation() {
        let mut ie = Ie::new(universal::OCTET_STRING, vec![1, 2, 3]);
        ie.value = Bytes::from_static(&[9; 10]);
        assert_eq!(ie.length, 3);
        ie.set_length();
        assert_eq!(ie.length, 10);
    }

    #[test]
    fn test_encoded_len() {
        let len = |n: usize| Ie::new(universal::OCTET_STRING, vec![0u8; n]).encoded_len();
        assert_eq!(len(0), 2);
        assert_eq!(len(127), 129);
        assert_eq!(len(128), 131);
        assert_eq!(len(255), 258);
        assert_eq!(len(256), 260);
        assert_eq!(len(70_000), 70_005);
    }

    #[test]
    fn test_encode_short_form() {
        let ie = Ie::new(tcap::ORIGINATING_TRANSACTION_ID, vec![0x11, 0x11, 0x11, 0x11]);
        assert_eq!(&ie.encode()[..], &[0x48, 0x04, 0x11, 0x11, 0x11, 0x11]);
    }

    #[test]
    fn test_header_size_agrees_with_encoded_len() {
        for n in [127, 128, 200, 255, 256, 1000] {
            let ie = Ie::new(universal::OCTET_STRING, vec![0x5A; n]);
            let mut dst = vec![0u8; ie.encoded_len()];
            let written = ie.encode_to(&mut dst).unwrap();
            assert_eq!(written, ie.encoded_len());
            assert_eq!(&dst[written - n..], &ie.value[..]);
            assert_eq!(ie.encode(), Bytes::from(dst), "n={}", n);
        }
    }

    #[test]
    fn test_encode_to_long_form_header() {
        let ie = Ie::new(universal::OCTET_STRING, vec![0u8; 200]);
        let mut dst = [0u8; 203];
        ie.encode_to(&mut dst).unwrap();
        assert_eq!(&dst[..3], &[0x04, 0x81, 0xC8]);
    }

    #[test]
    fn test_encode_to_buffer_too_small() {
        let ie = Ie::new(universal::OCTET_STRING, vec![0u8; 4]);
        let mut dst = [0u8; 5];
        assert_eq!(
            ie.encode_to(&mut dst),
            Err(Error::encode(EncodeErrorKind::BufferTooSmall {
                needed: 6,
                available: 5
            }))
        );
    }

    #[test]
    fn test_encode_to_larger_buffer() {
        let ie = Ie::new(universal::NULL, Bytes::new());
        let mut dst = [0xFFu8; 4];
        assert_eq!(ie.encode_to(&mut dst).unwrap(), 2);
        assert_eq!(dst, [0x05, 0x00, 0xFF, 0xFF]);
    }

    #[test]
    fn test_constructed() {
        let invoke = Ie::constructed(
            component::INVOKE,
            vec![
                Ie::new(universal::INTEGER, vec![0x00]),
                Ie::new(universal::INTEGER, vec![0x03]),
            ],
        )
        .unwrap();
        assert_eq!(invoke.length, 6);
        assert_eq!(invoke.children().len(), 2);
        assert_eq!(
            &invoke.encode()[..],
            &[0xA1, 0x06, 0x02, 0x01, 0x00, 0x02, 0x01, 0x03]
        );
    }

    #[test]
    fn test_constructed_rejects_primitive_tag() {
        let err = Ie::constructed(universal::OCTET_STRING, vec![]).unwrap_err();
        assert_eq!(
            err,
            Error::encode(EncodeErrorKind::NotConstructed { tag: 0x04 })
        );
    }

    #[test]
    fn test_find() {
        let begin = Ie::constructed(
            tcap::BEGIN,
            vec![
                Ie::new(tcap::ORIGINATING_TRANSACTION_ID, vec![1, 2, 3, 4]),
                Ie::constructed(tcap::COMPONENT_PORTION, vec![]).unwrap(),
            ],
        )
        .unwrap();
        let otid = begin.find(tcap::ORIGINATING_TRANSACTION_ID).unwrap();
        assert_eq!(&otid.value[..], &[1, 2, 3, 4]);
        assert!(begin.find(tcap::DESTINATION_TRANSACTION_ID).is_none());
    }

    #[test]
    fn test_display() {
        let seq = Ie::constructed(
            universal::SEQUENCE,
            vec![Ie::new(universal::OCTET_STRING, vec![0xAA, 0xBB])],
        )
        .unwrap();
        assert_eq!(
            seq.to_string(),
            "{Tag: 0x30, Length: 4, Value: 0402aabb, IE: [{Tag: 0x04, Length: 2, Value: aabb, IE: []}]}"
        );
    }

    #[test]
    fn test_children_accessors() {
        let failed = Children::Failed(Error::InvalidTag { code: 40 });
        assert!(failed.as_slice().is_empty());
        assert!(!failed.is_parsed());
        assert_eq!(failed.error(), Some(&Error::InvalidTag { code: 40 }));
        assert!(Children::Parsed(vec![]).is_parsed());
        assert!(Children::Truncated.error().is_none());
    }
}
