//! BER (Basic Encoding Rules) primitives for TCAP.
//!
//! This module provides the tag, length and reverse-buffer encoding pieces
//! that the IE codecs are built from. Only single-octet identifiers and
//! definite lengths are supported, as in TCAP.

mod encode;
pub mod length;
pub mod tag;

pub use encode::*;
pub use length::{Length, decode_length, encode_length, length_octets};
pub use tag::{Class, Form, Tag};
