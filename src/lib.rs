//! BER/TLV codec for TCAP information elements.
//!
//! TCAP messages are trees of single-octet-tag TLVs. This crate turns raw
//! bytes into [`Ie`] trees and back, without any knowledge of what the tags
//! mean: dialogue, component and transport layers sit on top of it.
//!
//! Two decode paths are provided:
//!
//! - [`flat`]: one-octet lengths only, no descent, strict. For simple
//!   buffers known to hold a flat run of short TLVs.
//! - [`engine`]: short- and long-form lengths, recursive descent into
//!   constructed values, lenient by default (see [`DecodeOptions`]).
//!
//! Encoding always emits minimal definite lengths, long form included.
//!
//! # Examples
//!
//! ```rust
//! use tcap_ie::prelude::*;
//! use tcap_ie::ber::tag::{component, tcap, universal};
//!
//! let begin = Ie::constructed(
//!     tcap::BEGIN,
//!     vec![
//!         Ie::new(tcap::ORIGINATING_TRANSACTION_ID, vec![0x11, 0x11, 0x11, 0x11]),
//!         Ie::constructed(
//!             tcap::COMPONENT_PORTION,
//!             vec![Ie::constructed(
//!                 component::INVOKE,
//!                 vec![
//!                     Ie::new(universal::INTEGER, vec![0x00]),
//!                     Ie::new(universal::INTEGER, vec![0x03]),
//!                 ],
//!             )?],
//!         )?,
//!     ],
//! )?;
//!
//! let wire = begin.encode();
//! let decoded = decode_sequence(wire)?;
//! assert_eq!(decoded, vec![begin]);
//! # Ok::<(), tcap_ie::Error>(())
//! ```
//!
//! # Logging
//!
//! Decoding emits [`tracing`] events: `trace` for every header decoded and
//! `debug` whenever the lenient engine papers over malformed input. No
//! subscriber is installed by the library.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod ber;
pub mod config;
pub mod engine;
pub mod error;
pub mod flat;
pub mod ie;
pub mod prelude;

pub use ber::{Class, EncodeBuf, Form, Tag};
pub use config::DecodeOptions;
pub use engine::{decode_recursive, decode_recursive_with, decode_sequence, decode_sequence_with};
pub use error::{DecodeErrorKind, EncodeErrorKind, Error, Result};
pub use flat::{decode_all, decode_one};
pub use ie::{Children, Ie};
