//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```rust
//! use tcap_ie::prelude::*;
//! ```
//!
//! This imports:
//! - Core types: [`Ie`], [`Children`], [`Tag`], [`Class`], [`Form`]
//! - Decoding: [`decode_all`], [`decode_sequence`], [`DecodeOptions`]
//! - Error handling: [`Error`], [`Result`]

pub use crate::ber::{Class, Form, Tag};
pub use crate::config::DecodeOptions;
pub use crate::engine::{decode_sequence, decode_sequence_with};
pub use crate::error::{Error, Result};
pub use crate::flat::decode_all;
pub use crate::ie::{Children, Ie};
