//! Decoder configuration.
//!
//! [`DecodeOptions`] bounds the work a single decode call may do and picks
//! between the lenient policy (best-effort trees from malformed input) and
//! the strict one (truncation and malformed nesting are errors).
//!
//! # Examples
//!
//! ```rust
//! use tcap_ie::DecodeOptions;
//!
//! let opts = DecodeOptions::default().strict().max_depth(8);
//! assert!(opts.is_strict());
//! ```

use crate::ber::length::MAX_LENGTH_OCTETS;

/// Default maximum nesting of constructed values.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Default maximum long-form length octets (lengths up to 4 GiB).
pub const DEFAULT_MAX_LENGTH_OCTETS: usize = 4;

/// Default maximum input size. TCAP messages ride in SCCP UDTs/XUDTs and
/// never come close to this.
pub const DEFAULT_MAX_INPUT_LEN: usize = 64 * 1024;

/// Options for the recursive BER engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodeOptions {
    pub(crate) strict: bool,
    pub(crate) max_depth: usize,
    pub(crate) max_length_octets: usize,
    pub(crate) max_input_len: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: DEFAULT_MAX_DEPTH,
            max_length_octets: DEFAULT_MAX_LENGTH_OCTETS,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

impl DecodeOptions {
    /// Lenient options with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail on truncated headers, truncated values, indefinite lengths and
    /// nested values that do not decode, instead of returning partial trees.
    ///
    /// A single octet left at the end of a sequence is still ignored, and
    /// the driver still resynchronizes after children that stop short of
    /// their parent's value.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Return partial trees for malformed input (the default).
    pub fn lenient(mut self) -> Self {
        self.strict = false;
        self
    }

    /// Set the maximum nesting of constructed values that are descended into.
    pub fn max_depth(mut self, max: usize) -> Self {
        self.max_depth = max;
        self
    }

    /// Set the maximum long-form length octets, capped at 8.
    pub fn max_length_octets(mut self, max: usize) -> Self {
        self.max_length_octets = max.min(MAX_LENGTH_OCTETS);
        self
    }

    /// Set the maximum accepted input size in bytes.
    pub fn max_input_len(mut self, max: usize) -> Self {
        self.max_input_len = max;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn depth_limit(&self) -> usize {
        self.max_depth
    }

    pub fn length_octets_limit(&self) -> usize {
        self.max_length_octets
    }

    pub fn input_len_limit(&self) -> usize {
        self.max_input_len
    }
}
