//! BER tag definitions for TCAP.
//!
//! Tag encoding follows X.690 Section 8.1.2:
//! - Bits 7-6: Class (00=Universal, 01=Application, 10=Context-specific, 11=Private)
//! - Bit 5: Primitive (0) or Constructed (1)
//! - Bits 4-0: Tag number (0-31)
//!
//! TCAP only uses single-octet identifiers, so code 31 is an ordinary code
//! here rather than the high-tag-number escape.

use crate::error::{Error, Result};

/// Tag class bits (bits 7-6)
pub mod class {
    pub const UNIVERSAL: u8 = 0x00;
    pub const APPLICATION: u8 = 0x40;
    pub const CONTEXT_SPECIFIC: u8 = 0x80;
    pub const PRIVATE: u8 = 0xC0;
}

/// Constructed bit (bit 5)
pub const CONSTRUCTED: u8 = 0x20;

/// Largest code that fits the 5 code bits.
pub const MAX_CODE: u8 = 0x1F;

/// Tag class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Class {
    Universal,
    ApplicationWide,
    ContextSpecific,
    Private,
}

impl Class {
    /// The two class bits, unshifted.
    pub const fn bits(self) -> u8 {
        match self {
            Class::Universal => 0,
            Class::ApplicationWide => 1,
            Class::ContextSpecific => 2,
            Class::Private => 3,
        }
    }

    /// Class from the two low bits of `bits`.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Class::Universal,
            1 => Class::ApplicationWide,
            2 => Class::ContextSpecific,
            _ => Class::Private,
        }
    }
}

/// Tag form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Form {
    Primitive,
    Constructor,
}

impl Form {
    /// The form bit, unshifted.
    pub const fn bits(self) -> u8 {
        match self {
            Form::Primitive => 0,
            Form::Constructor => 1,
        }
    }

    /// Form from the low bit of `bits`.
    pub const fn from_bits(bits: u8) -> Self {
        if bits & 0x01 == 0 {
            Form::Primitive
        } else {
            Form::Constructor
        }
    }
}

/// A single-octet BER tag.
///
/// Class, form and code are derived from the octet on demand; the octet is
/// the only state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag(u8);

impl Tag {
    /// Create a tag from its parts.
    ///
    /// Fails with [`Error::InvalidTag`] if `code` does not fit in 5 bits.
    pub const fn new(class: Class, form: Form, code: u8) -> Result<Self> {
        if code > MAX_CODE {
            return Err(Error::InvalidTag { code });
        }
        Ok(Self((class.bits() << 6) | (form.bits() << 5) | code))
    }

    /// Create a tag from raw parts without range checks.
    ///
    /// Bits that do not fit are shifted out or OR-ed into neighbouring
    /// fields, matching encoders that never validated their inputs.
    pub const fn new_truncating(class: u8, form: u8, code: u8) -> Self {
        Self((class << 6) | (form << 5) | code)
    }

    /// Wrap a raw tag octet.
    pub const fn from_u8(raw: u8) -> Self {
        Self(raw)
    }

    pub const fn universal_primitive(code: u8) -> Result<Self> {
        Self::new(Class::Universal, Form::Primitive, code)
    }

    pub const fn universal_constructor(code: u8) -> Result<Self> {
        Self::new(Class::Universal, Form::Constructor, code)
    }

    pub const fn application_primitive(code: u8) -> Result<Self> {
        Self::new(Class::ApplicationWide, Form::Primitive, code)
    }

    pub const fn application_constructor(code: u8) -> Result<Self> {
        Self::new(Class::ApplicationWide, Form::Constructor, code)
    }

    pub const fn context_primitive(code: u8) -> Result<Self> {
        Self::new(Class::ContextSpecific, Form::Primitive, code)
    }

    pub const fn context_constructor(code: u8) -> Result<Self> {
        Self::new(Class::ContextSpecific, Form::Constructor, code)
    }

    pub const fn private_primitive(code: u8) -> Result<Self> {
        Self::new(Class::Private, Form::Primitive, code)
    }

    pub const fn private_constructor(code: u8) -> Result<Self> {
        Self::new(Class::Private, Form::Constructor, code)
    }

    /// The raw tag octet.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn class(self) -> Class {
        Class::from_bits(tag_class(self.0) >> 6)
    }

    #[inline]
    pub const fn form(self) -> Form {
        Form::from_bits(self.0 >> 5)
    }

    #[inline]
    pub const fn code(self) -> u8 {
        tag_number(self.0)
    }

    /// Check if the value under this tag is a sequence of nested IEs.
    #[inline]
    pub const fn is_constructed(self) -> bool {
        is_constructed(self.0)
    }
}

impl From<u8> for Tag {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

/// Universal tags (class bits 00)
pub mod universal {
    use super::Tag;

    pub const BOOLEAN: Tag = Tag::from_u8(0x01);
    pub const INTEGER: Tag = Tag::from_u8(0x02);
    pub const BIT_STRING: Tag = Tag::from_u8(0x03);
    pub const OCTET_STRING: Tag = Tag::from_u8(0x04);
    pub const NULL: Tag = Tag::from_u8(0x05);
    pub const OBJECT_IDENTIFIER: Tag = Tag::from_u8(0x06);
    pub const EXTERNAL: Tag = Tag::from_u8(0x28); // Constructed
    pub const SEQUENCE: Tag = Tag::from_u8(0x30); // Constructed
}

/// TCAP transaction sub-layer tags (ITU-T Q.773, application class)
pub mod tcap {
    use super::Tag;

    pub const UNIDIRECTIONAL: Tag = Tag::from_u8(0x61);
    pub const BEGIN: Tag = Tag::from_u8(0x62);
    pub const END: Tag = Tag::from_u8(0x64);
    pub const CONTINUE: Tag = Tag::from_u8(0x65);
    pub const ABORT: Tag = Tag::from_u8(0x67);

    pub const ORIGINATING_TRANSACTION_ID: Tag = Tag::from_u8(0x48);
    pub const DESTINATION_TRANSACTION_ID: Tag = Tag::from_u8(0x49);
    pub const P_ABORT_CAUSE: Tag = Tag::from_u8(0x4A);

    pub const DIALOGUE_PORTION: Tag = Tag::from_u8(0x6B);
    pub const COMPONENT_PORTION: Tag = Tag::from_u8(0x6C);
}

/// Component tags (context-specific, constructed)
pub mod component {
    use super::Tag;

    pub const INVOKE: Tag = Tag::from_u8(0xA1); // 0x80 | 0x20 | 0x01
    pub const RETURN_RESULT_LAST: Tag = Tag::from_u8(0xA2);
    pub const RETURN_ERROR: Tag = Tag::from_u8(0xA3);
    pub const REJECT: Tag = Tag::from_u8(0xA4);
    pub const RETURN_RESULT_NOT_LAST: Tag = Tag::from_u8(0xA7);

    /// Linked ID inside an Invoke (context-specific, primitive)
    pub const LINKED_ID: Tag = Tag::from_u8(0x80);
}

/// Check if a tag indicates a constructed type
#[inline]
pub const fn is_constructed(tag: u8) -> bool {
    tag & CONSTRUCTED != 0
}

/// Get the class of a tag
#[inline]
pub const fn tag_class(tag: u8) -> u8 {
    tag & 0xC0
}

/// Get the tag number (bits 4-0)
#[inline]
pub const fn tag_number(tag: u8) -> u8 {
    tag & 0x1F
}
