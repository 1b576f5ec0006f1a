//! Scripting value support for browser-engine embedders.
//!
//! When native embedder code and a JavaScript-like runtime exchange values,
//! each value crossing the boundary is one of four primitives: string,
//! number, boolean, or null. [`Variant`] is that value — a sum type with
//! value semantics, total accessors, and an exclusively-owned string
//! payload. [`WideString`] is the payload carrier: an immutable UTF-16
//! buffer with an explicit length, built from wide units or decoded from
//! narrow multi-byte input.
//!
//! The core type is infallible from the caller's perspective: accessors
//! never fail, mismatched tags yield type-appropriate defaults, and lossy
//! decoding absorbs malformed input. [`ScriptError`] exists only for the
//! opt-in strict paths (strict decoding, strict JSON conversion).

use thiserror::Error;

pub mod script;
pub mod wide;

pub use script::{Variant, VariantKind};
pub use wide::WideString;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Malformed {0} byte sequence in narrow string")]
    Decode(&'static str),
    #[error("No scripting value representation for JSON {0}")]
    UnsupportedJson(&'static str),
}

pub type Result<T> = std::result::Result<T, ScriptError>;
