use std::fmt;
use std::sync::LazyLock;

use encoding_rs::Encoding;

use crate::wide::WideString;

mod json;
mod serde;

/// Shared read-only empty string handed out by [`Variant::to_wide`] for
/// non-string tags. Never mutated, never freed.
static EMPTY_WIDE: LazyLock<WideString> = LazyLock::new(WideString::empty);

/// Discriminant of a [`Variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    String,
    Number,
    Boolean,
    Null,
}

/// One JavaScript-like primitive crossing the embedder/runtime boundary.
///
/// Exactly one payload is live at a time; the enum makes mismatched
/// tag/payload states unrepresentable. Cloning a `String` variant
/// deep-copies the buffer, so no two instances ever alias storage.
///
/// Accessors are total: a mismatched tag yields the type-appropriate
/// default (`0`, `0.0`, `false`, empty string) instead of failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Variant {
    String(WideString),
    Number(f64),
    Boolean(bool),
    #[default]
    Null,
}

impl Variant {
    /// Decodes a narrow multi-byte string (lossy). Empty input still tags
    /// the result as a string, matching engine semantics for `""`.
    pub fn from_bytes(bytes: &[u8], encoding: &'static Encoding) -> Self {
        Variant::String(WideString::from_bytes(bytes, encoding))
    }

    pub fn kind(&self) -> VariantKind {
        match self {
            Variant::String(_) => VariantKind::String,
            Variant::Number(_) => VariantKind::Number,
            Variant::Boolean(_) => VariantKind::Boolean,
            Variant::Null => VariantKind::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Variant::Null)
    }

    /// Number: nonzero test (NaN is nonzero here). Boolean: the payload.
    /// String: non-empty test. Null: false.
    pub fn to_boolean(&self) -> bool {
        match self {
            Variant::String(s) => !s.is_empty(),
            Variant::Number(n) => *n != 0.0,
            Variant::Boolean(b) => *b,
            Variant::Null => false,
        }
    }

    /// Truncates toward zero, saturating at `i32` bounds; NaN maps to 0.
    /// String and Null yield 0.
    pub fn to_integer(&self) -> i32 {
        self.to_double() as i32
    }

    /// Number: the payload. Boolean: 1.0 for true, 0.0 for false. String
    /// and Null: 0.0.
    pub fn to_double(&self) -> f64 {
        match self {
            Variant::Number(n) => *n,
            Variant::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Variant::String(_) | Variant::Null => 0.0,
        }
    }

    /// String: the payload. Anything else: the shared empty string, never
    /// a missing value.
    pub fn to_wide(&self) -> &WideString {
        match self {
            Variant::String(s) => s,
            _ => &EMPTY_WIDE,
        }
    }

    pub fn as_wide(&self) -> Option<&WideString> {
        match self {
            Variant::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Variant::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Variant::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for Variant {
    fn from(s: &str) -> Self {
        Variant::String(WideString::from(s))
    }
}

impl From<String> for Variant {
    fn from(s: String) -> Self {
        Variant::String(WideString::from(s))
    }
}

impl From<WideString> for Variant {
    fn from(s: WideString) -> Self {
        Variant::String(s)
    }
}

impl From<&[u16]> for Variant {
    fn from(units: &[u16]) -> Self {
        Variant::String(WideString::from_units(units))
    }
}

impl From<f64> for Variant {
    fn from(n: f64) -> Self {
        Variant::Number(n)
    }
}

impl From<f32> for Variant {
    fn from(n: f32) -> Self {
        Variant::Number(n as f64)
    }
}

impl From<i32> for Variant {
    fn from(n: i32) -> Self {
        Variant::Number(n as f64)
    }
}

impl From<i64> for Variant {
    fn from(n: i64) -> Self {
        Variant::Number(n as f64)
    }
}

impl From<u32> for Variant {
    fn from(n: u32) -> Self {
        Variant::Number(n as f64)
    }
}

impl From<bool> for Variant {
    fn from(b: bool) -> Self {
        Variant::Boolean(b)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::String(s) => fmt::Display::fmt(s, f),
            Variant::Number(n) => fmt::Display::fmt(n, f),
            Variant::Boolean(b) => fmt::Display::fmt(b, f),
            Variant::Null => f.write_str("null"),
        }
    }
}
