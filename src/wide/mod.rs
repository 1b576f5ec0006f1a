use std::fmt;

use tracing::warn;

use crate::{Result, ScriptError};

pub use encoding_rs::Encoding;

/// Owned, immutable UTF-16 buffer backing [`Variant`](crate::Variant)
/// string payloads.
///
/// The stored length is authoritative: embedded NUL units are legal and
/// preserved when construction is given an explicit length. Cloning copies
/// the buffer, so two instances never share storage. The empty value holds
/// a zero-length boxed slice, which allocates nothing, so empty strings are
/// free without any per-instance ownership tracking.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct WideString(Box<[u16]>);

impl WideString {
    /// The empty string. No allocation.
    pub fn empty() -> Self {
        WideString(Box::from([]))
    }

    /// Copies `units` verbatim; the slice length is the string length.
    pub fn from_units(units: &[u16]) -> Self {
        WideString(units.into())
    }

    /// Scan-to-terminator construction: takes units up to (excluding) the
    /// first NUL, or the whole slice when no NUL is present.
    pub fn from_units_nul_terminated(units: &[u16]) -> Self {
        let end = units.iter().position(|&u| u == 0).unwrap_or(units.len());
        Self::from_units(&units[..end])
    }

    /// Decodes narrow multi-byte input in the given encoding, substituting
    /// U+FFFD for malformed sequences. Deterministic and infallible. Pass
    /// `encoding_rs::UTF_8` unless the embedder declares another narrow
    /// encoding.
    ///
    /// The declared encoding is authoritative: no BOM sniffing, a leading
    /// BOM is decoded like any other bytes.
    pub fn from_bytes(bytes: &[u8], encoding: &'static Encoding) -> Self {
        if bytes.is_empty() {
            return Self::empty();
        }
        let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
        if had_errors {
            warn!(
                "Lossy {} decode of {}-byte narrow string",
                encoding.name(),
                bytes.len()
            );
        }
        Self::from(text.as_ref())
    }

    /// Like [`WideString::from_bytes`] but rejects malformed input instead
    /// of substituting replacement characters.
    pub fn from_bytes_strict(bytes: &[u8], encoding: &'static Encoding) -> Result<Self> {
        if bytes.is_empty() {
            return Ok(Self::empty());
        }
        match encoding.decode_without_bom_handling_and_without_replacement(bytes) {
            Some(text) => Ok(Self::from(text.as_ref())),
            None => Err(ScriptError::Decode(encoding.name())),
        }
    }

    pub fn units(&self) -> &[u16] {
        &self.0
    }

    /// Length in UTF-16 code units, not characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// UTF-8 view; unpaired surrogates become U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.0)
    }
}

impl From<&str> for WideString {
    fn from(s: &str) -> Self {
        WideString(s.encode_utf16().collect())
    }
}

impl From<String> for WideString {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&[u16]> for WideString {
    fn from(units: &[u16]) -> Self {
        Self::from_units(units)
    }
}

impl fmt::Display for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string_lossy())
    }
}
