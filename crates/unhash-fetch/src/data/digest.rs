use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use unhash_verify::Sha256Hasher;

use crate::codec::{base64url, decode_base64, decode_hex};
use crate::error::DigestError;

/// Length in bytes of a SHA-256 digest.
pub const DIGEST_LEN: usize = 32;

/// A SHA-256 digest naming the content to fetch.
///
/// Always exactly [`DIGEST_LEN`] bytes; the only way to obtain one from
/// untrusted input is [`Digest::normalize`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

/// Caller-supplied hash before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashInput<'a> {
    /// Hex (64 chars), base64 or base64url (43 or 44 chars).
    Text(&'a str),
    /// Raw digest bytes.
    Bytes(&'a [u8]),
}

impl<'a> From<&'a str> for HashInput<'a> {
    fn from(text: &'a str) -> Self { HashInput::Text(text) }
}

impl<'a> From<&'a String> for HashInput<'a> {
    fn from(text: &'a String) -> Self { HashInput::Text(text) }
}

impl<'a> From<&'a [u8]> for HashInput<'a> {
    fn from(bytes: &'a [u8]) -> Self { HashInput::Bytes(bytes) }
}

impl<'a> From<&'a Vec<u8>> for HashInput<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self { HashInput::Bytes(bytes) }
}

impl<'a, const N: usize> From<&'a [u8; N]> for HashInput<'a> {
    fn from(bytes: &'a [u8; N]) -> Self { HashInput::Bytes(bytes) }
}

impl<'a> From<&'a Digest> for HashInput<'a> {
    fn from(digest: &'a Digest) -> Self { HashInput::Bytes(digest.as_bytes()) }
}

impl Digest {
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] { &self.0 }

    /// SHA-256 of `data`.
    pub fn of(data: &[u8]) -> Self {
        let mut bytes = [0u8; DIGEST_LEN];
        bytes.copy_from_slice(&Sha256Hasher::digest(data));
        Self(bytes)
    }

    /// Normalizes a textual or binary hash into a digest.
    ///
    /// Text is decoded according to its length: 64 characters as hex, 43 or
    /// 44 characters as base64 (either alphabet, padding optional). Binary
    /// input must already be 32 bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use unhash_fetch::Digest;
    ///
    /// let hex = Digest::normalize("2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824").unwrap();
    /// let b64 = Digest::normalize("LPJNul+wow4m6DsqxbninhsWHlwfp0JecwQzYpOLmCQ=").unwrap();
    /// assert_eq!(hex, b64);
    /// assert_eq!(hex, Digest::of(b"hello"));
    /// ```
    pub fn normalize<'a>(input: impl Into<HashInput<'a>>) -> Result<Self, DigestError> {
        match input.into() {
            HashInput::Text(text) => Self::from_text(text),
            HashInput::Bytes(bytes) => Self::from_slice(bytes),
        }
    }

    fn from_text(text: &str) -> Result<Self, DigestError> {
        let invalid = |reason: String| DigestError::InvalidEncoding {
            input: text.to_string(),
            reason,
        };

        let decoded = match text.len() {
            64 => decode_hex(text).map_err(|e| invalid(e.to_string()))?,
            43 | 44 => decode_base64(text).map_err(|e| invalid(e.to_string()))?,
            len => return Err(invalid(format!("unsupported length {len}"))),
        };

        let bytes: [u8; DIGEST_LEN] = decoded
            .as_slice()
            .try_into()
            .map_err(|_| invalid(format!("decodes to {} bytes", decoded.len())))?;
        Ok(Self(bytes))
    }

    fn from_slice(bytes: &[u8]) -> Result<Self, DigestError> {
        bytes
            .try_into()
            .map(Self)
            .map_err(|_| DigestError::InvalidLength {
                actual:   bytes.len(),
                expected: DIGEST_LEN,
            })
    }

    pub fn to_hex(&self) -> String { hex::encode(self.0) }

    /// Path segment used in request URLs.
    pub fn to_base64url(&self) -> String { base64url(&self.0) }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::normalize(s) }
}

impl TryFrom<&[u8]> for Digest {
    type Error = DigestError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> { Self::from_slice(bytes) }
}

/// Dynamically typed input: a JSON string takes the text path, an array of
/// byte values takes the binary path, anything else is the wrong type.
impl TryFrom<&Value> for Digest {
    type Error = DigestError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Self::normalize(text),
            Value::Array(items) => {
                let bytes = items
                    .iter()
                    .map(|item| item.as_u64().and_then(|n| u8::try_from(n).ok()))
                    .collect::<Option<Vec<u8>>>()
                    .ok_or(DigestError::InvalidType { actual: "array of non-bytes" })?;
                Self::normalize(&bytes)
            }
            Value::Number(_) => Err(DigestError::InvalidType { actual: "number" }),
            Value::Bool(_) => Err(DigestError::InvalidType { actual: "boolean" }),
            Value::Null => Err(DigestError::InvalidType { actual: "null" }),
            Value::Object(_) => Err(DigestError::InvalidType { actual: "object" }),
        }
    }
}
