use bytes::{Bytes, BytesMut};

use crate::{Hasher, Result, VerificationError, digests_equal};

/// Accumulates a response body chunk by chunk, optionally hashing each chunk
/// as it is appended.
///
/// Without a hasher the buffer only accumulates and `finish` always succeeds.
pub struct VerifiedBuffer<H> {
    data:   BytesMut,
    hasher: Option<H>,
}

impl<H: Hasher> VerifiedBuffer<H> {
    /// Buffer that hashes every chunk with `hasher`.
    pub fn verifying(hasher: H) -> Self {
        Self { data: BytesMut::new(), hasher: Some(hasher) }
    }

    /// Buffer that accumulates without hashing.
    pub fn unverified() -> Self {
        Self { data: BytesMut::new(), hasher: None }
    }

    pub fn len(&self) -> usize { self.data.len() }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Append a chunk, feeding it to the running hash state.
    pub fn update(&mut self, chunk: &[u8]) {
        if let Some(hasher) = self.hasher.as_mut() {
            hasher.update(chunk);
        }
        self.data.extend_from_slice(chunk);
    }

    /// Finalize the hash state and compare it against `expected`.
    /// Returns the accumulated bytes on success.
    pub fn finish(self, expected: &[u8]) -> Result<Bytes> {
        let Some(hasher) = self.hasher else {
            return Ok(self.data.freeze());
        };

        let actual = hasher.finalize();
        if digests_equal(&actual, expected) {
            Ok(self.data.freeze())
        } else {
            Err(VerificationError::Mismatch {
                expected: expected.to_vec(),
                actual,
            })
        }
    }
}
