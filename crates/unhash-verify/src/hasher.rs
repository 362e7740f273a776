#[cfg(feature = "sha256")]
use sha2::Digest;
use subtle::ConstantTimeEq;

/// Incremental digest state: feed chunks with `update`, consume once with `finalize`.
pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self) -> Vec<u8>;
}

/// Running SHA-256 over a body received in chunks.
#[cfg(feature = "sha256")]
pub struct Sha256Hasher(sha2::Sha256);

#[cfg(feature = "sha256")]
impl Hasher for Sha256Hasher {
    fn update(&mut self, data: &[u8]) { self.0.update(data); }
    fn finalize(self) -> Vec<u8> { self.0.finalize().to_vec() }
}

#[cfg(feature = "sha256")]
impl Default for Sha256Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "sha256")]
impl Sha256Hasher {
    pub fn new() -> Self { Self(sha2::Sha256::new()) }

    /// One-shot digest of a complete buffer.
    pub fn digest(data: &[u8]) -> Vec<u8> { sha2::Sha256::digest(data).to_vec() }
}

/// Compares two digests in constant time for equal lengths.
/// Digests of different lengths are never equal.
pub fn digests_equal(a: &[u8], b: &[u8]) -> bool { a.ct_eq(b).into() }
