//! Incremental verification for content-addressed payloads.
//!
//! Bytes are hashed as they arrive rather than after the whole body has been
//! buffered, so the digest is ready the moment the stream ends.
//!
//! # Example
//!
//! ```
//! use unhash_verify::{Sha256Hasher, VerifiedBuffer};
//!
//! let expected = Sha256Hasher::digest(b"hello world");
//!
//! let mut buffer = VerifiedBuffer::verifying(Sha256Hasher::new());
//! buffer.update(b"hello ");
//! buffer.update(b"world");
//!
//! let bytes = buffer.finish(&expected).unwrap();
//! assert_eq!(&bytes[..], b"hello world");
//! ```

pub use self::buffer::VerifiedBuffer;
pub use self::error::{Result, VerificationError};
pub use self::hasher::{Hasher, digests_equal};

#[cfg(feature = "sha256")]
pub use self::hasher::Sha256Hasher;

mod buffer;
mod error;
mod hasher;
