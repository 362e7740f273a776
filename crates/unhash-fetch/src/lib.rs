//! Content-addressed retrieval from HTTPS mirrors.
//!
//! A 32-byte SHA-256 digest is requested from every configured host at
//! `https://{host}/{base64url(digest)}`. The legs race; the first one to
//! settle decides the outcome. Each body is hashed while it streams in and is
//! only handed back when its digest matches the one asked for.
//!
//! # Architecture
//!
//! - [`data`] - Digests, host lists and options
//! - [`codec`] - Pure encoding and URL helpers
//! - `effects` - HTTP seam and the race itself
//!
//! # Example
//!
//! ```no_run
//! use unhash_fetch::HostList;
//!
//! # async fn run() -> unhash_fetch::Result<()> {
//! let hosts = HostList::default();
//! let bytes = unhash_fetch::fetch(
//!     "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
//!     &hosts,
//!     true,
//! )
//! .await?;
//! assert_eq!(&bytes[..], b"hello");
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod data;
mod effects;
mod error;

pub use codec::{base64url, leg_url};
pub use data::{DEFAULT_HOSTS, Digest, DIGEST_LEN, FetchOptions, HashInput, HostList, SettlePolicy};
pub use effects::{BoxStream, FetchLeg, HttpClient, HttpResponse, Unhasher};
pub use error::{DigestError, FetchError, Result};

#[cfg(feature = "reqwest")]
pub use effects::{ReqwestClient, fetch};
