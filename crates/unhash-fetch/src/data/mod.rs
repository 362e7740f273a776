//! Data layer: digests, host configuration and fetch options.

mod digest;
mod hosts;
mod options;

pub use digest::{DIGEST_LEN, Digest, HashInput};
pub use hosts::{DEFAULT_HOSTS, HostList};
pub use options::{FetchOptions, SettlePolicy};
