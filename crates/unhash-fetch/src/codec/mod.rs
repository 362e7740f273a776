//! Pure transformations: text encodings of digests and request URLs.

mod encoding;
mod url;

pub use encoding::{base64url, decode_base64, decode_hex};
pub use url::leg_url;
