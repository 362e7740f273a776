//! I/O: the HTTP seam, single legs, and the race across hosts.

mod http;
mod leg;
mod race;

pub use http::{BoxStream, HttpClient, HttpResponse};
pub use leg::FetchLeg;
pub use race::Unhasher;

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
#[cfg(feature = "reqwest")]
pub use race::fetch;
