/// Builds the request URL for one host: `https://{host}/{path}`.
///
/// `path` is the base64url form of the digest; no query or fragment is added.
pub fn leg_url(host: &str, path: &str) -> String {
    format!("https://{host}/{path}")
}
