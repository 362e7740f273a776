use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

/// A boxed stream type for HTTP response bodies.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// Status line and streaming body of a GET response.
pub struct HttpResponse<E> {
    pub status: u16,
    pub body:   BoxStream<'static, Result<Bytes, E>>,
}

impl<E> HttpResponse<E> {
    pub fn is_success(&self) -> bool { (200..300).contains(&self.status) }
}

/// Asynchronous HTTP client abstraction.
///
/// This is the minimal interface a leg needs: one GET, no custom headers,
/// the body delivered as a stream of chunks. Dropping the returned body
/// abandons the request.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - Scripted clients in tests
pub trait HttpClient: Send + Sync {
    /// Error type for HTTP operations.
    type Error: std::error::Error + Send + 'static;

    /// Issue a GET and return once the response head has arrived.
    ///
    /// # Errors
    ///
    /// Transport failures: DNS, connection refused, TLS. Non-2xx statuses are
    /// not errors at this layer.
    fn get(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<HttpResponse<Self::Error>, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;
    use futures_util::TryStreamExt;

    /// Production HTTP client implementation using reqwest.
    ///
    /// HTTPS only. Redirects are not followed: a 3xx reply is returned as is
    /// and its body is the candidate content.
    #[derive(Clone)]
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    fn client_builder() -> reqwest::ClientBuilder {
        reqwest::Client::builder().redirect(reqwest::redirect::Policy::none())
    }

    impl ReqwestClient {
        pub fn new() -> Result<Self, reqwest::Error> {
            let client = client_builder().https_only(true).build()?;
            Ok(Self { client })
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(&self, url: &str) -> Result<HttpResponse<Self::Error>, Self::Error> {
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();
            let body = response.bytes_stream().map_ok(Bytes::from);

            Ok(HttpResponse { status, body: Box::pin(body) })
        }
    }

}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    #[test]
    fn test_is_success() {
        let response = |status| HttpResponse::<std::io::Error> {
            status,
            body: Box::pin(stream::empty()),
        };

        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(301).is_success());
        assert!(!response(404).is_success());
        assert!(!response(500).is_success());
    }
}
