use bytes::Bytes;
use futures_util::StreamExt;
use tracing::{debug, warn};
use unhash_verify::{Sha256Hasher, VerificationError, VerifiedBuffer};

use crate::codec::leg_url;
use crate::data::{Digest, FetchOptions};
use crate::effects::http::HttpClient;
use crate::error::{FetchError, Result};

/// One host's attempt at delivering a digest.
///
/// A leg owns its body buffer and hash state; nothing is shared with other
/// legs except the read-only digest.
#[derive(Debug, Clone)]
pub struct FetchLeg<'a> {
    host:   &'a str,
    url:    String,
    digest: &'a Digest,
}

impl<'a> FetchLeg<'a> {
    pub fn new(host: &'a str, digest: &'a Digest) -> Self {
        Self {
            host,
            url: leg_url(host, &digest.to_base64url()),
            digest,
        }
    }

    pub fn host(&self) -> &str { self.host }

    pub fn url(&self) -> &str { &self.url }

    /// Run the leg to completion, bounded by `options.leg_timeout` if set.
    pub async fn run<C: HttpClient>(&self, client: &C, options: &FetchOptions) -> Result<Bytes> {
        match options.leg_timeout {
            Some(after) => tokio::time::timeout(after, self.stream_body(client, options))
                .await
                .map_err(|_| FetchError::Timeout {
                    host: self.host.to_string(),
                    after,
                })?,
            None => self.stream_body(client, options).await,
        }
    }

    async fn stream_body<C: HttpClient>(&self, client: &C, options: &FetchOptions) -> Result<Bytes> {
        let response = client.get(&self.url).await.map_err(|e| self.network_error(e))?;
        debug!(host = self.host, status = response.status, "received reply from {}", self.host);

        if options.require_success_status && !response.is_success() {
            return Err(FetchError::UnexpectedStatus {
                host:   self.host.to_string(),
                status: response.status,
            });
        }

        let mut buffer = if options.verify {
            VerifiedBuffer::verifying(Sha256Hasher::new())
        } else {
            VerifiedBuffer::unverified()
        };

        let mut body = response.body;
        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| self.network_error(e))?;
            buffer.update(&chunk);
        }
        debug!(host = self.host, bytes = buffer.len(), "body complete");

        buffer.finish(self.digest.as_bytes()).map_err(|e| match e {
            VerificationError::Mismatch { expected, actual } => {
                warn!(host = self.host, "hash mismatch");
                FetchError::HashMismatch {
                    host:     self.host.to_string(),
                    expected: hex::encode(expected),
                    actual:   hex::encode(actual),
                }
            }
        })
    }

    fn network_error(&self, e: impl std::error::Error) -> FetchError {
        FetchError::Network {
            host:    self.host.to_string(),
            message: e.to_string(),
        }
    }
}
