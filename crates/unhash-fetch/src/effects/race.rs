use bytes::Bytes;
use futures_util::stream::{FuturesUnordered, StreamExt};
use tracing::debug;

use crate::data::{Digest, FetchOptions, HashInput, HostList, SettlePolicy};
use crate::effects::http::HttpClient;
use crate::effects::leg::FetchLeg;
use crate::error::{FetchError, Result};

/// Resolves digests by racing one request per configured host.
///
/// All legs are polled on the caller's task. When the race settles the
/// remaining legs are dropped, which drops their response streams and closes
/// their connections.
pub struct Unhasher<C: HttpClient> {
    client:  C,
    hosts:   HostList,
    options: FetchOptions,
}

impl<C: HttpClient> Unhasher<C> {
    pub fn new(client: C, hosts: HostList) -> Self {
        Self {
            client,
            hosts,
            options: FetchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    /// Normalize `input` and resolve it.
    ///
    /// Normalization errors are returned before any request is made.
    pub async fn fetch<'a>(&self, input: impl Into<HashInput<'a>>) -> Result<Bytes> {
        let digest = Digest::normalize(input)?;
        self.fetch_digest(&digest).await
    }

    /// Race every host for `digest` and adopt the outcome chosen by the
    /// configured [`SettlePolicy`].
    pub async fn fetch_digest(&self, digest: &Digest) -> Result<Bytes> {
        debug!("requesting {} from {} hosts", digest.to_base64url(), self.hosts.len());

        let (client, options) = (&self.client, &self.options);
        let mut legs: FuturesUnordered<_> = self
            .hosts
            .iter()
            .enumerate()
            .map(move |(index, host)| {
                let leg = FetchLeg::new(host, digest);
                async move { (index, leg.run(client, options).await) }
            })
            .collect();

        let mut failures = Vec::new();
        while let Some((index, outcome)) = legs.next().await {
            match outcome {
                Ok(bytes) => {
                    debug!(leg = index, len = bytes.len(), "accepted content");
                    return Ok(bytes);
                }
                Err(e) => {
                    debug!(leg = index, error = %e, "leg failed");
                    if self.options.policy == SettlePolicy::FirstSettled {
                        return Err(e);
                    }
                    failures.push((index, e));
                }
            }
        }

        failures.sort_by_key(|(index, _)| *index);
        Err(FetchError::AllLegsFailed {
            failures: failures.into_iter().map(|(_, e)| e).collect(),
        })
    }
}

/// Resolve `input` against `hosts` with a default [`ReqwestClient`](crate::ReqwestClient).
///
/// With `verify` set, a body is only returned if its SHA-256 equals the
/// requested digest. The first leg to settle decides the outcome.
#[cfg(feature = "reqwest")]
pub async fn fetch<'a>(input: impl Into<HashInput<'a>>, hosts: &HostList, verify: bool) -> Result<Bytes> {
    let digest = Digest::normalize(input)?;
    let client =
        crate::effects::http::ReqwestClient::new().map_err(|e| FetchError::Client(e.to_string()))?;

    Unhasher::new(client, hosts.clone())
        .with_options(FetchOptions::default().verify(verify))
        .fetch_digest(&digest)
        .await
}
