#![allow(dead_code)]

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use bytes::Bytes;
use futures_util::stream::{self, StreamExt};
use unhash_fetch::{BoxStream, HttpClient, HttpResponse};

#[derive(Debug)]
pub struct MockError(pub String);

impl fmt::Display for MockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for MockError {}

/// Scripted behaviour of one mirror.
#[derive(Clone)]
pub enum Reply {
    /// Respond after `delay` with `status` and the given body chunks.
    Body {
        status: u16,
        chunks: Vec<Bytes>,
        delay:  Duration,
    },
    /// Fail the request after `delay`.
    Refused { delay: Duration },
    /// Send the chunks, then fail mid-body.
    BrokenBody { chunks: Vec<Bytes> },
    /// Send the chunks, then never finish. `dropped` is set once the body is dropped.
    Stalled {
        chunks:  Vec<Bytes>,
        dropped: Arc<AtomicBool>,
    },
    /// Never answer at all.
    Hang,
}

impl Reply {
    pub fn ok(body: &[u8]) -> Self { Self::status(200, body) }

    pub fn status(status: u16, body: &[u8]) -> Self {
        Reply::Body {
            status,
            chunks: vec![Bytes::copy_from_slice(body)],
            delay: Duration::ZERO,
        }
    }

    pub fn chunked(chunks: &[&[u8]]) -> Self {
        Reply::Body {
            status: 200,
            chunks: chunks.iter().map(|c| Bytes::copy_from_slice(c)).collect(),
            delay:  Duration::ZERO,
        }
    }

    pub fn refused() -> Self { Reply::Refused { delay: Duration::ZERO } }

    pub fn broken(sent: &[u8]) -> Self {
        Reply::BrokenBody { chunks: vec![Bytes::copy_from_slice(sent)] }
    }

    pub fn stalled(sent: &[u8], dropped: Arc<AtomicBool>) -> Self {
        Reply::Stalled {
            chunks: vec![Bytes::copy_from_slice(sent)],
            dropped,
        }
    }

    pub fn delayed(self, by: Duration) -> Self {
        match self {
            Reply::Body { status, chunks, .. } => Reply::Body { status, chunks, delay: by },
            Reply::Refused { .. } => Reply::Refused { delay: by },
            other => other,
        }
    }
}

struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) { self.0.store(true, Ordering::SeqCst); }
}

/// In-memory stand-in for a set of mirrors, keyed by host name.
#[derive(Clone, Default)]
pub struct ScriptedClient {
    replies:  HashMap<String, Reply>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ScriptedClient {
    pub fn new() -> Self { Self::default() }

    pub fn reply(mut self, host: &str, reply: Reply) -> Self {
        self.replies.insert(host.to_string(), reply);
        self
    }

    /// URLs requested so far, in request order.
    pub fn requests(&self) -> Vec<String> { self.requests.lock().unwrap().clone() }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

fn body_of(chunks: Vec<Bytes>) -> BoxStream<'static, Result<Bytes, MockError>> {
    Box::pin(stream::iter(chunks.into_iter().map(Ok)))
}

impl HttpClient for ScriptedClient {
    type Error = MockError;

    async fn get(&self, url: &str) -> Result<HttpResponse<Self::Error>, Self::Error> {
        self.requests.lock().unwrap().push(url.to_string());

        let host = url
            .strip_prefix("https://")
            .and_then(|rest| rest.split('/').next())
            .ok_or_else(|| MockError(format!("not an https url: {url}")))?;
        let reply = self
            .replies
            .get(host)
            .cloned()
            .ok_or_else(|| MockError(format!("dns error: unknown host {host}")))?;

        match reply {
            Reply::Body { status, chunks, delay } => {
                pause(delay).await;
                Ok(HttpResponse { status, body: body_of(chunks) })
            }
            Reply::Refused { delay } => {
                pause(delay).await;
                Err(MockError("connection refused".to_string()))
            }
            Reply::BrokenBody { chunks } => {
                let reset = stream::once(async { Err(MockError("connection reset".to_string())) });
                Ok(HttpResponse {
                    status: 200,
                    body:   Box::pin(body_of(chunks).chain(reset)),
                })
            }
            Reply::Stalled { chunks, dropped } => {
                let guard = DropFlag(dropped);
                let body = body_of(chunks).chain(stream::pending()).map(move |item| {
                    let _guard = &guard;
                    item
                });
                Ok(HttpResponse { status: 200, body: Box::pin(body) })
            }
            Reply::Hang => std::future::pending().await,
        }
    }
}
