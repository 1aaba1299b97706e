use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use serde::Serialize;

/// Outcome of probing one candidate URL. Exactly one is produced per URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub url: String,
    /// `None` when the request never got a response.
    pub status: Option<u16>,
    pub size: u64,
    pub size_human: String,
    pub error: Option<String>,
}

impl ProbeResult {
    pub fn ok(url: &str, status: u16, size: u64) -> Self {
        Self {
            url: url.to_string(),
            status: Some(status),
            size,
            size_human: format_size(size),
            error: None,
        }
    }

    pub fn failed(url: &str, error: impl Into<String>) -> Self {
        Self {
            url: url.to_string(),
            status: None,
            size: 0,
            size_human: format_size(0),
            error: Some(error.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Base-1024 human size: bytes below 1 KiB, then KB and MB with two decimals.
pub fn format_size(size: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if size < KIB {
        format!("{} B", size)
    } else if size < MIB {
        format!("{:.2} KB", size as f64 / KIB as f64)
    } else {
        format!("{:.2} MB", size as f64 / MIB as f64)
    }
}

/// Browser-like headers sent with every probe. User-Agent is added per request.
pub fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(
        header::ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    h.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    h.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate"));
    h.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    h
}

/// Issue one GET and normalize the outcome. Transport failures become a
/// `ProbeResult` carrying the error, never an `Err`.
pub async fn probe_url(client: &Client, url: &str, user_agent: &str) -> ProbeResult {
    let resp = client
        .get(url)
        .headers(default_headers())
        .header(header::USER_AGENT, user_agent)
        .send()
        .await;

    match resp {
        Ok(r) => {
            let status = r.status().as_u16();
            let size = drain_body(url, r).await;
            tracing::debug!(url, status, size, "probe complete");
            ProbeResult::ok(url, status, size)
        }
        Err(e) => {
            let msg = describe_error(&e);
            tracing::debug!(url, error = %msg, "probe failed");
            ProbeResult::failed(url, msg)
        }
    }
}

/// Count body bytes without buffering the whole response. A body that breaks
/// off midway still reports what arrived.
async fn drain_body(url: &str, mut resp: Response) -> u64 {
    let mut size = 0u64;
    loop {
        match resp.chunk().await {
            Ok(Some(chunk)) => size += chunk.len() as u64,
            Ok(None) => break,
            Err(e) => {
                tracing::debug!(url, error = %e, read = size, "body read interrupted");
                break;
            }
        }
    }
    size
}

fn describe_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("timeout: {}", e)
    } else if e.is_connect() {
        format!("connection failed: {}", e)
    } else {
        e.to_string()
    }
}
