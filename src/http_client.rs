use reqwest::{Client, ClientBuilder};
use std::time::Duration;

use crate::error::Result;

/// Build the shared scanning client.
///
/// Certificates are not verified and redirects are never followed so the
/// scanner reports what the server actually answers, including 3xx.
/// The idle pool is sized to the worker count.
pub fn create_probe_client(workers: usize, timeout: Duration) -> Result<Client> {
    let client = ClientBuilder::new()
        // Connection pooling
        .pool_max_idle_per_host(workers)
        .pool_idle_timeout(Some(Duration::from_secs(90)))
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .tcp_nodelay(true)

        // Per-request lifetime, independent of total scan time
        .timeout(timeout)

        // Sizes are reported as received on the wire
        .gzip(false)
        .brotli(false)

        .use_rustls_tls()
        .https_only(false)
        .danger_accept_invalid_certs(true)

        .redirect(reqwest::redirect::Policy::none())
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(create_probe_client(20, Duration::from_secs(10)).is_ok());
    }
}
