//! HTTP transport implementation using reqwest.

use std::sync::LazyLock;

use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::config::HttpConfig;
use crate::{
    error::{AssinaturasError, Result},
    transport::{Method, RawResponse, RequestContext, Transport, sealed},
};

/// Default HTTP client with connection pooling enabled.
///
/// Using a singleton avoids recreating the client per transport instance,
/// preserving connection pooling across all default transports.
static DEFAULT_HTTP_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    let config = HttpConfig::default();
    Client::builder()
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        .build()
        .expect("Failed to create default HTTP client")
});

/// HTTP transport over reqwest.
///
/// Performs exactly one network attempt per call with the timeouts from
/// [`HttpConfig`]; there is no retry, backoff, or cancellation primitive
/// beyond what the underlying client exposes.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl sealed::private::Sealed for HttpTransport {}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    /// Creates a transport backed by the shared default client.
    #[must_use]
    pub fn new() -> Self {
        Self { client: DEFAULT_HTTP_CLIENT.clone() }
    }

    /// Creates a transport with custom timeouts and pool settings.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client creation fails.
    pub fn with_config(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(AssinaturasError::Transport)?;

        Ok(Self { client })
    }

    #[instrument(
        skip(self, ctx),
        fields(method = method.as_str(), base_url = ctx.base_url, path = ctx.path)
    )]
    async fn execute_request(
        &self,
        method: Method,
        ctx: RequestContext<'_>,
    ) -> Result<RawResponse> {
        let url = Url::parse(ctx.base_url)
            .map_err(|e| AssinaturasError::InvalidArgument(format!("invalid base URL: {e}")))?;

        if url.host_str().is_none() {
            return Err(AssinaturasError::InvalidArgument(format!(
                "base URL missing host: {}",
                ctx.base_url
            )));
        }

        let full_url = format!("{}{}", ctx.base_url.trim_end_matches('/'), ctx.path);

        let mut request = match method {
            Method::Get => self.client.get(&full_url),
            Method::Post => self.client.post(&full_url),
            Method::Put => self.client.put(&full_url),
            Method::Delete => self.client.delete(&full_url),
        };

        request = request.header("Authorization", ctx.authorization);

        if let Some(body) = ctx.body {
            request = request.header("Content-Type", "application/json").body(body.to_vec());
        }

        // A reqwest error here means no usable response was obtained; any
        // status code that does come back is returned raw for translation.
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(AssinaturasError::Transport)?.to_vec();

        Ok(RawResponse { status, body })
    }
}

impl Transport for HttpTransport {
    async fn execute<'a>(
        &'a self,
        method: Method,
        ctx: RequestContext<'a>,
    ) -> Result<RawResponse> {
        self.execute_request(method, ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(base_url: &str) -> RequestContext<'_> {
        RequestContext { base_url, path: "/plans", authorization: "Basic abc", body: None }
    }

    #[test]
    fn new_uses_the_shared_client() {
        let _transport = HttpTransport::new();
        let _client = &*DEFAULT_HTTP_CLIENT;
    }

    #[test]
    fn with_config_builds_a_client() {
        let config =
            HttpConfig { pool_max_idle_per_host: 5, timeout_secs: 60, connect_timeout_secs: 15 };
        assert!(HttpTransport::with_config(&config).is_ok());
    }

    #[tokio::test]
    async fn unparseable_base_url_fails_before_dispatch() {
        let transport = HttpTransport::new();
        let result = transport.execute(Method::Get, ctx("not-a-url")).await;

        assert!(matches!(result.unwrap_err(), AssinaturasError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn base_url_without_host_fails_before_dispatch() {
        let transport = HttpTransport::new();
        let result = transport.execute(Method::Get, ctx("data:text/plain,x")).await;

        assert!(matches!(result.unwrap_err(), AssinaturasError::InvalidArgument(_)));
    }

    #[test]
    fn trailing_slash_on_base_url_does_not_double_up() {
        let base = "https://api.example.com/";
        let joined = format!("{}{}", base.trim_end_matches('/'), "/plans");
        assert_eq!(joined, "https://api.example.com/plans");
    }

    #[test]
    fn transport_debug_format() {
        let transport = HttpTransport::new();
        let debug = format!("{transport:?}");
        assert!(debug.contains("HttpTransport"));
    }
}
