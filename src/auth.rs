//! API credential handling.
//!
//! The API authenticates every request with an HTTP Basic credential built
//! from the account's token and key. [`Credentials`] holds that pair for the
//! lifetime of the client — it is never mutated after construction — and
//! derives the `Authorization` header value on demand. No network I/O
//! happens here and nothing is cached beyond the pair itself.

use std::fmt;

use base64::Engine;

/// Immutable token/key pair for API authentication.
///
/// Safe to share across concurrently executing calls; the pair is read-only
/// for the lifetime of the client holding it.
///
/// # Examples
///
/// ```
/// use moip_assinaturas::auth::Credentials;
///
/// let credentials = Credentials::new("my-token", "my-key");
/// assert_eq!(
///     credentials.authorization_header(),
///     format!("Basic {}", base64::Engine::encode(
///         &base64::engine::general_purpose::STANDARD,
///         "my-token:my-key",
///     )),
/// );
/// ```
#[derive(Clone)]
pub struct Credentials {
    token: String,
    key: String,
}

impl Credentials {
    /// Creates a credential pair.
    #[must_use]
    pub fn new(token: impl Into<String>, key: impl Into<String>) -> Self {
        Self { token: token.into(), key: key.into() }
    }

    /// Returns the account token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Computes the `Authorization` header value for a request.
    ///
    /// HTTP Basic encoding of `token:key`, recomputed per call; the header
    /// is attached to every outbound request by the transport.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        let pair = format!("{}:{}", self.token, self.key);
        let encoded = base64::engine::general_purpose::STANDARD.encode(pair);
        format!("Basic {encoded}")
    }
}

// The key is a secret; keep it out of debug output and logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &self.token)
            .field("key", &"<redacted>")
            .finish()
    }
}
