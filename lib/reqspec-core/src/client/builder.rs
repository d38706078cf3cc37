use std::fmt::Debug;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use http::Uri;
use http::uri::{PathAndQuery, Scheme};
use tracing::debug;

use super::report::Journal;
use super::{ApiClient, ApiClientError, CallHeaders, ParameterValue};

/// Environment variable holding the base URI, e.g. `https://reqres.in/api`.
pub const BASE_URI_ENV: &str = "REQSPEC_BASE_URI";

/// Environment variable holding an API key, sent as the `x-api-key` header.
pub const API_KEY_ENV: &str = "REQSPEC_API_KEY";

/// Builder for [`ApiClient`] instances.
///
/// # Default Configuration
///
/// - **Scheme**: HTTP
/// - **Host**: 127.0.0.1
/// - **Port**: 80
/// - **Base path**: None
/// - **Timeout**: None
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use reqspec_core::ApiClient;
/// use http::uri::Scheme;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::builder()
///     .with_scheme(Scheme::HTTPS)
///     .with_host("reqres.in")
///     .with_port(443)
///     .with_base_path("/api")?
///     .with_header("x-api-key", "reqres-free-v1")
///     .with_timeout(Duration::from_secs(10))
///     .build()?;
/// assert_eq!(client.base_uri().to_string(), "https://reqres.in:443/api");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClientBuilder {
    client: Option<reqwest::Client>,
    scheme: Scheme,
    host: String,
    port: u16,
    base_path: Option<PathAndQuery>,
    default_headers: CallHeaders,
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Fails if the base URI cannot be assembled or the HTTP client cannot
    /// be created.
    pub fn build(self) -> Result<ApiClient, ApiClientError> {
        let Self {
            client,
            scheme,
            host,
            port,
            base_path,
            default_headers,
            timeout,
        } = self;

        let builder = Uri::builder()
            .scheme(scheme)
            .authority(format!("{host}:{port}"));
        let builder = if let Some(path) = &base_path {
            builder.path_and_query(path.path())
        } else {
            builder.path_and_query("/")
        };
        let base_uri = builder.build()?;

        let client = match client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };
        debug!(%base_uri, "client built");

        Ok(ApiClient {
            client,
            base_uri,
            default_headers,
            journal: Journal::default(),
        })
    }

    /// Sets the HTTP scheme.
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the hostname or IP address of the API server.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the base path, prepended to every endpoint base path.
    ///
    /// # Errors
    ///
    /// Returns `ApiClientError::InvalidBasePath` if the path contains invalid characters
    /// (such as spaces) or cannot be parsed as a valid URI path.
    pub fn with_base_path<P>(mut self, base_path: P) -> Result<Self, ApiClientError>
    where
        P: TryInto<PathAndQuery>,
        P::Error: Debug + 'static,
    {
        let base_path = base_path
            .try_into()
            .map_err(|err| ApiClientError::InvalidBasePath {
                error: format!("{err:?}"),
            })?;
        self.base_path = Some(base_path);
        Ok(self)
    }

    /// Sets scheme, host, port and base path from a single URI.
    ///
    /// Without an explicit port, 443 is used for HTTPS and 80 otherwise.
    ///
    /// # Errors
    ///
    /// Fails if the URI cannot be parsed or has no host.
    pub fn with_base_uri(mut self, base_uri: &str) -> Result<Self, ApiClientError> {
        let uri = base_uri.parse::<Uri>()?;
        let Some(host) = uri.host() else {
            return Err(ApiClientError::InvalidBasePath {
                error: format!("missing host in {base_uri:?}"),
            });
        };

        let scheme = uri.scheme().cloned().unwrap_or(Scheme::HTTP);
        let port = uri
            .port_u16()
            .unwrap_or(if scheme == Scheme::HTTPS { 443 } else { 80 });
        self.host = host.to_string();
        self.port = port;
        self.scheme = scheme;

        let path = uri.path().trim_end_matches('/');
        self.base_path = if path.is_empty() {
            None
        } else {
            Some(PathAndQuery::try_from(path).map_err(|err| {
                ApiClientError::InvalidBasePath {
                    error: format!("{err:?}"),
                }
            })?)
        };
        Ok(self)
    }

    /// Adds a header sent with every call.
    pub fn with_header<T: ParameterValue>(mut self, name: impl Into<String>, value: T) -> Self {
        self.default_headers = self.default_headers.add_header(name, value);
        self
    }

    /// Sets a timeout for each whole exchange.
    ///
    /// Ignored when a custom client is provided with [`Self::with_client`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Uses a preconfigured `reqwest` client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Creates a builder from the `REQSPEC_BASE_URI` and `REQSPEC_API_KEY`
    /// environment variables, defaults apply for unset ones.
    ///
    /// # Errors
    ///
    /// Fails if `REQSPEC_BASE_URI` is not a valid URI.
    pub fn from_env() -> Result<Self, ApiClientError> {
        Self::default().apply_lookup(|name| std::env::var(name).ok())
    }

    fn apply_lookup(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ApiClientError> {
        if let Some(base_uri) = lookup(BASE_URI_ENV) {
            debug!(%base_uri, "base URI from environment");
            self = self.with_base_uri(&base_uri)?;
        }
        if let Some(api_key) = lookup(API_KEY_ENV) {
            self = self.with_header("x-api-key", api_key);
        }
        Ok(self)
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            scheme: Scheme::HTTP,
            host: IpAddr::V4(Ipv4Addr::LOCALHOST).to_string(),
            port: 80,
            base_path: None,
            default_headers: CallHeaders::default(),
            timeout: None,
        }
    }
}
