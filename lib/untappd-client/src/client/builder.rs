use url::Url;

use super::auth::Credentials;
use super::error::UntappdError;
use super::UntappdClient;

/// Production base URL of the Untappd v3 API.
const DEFAULT_BASE_URL: &str = "https://api.untappd.com/v3";

/// Builder for [`UntappdClient`] instances.
///
/// Only the API key is required. The base URL defaults to the production
/// service over verified TLS; tests point it at a local mock server instead.
///
/// # Example
///
/// ```rust,no_run
/// use untappd_client::UntappdClient;
///
/// # fn example() -> Result<(), untappd_client::UntappdError> {
/// let mut client = UntappdClient::builder("my-api-key").build()?;
/// client.set_authenticated_user("gregavola", "s3cret");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct UntappdClientBuilder {
    api_key: String,
    base_url: Option<Url>,
    http: Option<reqwest::Client>,
    accept_invalid_certs: bool,
    credentials: Option<Credentials>,
}

impl UntappdClientBuilder {
    pub(super) fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            http: None,
            accept_invalid_certs: false,
            credentials: None,
        }
    }

    /// Overrides the API base URL. A trailing slash is ignored.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Supplies a pre-configured `reqwest::Client`, e.g. to impose a request
    /// timeout. The library itself enforces none.
    ///
    /// A supplied client takes precedence over
    /// [`danger_accept_invalid_certs`](Self::danger_accept_invalid_certs).
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Disables TLS certificate verification.
    ///
    /// Legacy deployments of the service client skipped verification
    /// unconditionally; this opt-out exists only for compatibility with such
    /// environments. The default is verified TLS.
    #[must_use]
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Configures user credentials up front, equivalent to calling
    /// [`UntappdClient::set_authenticated_user`] after `build`.
    #[must_use]
    pub fn with_authenticated_user(mut self, username: &str, password: &str) -> Self {
        if !username.is_empty() && !password.is_empty() {
            self.credentials = Some(Credentials::derive(username, password));
        } else {
            self.credentials = None;
        }
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Fails with [`UntappdError::Validation`] when the API key is empty or
    /// the base URL cannot be used, and with [`UntappdError::Transport`]
    /// when the underlying HTTP client cannot be initialized.
    pub fn build(self) -> Result<UntappdClient, UntappdError> {
        let Self {
            api_key,
            base_url,
            http,
            accept_invalid_certs,
            credentials,
        } = self;

        if api_key.is_empty() {
            return Err(UntappdError::validation("apiKey must be a non-empty string"));
        }

        let base_url = match base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)
                .map_err(|error| UntappdError::validation(format!("invalid base URL: {error}")))?,
        };
        if base_url.cannot_be_a_base() {
            return Err(UntappdError::validation(format!(
                "base URL cannot be used as a base: {base_url}"
            )));
        }

        let http = match http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .danger_accept_invalid_certs(accept_invalid_certs)
                .build()
                .map_err(|error| UntappdError::Transport {
                    url: base_url.clone(),
                    message: format!("failed to initialize HTTP client: {error}"),
                })?,
        };

        Ok(UntappdClient {
            http,
            base_url,
            api_key,
            credentials,
        })
    }
}
