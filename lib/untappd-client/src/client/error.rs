use url::Url;

/// Errors produced by [`UntappdClient`](super::UntappdClient) operations.
///
/// Every call terminates in exactly one of these states; nothing is retried
/// internally. `Validation` and `AuthenticationRequired` are raised before a
/// request is built, so they carry no request diagnostics. The remaining
/// variants carry the dispatched URL (and the raw body where one was
/// received) so callers can inspect what was attempted without any shared
/// mutable state on the client.
#[derive(Debug, derive_more::Error, derive_more::Display)]
pub enum UntappdError {
    /// A caller-supplied argument failed local validation. No network
    /// activity took place; fix the arguments and retry.
    #[display("invalid argument: {message}")]
    Validation {
        /// What was wrong with the arguments.
        message: String,
    },

    /// The operation requires user credentials and none are configured.
    ///
    /// Call [`set_authenticated_user`](super::UntappdClient::set_authenticated_user)
    /// first. No network activity took place.
    #[display("operation requires Untappd user authentication which is not set")]
    AuthenticationRequired,

    /// The HTTP exchange itself failed: connection refused, DNS, TLS,
    /// timeout, or the body could not be read.
    #[display("transport failure for {url}: {message}")]
    Transport {
        /// The request URL that was being dispatched.
        url: Url,
        /// Text of the underlying transport error.
        message: String,
    },

    /// The reply did not expose the expected status envelope: either the
    /// body is not JSON or it lacks an `http_code` field.
    #[display("unparsable response from {url}")]
    Protocol {
        /// The request URL that produced the reply.
        url: Url,
        /// The raw reply body, for debugging.
        body: String,
    },

    /// The service rejected the request with a non-200 envelope code.
    #[display("Untappd service error {code}: {message}")]
    Remote {
        /// The `http_code` value from the reply envelope.
        code: u16,
        /// The `error` message from the reply envelope.
        message: String,
        /// The request URL that was rejected.
        url: Url,
        /// The raw reply body, for debugging.
        body: String,
    },
}

impl UntappdError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Returns `true` when the failure happened before any request was
    /// dispatched.
    #[must_use]
    pub fn is_pre_network(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::AuthenticationRequired
        )
    }
}
