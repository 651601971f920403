use serde_json::Value;
use url::Url;

use super::error::UntappdError;

/// Envelope field every reply must carry for the outcome to be classified.
const STATUS_FIELD: &str = "http_code";

/// Envelope field carrying the error message on rejected requests.
const ERROR_FIELD: &str = "error";

/// A successful reply from the service.
///
/// Beyond the decoded payload this carries the debug echo — the exact raw
/// body and the URL that was dispatched — replacing the mutable
/// last-request/last-response accessors of older client generations. Values
/// are returned per call, so clients can be shared across concurrent calls
/// without racing on diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    value: Value,
    raw_body: String,
    request_url: Url,
}

impl ApiResponse {
    /// Classifies a raw reply body into success or a typed failure.
    ///
    /// Three-way outcome: a body that is not JSON or lacks the `http_code`
    /// envelope field is a [`Protocol`](UntappdError::Protocol) failure; a
    /// non-200 envelope code is a [`Remote`](UntappdError::Remote) rejection;
    /// everything else is a success carrying the payload verbatim.
    pub(crate) fn classify(request_url: Url, raw_body: String) -> Result<Self, UntappdError> {
        let Ok(value) = serde_json::from_str::<Value>(&raw_body) else {
            return Err(UntappdError::Protocol {
                url: request_url,
                body: raw_body,
            });
        };

        let Some(code) = envelope_code(&value) else {
            return Err(UntappdError::Protocol {
                url: request_url,
                body: raw_body,
            });
        };

        if code != 200 {
            let message = value
                .get(ERROR_FIELD)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            return Err(UntappdError::Remote {
                code,
                message,
                url: request_url,
                body: raw_body,
            });
        }

        Ok(Self {
            value,
            raw_body,
            request_url,
        })
    }

    /// The decoded reply, passed through beyond the status envelope.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consumes the response, yielding the decoded reply.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// The exact body text the service returned.
    #[must_use]
    pub fn raw_body(&self) -> &str {
        &self.raw_body
    }

    /// The URL the request was dispatched to, including the encoded query.
    #[must_use]
    pub fn request_url(&self) -> &Url {
        &self.request_url
    }
}

/// Reads the envelope status code; the service has been observed sending it
/// both as a number and as a numeric string.
fn envelope_code(value: &Value) -> Option<u16> {
    match value.get(STATUS_FIELD)? {
        Value::Number(number) => u16::try_from(number.as_u64()?).ok(),
        Value::String(text) => text.parse().ok(),
        _ => None,
    }
}
