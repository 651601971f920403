use std::fmt::Display;

use indexmap::IndexMap;

use super::error::UntappdError;

/// Reserved query key carrying the API key on every request.
const API_KEY_PARAM: &str = "key";

/// Insertion-ordered query parameters for one request.
///
/// Absent optionals are simply never inserted, so the encoded query contains
/// exactly the parameters the caller provided — there is no empty-string
/// sentinel. A value that renders to the empty string is dropped as well,
/// keeping the transmitted query free of `name=` noise; numeric zero renders
/// as `"0"` and is kept.
#[derive(Debug, Clone, Default)]
pub(crate) struct QueryParams {
    entries: IndexMap<&'static str, String>,
}

impl QueryParams {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds a required parameter.
    pub(crate) fn set(mut self, name: &'static str, value: impl Display) -> Self {
        let rendered = value.to_string();
        if !rendered.is_empty() {
            self.entries.insert(name, rendered);
        }
        self
    }

    /// Adds a parameter only when a value is present.
    pub(crate) fn set_opt(self, name: &'static str, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    /// Adds a boolean parameter using the API's `on`/`off` tokens.
    pub(crate) fn set_flag(self, name: &'static str, value: bool) -> Self {
        self.set(name, if value { "on" } else { "off" })
    }

    /// Appends the API key and form-urlencodes the parameters.
    pub(crate) fn into_query_string(mut self, api_key: &str) -> Result<String, UntappdError> {
        if !api_key.is_empty() {
            self.entries.insert(API_KEY_PARAM, api_key.to_string());
        }
        serde_urlencoded::to_string(&self.entries).map_err(|error| {
            UntappdError::validation(format!("query encoding failed: {error}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_in_insertion_order_with_key_last() {
        let query = QueryParams::new()
            .set("user", "gregavola")
            .set("offset", 25_u64)
            .into_query_string("abc123")
            .expect("encodes");
        assert_eq!(query, "user=gregavola&offset=25&key=abc123");
    }

    #[test]
    fn absent_optionals_are_omitted() {
        let query = QueryParams::new()
            .set("bid", 10_u64)
            .set_opt("since", None::<u64>)
            .set_opt("offset", Some(0_u64))
            .into_query_string("k")
            .expect("encodes");
        assert_eq!(query, "bid=10&offset=0&key=k");
    }

    #[test]
    fn empty_rendered_values_are_omitted() {
        let query = QueryParams::new()
            .set("q", "")
            .set("user", "someone")
            .into_query_string("k")
            .expect("encodes");
        assert_eq!(query, "user=someone&key=k");
    }

    #[test]
    fn zero_is_not_empty() {
        let query = QueryParams::new()
            .set("offset", 0_u64)
            .into_query_string("k")
            .expect("encodes");
        assert!(query.contains("offset=0"));
    }

    #[test]
    fn flags_normalize_to_on_off_tokens() {
        let query = QueryParams::new()
            .set_flag("facebook", true)
            .set_flag("twitter", false)
            .into_query_string("k")
            .expect("encodes");
        assert_eq!(query, "facebook=on&twitter=off&key=k");
    }

    #[test]
    fn values_are_form_urlencoded() {
        let query = QueryParams::new()
            .set("q", "dogfish head 60")
            .into_query_string("k")
            .expect("encodes");
        assert_eq!(query, "q=dogfish+head+60&key=k");
    }

    #[test]
    fn empty_api_key_is_not_transmitted() {
        // Builders reject empty keys up front; the omission rule still
        // applies uniformly here.
        let query = QueryParams::new()
            .set("user", "someone")
            .into_query_string("")
            .expect("encodes");
        assert_eq!(query, "user=someone");
    }
}
