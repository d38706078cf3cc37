use indexmap::IndexMap;
use tracing::warn;

use super::param::{ParameterValue, ResolvedParamValue};
use crate::client::error::ApiClientError;

/// HTTP headers for an API call.
///
/// Headers added later override headers with the same name.
///
/// ```rust
/// use reqspec_core::CallHeaders;
///
/// let headers = CallHeaders::new()
///     .add_header("x-api-key", "reqres-free-v1")
///     .add_header("X-Retry-Count", 3);
/// assert_eq!(headers.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallHeaders {
    headers: IndexMap<String, ResolvedParamValue>,
}

impl CallHeaders {
    /// Creates a new empty `CallHeaders`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header.
    pub fn add_header<T: ParameterValue>(mut self, name: impl Into<String>, value: T) -> Self {
        let name = name.into();
        match ResolvedParamValue::resolve(&value) {
            Ok(resolved) => {
                self.headers.insert(name, resolved);
            }
            Err(error) => {
                warn!(%name, ?value, %error, "skip header that cannot be serialized");
            }
        }
        self
    }

    /// Merges another `CallHeaders` into this one, `other` takes precedence.
    pub fn merge(mut self, other: Self) -> Self {
        self.headers.extend(other.headers);
        self
    }

    /// Checks if the headers collection is empty.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Returns the number of headers.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub(in crate::client) fn to_http_headers(
        &self,
    ) -> Result<Vec<(String, String)>, ApiClientError> {
        self.headers
            .iter()
            .map(|(name, resolved)| Ok((name.clone(), resolved.to_string_value()?)))
            .collect()
    }
}
