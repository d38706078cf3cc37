use std::collections::BTreeSet;
use std::sync::LazyLock;

use indexmap::IndexMap;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use regex::{Captures, Regex};
use tracing::warn;

use super::param::{ParameterValue, ResolvedParamValue};
use crate::client::ApiClientError;

/// Regular expression for matching path parameters in the format `{param_name}`.
static RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?<name>\w+)}").expect("a valid regex"));

/// A path suffix, relative to an [`EndpointSpec`](crate::EndpointSpec) base path,
/// with `{name}` placeholders substituted by typed values.
///
/// # Examples
///
/// ```rust
/// use reqspec_core::CallPath;
///
/// let path = CallPath::from("/{id}").add_param("id", 3);
/// assert_eq!(path.to_string(), "/{id}");
/// ```
///
/// Values are percent-encoded when the path is resolved, and the same
/// placeholder may appear several times.
#[derive(Debug, Clone, Default, PartialEq, derive_more::Display)]
#[display("{path}")]
pub struct CallPath {
    pub(in crate::client) path: String,
    args: IndexMap<String, ResolvedParamValue>,
}

impl CallPath {
    /// Adds (or replaces) a path parameter.
    pub fn add_param<T: ParameterValue>(mut self, name: impl Into<String>, value: T) -> Self {
        let name = name.into();
        match ResolvedParamValue::resolve(&value) {
            Ok(resolved) => {
                self.args.insert(name, resolved);
            }
            Err(error) => {
                warn!(%name, ?value, %error, "skip path parameter that cannot be serialized");
            }
        }
        self
    }

    /// The path template, with its placeholders.
    pub fn template(&self) -> &str {
        &self.path
    }
}

impl From<&str> for CallPath {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<String> for CallPath {
    fn from(path: String) -> Self {
        Self {
            path,
            args: IndexMap::default(),
        }
    }
}

#[derive(Debug)]
pub(in crate::client) struct PathResolved {
    pub(in crate::client) path: String,
}

impl TryFrom<CallPath> for PathResolved {
    type Error = ApiClientError;

    fn try_from(value: CallPath) -> Result<Self, Self::Error> {
        let CallPath { path: template, args } = value;

        let mut encoded = IndexMap::with_capacity(args.len());
        for (name, resolved) in args {
            let placeholder = format!("{{{name}}}");
            if !template.contains(&placeholder) {
                warn!(?name, "argument name not found");
                continue;
            }
            let value = resolved.to_string_value()?;
            encoded.insert(name, utf8_percent_encode(&value, NON_ALPHANUMERIC).to_string());
        }

        let mut missings = BTreeSet::new();
        let path = RE
            .replace_all(&template, |caps: &Captures<'_>| {
                let whole = caps.get(0).map_or("", |found| found.as_str());
                let name = caps.name("name").map_or("", |found| found.as_str());
                if let Some(value) = encoded.get(name) {
                    value.clone()
                } else {
                    missings.insert(name.to_string());
                    whole.to_string()
                }
            })
            .into_owned();

        if missings.is_empty() {
            Ok(Self { path })
        } else {
            Err(ApiClientError::PathUnresolved {
                path,
                missings: missings.into_iter().collect(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_resolve_fixture_id() {
        let path = CallPath::from("/{id}").add_param("id", 3);

        let resolved = PathResolved::try_from(path).expect("full resolve");

        insta::assert_debug_snapshot!(resolved, @r#"
        PathResolved {
            path: "/3",
        }
        "#);
    }

    #[test]
    fn should_resolve_path_without_parameters() {
        let resolved = PathResolved::try_from(CallPath::from("")).expect("resolve");

        assert_eq!(resolved.path, "");
    }

    #[test]
    fn test_path_resolved_with_multiple_parameters() {
        let path = CallPath::from("/users/{user_id}/posts/{post_id}")
            .add_param("user_id", 123)
            .add_param("post_id", "abc");

        let resolved = PathResolved::try_from(path).expect("should resolve");

        assert_eq!(resolved.path, "/users/123/posts/abc");
    }

    #[test]
    fn test_path_resolved_with_missing_parameters() {
        let path = CallPath::from("/users/{user_id}/posts/{post_id}").add_param("user_id", 123);

        let result = PathResolved::try_from(path);

        insta::assert_debug_snapshot!(result, @r#"
        Err(
            PathUnresolved {
                path: "/users/123/posts/{post_id}",
                missings: [
                    "post_id",
                ],
            },
        )
        "#);
    }

    #[test]
    fn test_path_resolved_with_url_encoding() {
        let path = CallPath::from("/search/{query}").add_param("query", "blue turquoise");

        let resolved = PathResolved::try_from(path).expect("should resolve");

        assert_eq!(resolved.path, "/search/blue%20turquoise");
    }

    #[test]
    fn test_path_with_duplicate_parameter_names() {
        let path = CallPath::from("/test/{id}/{id}").add_param("id", 123);

        let resolved = PathResolved::try_from(path).expect("should resolve");

        assert_eq!(resolved.path, "/test/123/123");
    }

    #[test]
    fn test_add_param_overwrites_existing() {
        let path = CallPath::from("/{id}").add_param("id", 3).add_param("id", 25);

        let resolved = PathResolved::try_from(path).expect("should resolve");

        assert_eq!(resolved.path, "/25");
    }

    #[test]
    fn test_unknown_argument_is_ignored() {
        let path = CallPath::from("/{id}").add_param("id", 2).add_param("other", 1);

        let resolved = PathResolved::try_from(path).expect("should resolve");

        assert_eq!(resolved.path, "/2");
    }
}
