use std::fmt::Debug;

use serde::Serialize;

use crate::client::ApiClientError;

/// A type that can be used as a path or header parameter value.
///
/// Any serializable scalar qualifies: strings, numbers, booleans,
/// or a sequence of those (rendered comma-separated).
pub trait ParameterValue: Serialize + Debug + Send + Sync + Clone + 'static {}

impl<T> ParameterValue for T where T: Serialize + Debug + Send + Sync + Clone + 'static {}

/// A parameter value already turned into JSON, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub(in crate::client) struct ResolvedParamValue {
    pub(in crate::client) value: serde_json::Value,
}

impl ResolvedParamValue {
    pub(in crate::client) fn resolve<T: ParameterValue>(value: &T) -> Result<Self, ApiClientError> {
        let value = serde_json::to_value(value)?;
        Ok(Self { value })
    }

    /// Render the value as it appears on the wire, before any encoding.
    pub(in crate::client) fn to_string_value(&self) -> Result<String, ApiClientError> {
        match &self.value {
            serde_json::Value::Array(items) => {
                let values = items
                    .iter()
                    .map(|item| self.scalar_to_string(item))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(values.join(","))
            }
            value => self.scalar_to_string(value),
        }
    }

    fn scalar_to_string(&self, value: &serde_json::Value) -> Result<String, ApiClientError> {
        match value {
            serde_json::Value::String(text) => Ok(text.clone()),
            serde_json::Value::Number(number) => Ok(number.to_string()),
            serde_json::Value::Bool(flag) => Ok(flag.to_string()),
            serde_json::Value::Null => Ok(String::new()),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                Err(ApiClientError::UnsupportedParameterValue {
                    message: "nested arrays and objects are not supported in parameters"
                        .to_string(),
                    value: self.value.clone(),
                })
            }
        }
    }
}
