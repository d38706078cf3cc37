//! YAML serialization of step reports, using serde-saphyr.
//!
//! Only available with the `yaml` feature.
//!
//! ```rust,ignore
//! use reqspec_core::ToYaml;
//!
//! let reports = client.collected_reports().await;
//! let yaml = reports.to_yaml()?;
//! ```

use serde::Serialize;

/// Error type for YAML serialization operations.
pub type YamlError = serde_saphyr::ser_error::Error;

/// Extension trait adding `to_yaml()` to any [`Serialize`] type.
pub trait ToYaml: Serialize {
    /// Serializes this value to a YAML string.
    ///
    /// # Errors
    ///
    /// Returns a [`YamlError`] if serialization fails.
    fn to_yaml(&self) -> Result<String, YamlError> {
        serde_saphyr::to_string(self)
    }
}

impl<T: Serialize + ?Sized> ToYaml for T {}
