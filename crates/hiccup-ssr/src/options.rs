//! Render options handed through to the serialization backend.
//!
//! Options are an open string-keyed map; the renderer itself never reads
//! them. They can be built in code or loaded from TOML, in which case string
//! values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};

/// Error loading render options.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum OptionsError {
    /// Options file could not be read.
    #[error("Failed to read options file {}: {source}", path.display())]
    Io {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {key}: {message}")]
    EnvVar {
        /// Dotted option path (e.g., "`meta.base_url`").
        key: String,
        /// Error message (e.g., "${`BASE_URL`} not set").
        message: String,
    },
}

/// Options passed verbatim to [`SerializeBackend::serialize`].
///
/// [`SerializeBackend::serialize`]: crate::SerializeBackend::serialize
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RenderOptions(Map<String, Value>);

impl RenderOptions {
    /// Empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from TOML text, expanding environment variables.
    pub fn from_toml_str(content: &str) -> Result<Self, OptionsError> {
        let mut options: Self = toml::from_str(content)?;
        for (key, value) in &mut options.0 {
            expand_value(value, key)?;
        }
        Ok(options)
    }

    /// Load options from a TOML file.
    pub fn load(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Set an option, replacing any previous value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Raw option value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Option value as a boolean, if it is one.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Option value as a string, if it is one.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Whether no options are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for RenderOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Expand environment variables in every string inside `value`.
fn expand_value(value: &mut Value, key: &str) -> Result<(), OptionsError> {
    match value {
        Value::String(text) => {
            let expanded = shellexpand::env(text.as_str()).map_err(|e| OptionsError::EnvVar {
                key: key.to_owned(),
                message: e.to_string(),
            })?;
            *text = expanded.into_owned();
        }
        Value::Array(items) => {
            for (index, item) in items.iter_mut().enumerate() {
                expand_value(item, &format!("{key}[{index}]"))?;
            }
        }
        Value::Object(map) => {
            for (name, item) in map {
                expand_value(item, &format!("{key}.{name}"))?;
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_builder_and_accessors() {
        let options = RenderOptions::new()
            .with("pretty", true)
            .with("doctype", "html5");

        assert_eq!(options.get_bool("pretty"), Some(true));
        assert_eq!(options.get_str("doctype"), Some("html5"));
        assert_eq!(options.get_bool("doctype"), None);
        assert_eq!(options.get("missing"), None);
        assert!(!options.is_empty());
    }

    #[test]
    fn test_from_toml_str() {
        let options = RenderOptions::from_toml_str(
            r#"
pretty = false
indent = 2

[meta]
lang = "en"
"#,
        )
        .unwrap();

        assert_eq!(options.get_bool("pretty"), Some(false));
        assert_eq!(options.get("indent"), Some(&json!(2)));
        assert_eq!(options.get("meta"), Some(&json!({"lang": "en"})));
    }

    #[test]
    fn test_from_toml_str_empty() {
        let options = RenderOptions::from_toml_str("").unwrap();
        assert!(options.is_empty());
    }

    #[test]
    fn test_from_toml_str_invalid() {
        let result = RenderOptions::from_toml_str("pretty = ");
        assert!(matches!(result, Err(OptionsError::Parse(_))));
    }

    #[test]
    fn test_env_default_used_when_unset() {
        let options = RenderOptions::from_toml_str(
            r#"
[meta]
base_url = "${HICCUP_SSR_TEST_UNSET_BASE_URL:-https://example.com}"
tags = ["${HICCUP_SSR_TEST_UNSET_TAG:-docs}"]
"#,
        )
        .unwrap();

        assert_eq!(
            options.get("meta"),
            Some(&json!({"base_url": "https://example.com", "tags": ["docs"]}))
        );
    }

    #[test]
    fn test_env_unset_is_error_with_key_path() {
        let result = RenderOptions::from_toml_str(
            r#"
[meta]
base_url = "${HICCUP_SSR_TEST_UNSET_REQUIRED}"
"#,
        );

        match result {
            Err(OptionsError::EnvVar { key, .. }) => assert_eq!(key, "meta.base_url"),
            other => panic!("expected EnvVar error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let result = RenderOptions::load(&path);
        assert!(matches!(result, Err(OptionsError::Io { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("render.toml");
        std::fs::write(&path, "pretty = true\n").unwrap();

        let options = RenderOptions::load(&path).unwrap();
        assert_eq!(options.get_bool("pretty"), Some(true));
    }

    static_assertions::assert_impl_all!(RenderOptions: Send, Sync);
}
