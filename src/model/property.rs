//! Configuration property descriptors and template property schemas

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::ValidationError;

/// Type tag used when a property does not declare one
pub const DEFAULT_PROPERTY_KIND: &str = "string";

/// Describes one configurable slot of a connector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigurationProperty {
    /// Type tag (string, integer, boolean, ...)
    pub kind: String,
    /// Value used when settings do not configure the property
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Whether a value must be present after merging
    pub required: bool,
    /// Human readable label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Value should be masked by presentation layers
    pub secret: bool,
}

impl Default for ConfigurationProperty {
    fn default() -> Self {
        Self {
            kind: DEFAULT_PROPERTY_KIND.to_string(),
            default_value: None,
            required: false,
            display_name: None,
            description: None,
            secret: false,
        }
    }
}

impl ConfigurationProperty {
    /// Create an optional string property without a default
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_display_name(mut self, label: impl Into<String>) -> Self {
        self.display_name = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_secret(mut self, secret: bool) -> Self {
        self.secret = secret;
        self
    }

    /// A required property without a default must be configured explicitly
    pub fn needs_value(&self) -> bool {
        self.required && self.default_value.is_none()
    }
}

/// Ordered property declarations of a template
///
/// Entries are kept in declaration order and duplicates are retained so that
/// [`PropertySchema::validate`] can report them instead of silently keeping
/// the last one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySchema {
    entries: Vec<(String, ConfigurationProperty)>,
}

impl PropertySchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a property declaration
    pub fn put(mut self, key: impl Into<String>, property: ConfigurationProperty) -> Self {
        self.entries.push((key.into(), property));
        self
    }

    /// Look up the first declaration for a key
    pub fn get(&self, key: &str) -> Option<&ConfigurationProperty> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, property)| property)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigurationProperty)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), p))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declared default values, keyed by property
    pub fn defaults(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(k, p)| p.default_value.as_deref().map(|v| (k.as_str(), v)))
    }

    /// Reject schemas declaring the same key twice
    pub fn validate(&self, template: &str) -> Result<(), ValidationError> {
        for (idx, (key, _)) in self.entries.iter().enumerate() {
            if self.entries[..idx].iter().any(|(seen, _)| seen == key) {
                return Err(ValidationError::DuplicateProperty {
                    template: template.to_string(),
                    key: key.clone(),
                });
            }
        }
        Ok(())
    }
}

impl<K: Into<String>> FromIterator<(K, ConfigurationProperty)> for PropertySchema {
    fn from_iter<I: IntoIterator<Item = (K, ConfigurationProperty)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, p)| (k.into(), p)).collect(),
        }
    }
}

impl Serialize for PropertySchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, property) in &self.entries {
            map.serialize_entry(key, property)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_skip_properties_without_default() {
        let schema = PropertySchema::new()
            .put("host", ConfigurationProperty::new().with_default("localhost"))
            .put("port", ConfigurationProperty::new().with_kind("integer"));

        let defaults: Vec<_> = schema.defaults().collect();
        assert_eq!(defaults, vec![("host", "localhost")]);
    }

    #[test]
    fn test_validate_rejects_duplicate_keys() {
        let schema = PropertySchema::new()
            .put("host", ConfigurationProperty::new())
            .put("port", ConfigurationProperty::new())
            .put("host", ConfigurationProperty::new().with_required(true));

        let result = schema.validate("http");
        assert_eq!(
            result,
            Err(ValidationError::DuplicateProperty {
                template: "http".to_string(),
                key: "host".to_string(),
            })
        );
    }

    #[test]
    fn test_get_returns_first_declaration() {
        let schema = PropertySchema::new()
            .put("host", ConfigurationProperty::new().with_default("a"))
            .put("host", ConfigurationProperty::new().with_default("b"));
        assert_eq!(
            schema.get("host").and_then(|p| p.default_value.as_deref()),
            Some("a")
        );
    }

    #[test]
    fn test_needs_value() {
        assert!(ConfigurationProperty::new().with_required(true).needs_value());
        assert!(!ConfigurationProperty::new()
            .with_required(true)
            .with_default("x")
            .needs_value());
        assert!(!ConfigurationProperty::new().needs_value());
    }
}
