//! Connector templates, per-request settings and resolved connectors

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::listing::WithTags;
use super::property::{ConfigurationProperty, PropertySchema};

/// Group a connector family belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ConnectorGroup {
    pub id: String,
}

impl ConnectorGroup {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Reusable schema and group metadata connectors are instantiated from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectorTemplate {
    pub id: String,
    /// Display name of the template itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub connector_group: ConnectorGroup,
    pub properties: PropertySchema,
}

impl ConnectorTemplate {
    /// Create a template with an empty property schema
    pub fn new(id: impl Into<String>, connector_group: ConnectorGroup) -> Self {
        Self {
            id: id.into(),
            name: None,
            description: None,
            connector_group,
            properties: PropertySchema::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_properties(mut self, properties: PropertySchema) -> Self {
        self.properties = properties;
        self
    }

    /// Declare one more property
    pub fn put_property(mut self, key: impl Into<String>, property: ConfigurationProperty) -> Self {
        self.properties = self.properties.put(key, property);
        self
    }
}

/// User supplied overrides for a single resolution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConnectorSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Values keyed by property; keys unknown to the template are allowed
    pub configured_properties: BTreeMap<String, String>,
}

impl ConnectorSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn put_configured_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.configured_properties.insert(key.into(), value.into());
        self
    }

    /// Explicit name, ignoring empty strings
    pub fn explicit_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    /// Explicit description, ignoring empty strings
    pub fn explicit_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|s| !s.is_empty())
    }
}

/// A connector resolved from a template and settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connector {
    pub id: String,
    /// Id of the template this connector was produced from
    pub template_id: String,
    pub name: String,
    pub description: String,
    pub tags: BTreeSet<String>,
    pub connector_group: ConnectorGroup,
    pub properties: PropertySchema,
    pub configured_properties: BTreeMap<String, String>,
}

impl Connector {
    /// Replace the tag set
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Configured value for a property, if any
    pub fn configured(&self, key: &str) -> Option<&str> {
        self.configured_properties.get(key).map(String::as_str)
    }
}

impl WithTags for Connector {
    fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }
}

/// Preview of a connector, computed without merging properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectorSummary {
    pub name: String,
    pub description: String,
    /// Schema keys in declaration order
    pub property_keys: Vec<String>,
    pub connector_group: ConnectorGroup,
}
