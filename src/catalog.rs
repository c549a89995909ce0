//! TOML catalogs for templates, settings and tagged listings
//!
//! Template catalogs list `[[template]]` entries:
//!
//! ```toml
//! [[template]]
//! id = "http-template"
//! name = "HTTP"
//! group = "http"
//!
//! [template.properties.url]
//! required = true
//!
//! [template.properties.timeout]
//! kind = "integer"
//! default = 30
//! ```
//!
//! Settings are a flat document with optional `name`/`description` and a
//! `[configured_properties]` table. Tag listings hold `[[integration]]` and
//! `[[connection]]` arrays.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ValidationError;
use crate::model::{
    ConfigurationProperty, Connection, ConnectorGroup, ConnectorSettings, ConnectorTemplate,
    Integration, ListResult, PropertySchema, DEFAULT_PROPERTY_KIND,
};
use crate::template::TemplateRegistry;

/// Errors that can occur when loading or writing catalogs
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse catalog TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to write TOML: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("Invalid catalog: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default, rename = "template")]
    templates: Vec<TomlTemplate>,
}

#[derive(Deserialize)]
struct TomlTemplate {
    id: String,
    name: Option<String>,
    description: Option<String>,
    group: String,
    /// Kept as a raw table so declaration order survives
    #[serde(default)]
    properties: toml::Table,
}

#[derive(Deserialize)]
struct TomlProperty {
    kind: Option<String>,
    default: Option<toml::Value>,
    #[serde(default)]
    required: bool,
    display_name: Option<String>,
    description: Option<String>,
    #[serde(default)]
    secret: bool,
}

#[derive(Deserialize)]
struct TomlSettings {
    name: Option<String>,
    description: Option<String>,
    #[serde(default)]
    configured_properties: BTreeMap<String, toml::Value>,
}

#[derive(Deserialize)]
struct TomlListing {
    #[serde(default, rename = "integration")]
    integrations: Vec<TomlTagged>,
    #[serde(default, rename = "connection")]
    connections: Vec<TomlTagged>,
}

#[derive(Deserialize)]
struct TomlTagged {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    tags: Vec<String>,
}

/// Property values may be written as any TOML scalar
fn value_to_string(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl TomlTemplate {
    fn into_template(self) -> Result<ConnectorTemplate, CatalogError> {
        let mut properties = PropertySchema::new();
        for (key, value) in self.properties {
            let raw = value.try_into::<TomlProperty>()?;
            let property = ConfigurationProperty {
                kind: raw.kind.unwrap_or_else(|| DEFAULT_PROPERTY_KIND.to_string()),
                default_value: raw.default.as_ref().map(value_to_string),
                required: raw.required,
                display_name: raw.display_name,
                description: raw.description,
                secret: raw.secret,
            };
            properties = properties.put(key, property);
        }

        Ok(ConnectorTemplate {
            id: self.id,
            name: self.name,
            description: self.description,
            connector_group: ConnectorGroup::new(self.group),
            properties,
        })
    }
}

impl TemplateRegistry {
    /// Load a registry from a TOML catalog file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a registry from a TOML catalog string
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let parsed: TomlCatalog = toml::from_str(content)?;

        let mut registry = TemplateRegistry::new();
        for entry in parsed.templates {
            registry.register(entry.into_template()?)?;
        }
        Ok(registry)
    }
}

impl ConnectorSettings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let parsed: TomlSettings = toml::from_str(content)?;

        Ok(ConnectorSettings {
            name: parsed.name,
            description: parsed.description,
            configured_properties: parsed
                .configured_properties
                .iter()
                .map(|(k, v)| (k.clone(), value_to_string(v)))
                .collect(),
        })
    }
}

/// Integrations and connections read from one listing document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagListing {
    pub integrations: ListResult<Integration>,
    pub connections: ListResult<Connection>,
}

impl TagListing {
    /// Load a listing from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a listing from a TOML string
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let parsed: TomlListing = toml::from_str(content)?;

        Ok(TagListing {
            integrations: ListResult::of(
                parsed
                    .integrations
                    .into_iter()
                    .map(|e| Integration::new(e.id, e.name).with_tags(e.tags)),
            ),
            connections: ListResult::of(
                parsed
                    .connections
                    .into_iter()
                    .map(|e| Connection::new(e.id, e.name).with_tags(e.tags)),
            ),
        })
    }
}

/// Render any model value as pretty TOML
pub fn to_toml<T: Serialize>(value: &T) -> Result<String, CatalogError> {
    Ok(toml::to_string_pretty(value)?)
}
