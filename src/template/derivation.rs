//! Strategies deriving connector names and descriptions
//!
//! When settings do not supply a name or description, the generator asks a
//! [`ConnectorDerivation`] for one. Strategies only see shared borrows of the
//! template and settings and may consult external, read-only metadata.

use std::collections::HashMap;

use crate::error::DerivationError;
use crate::model::{ConnectorSettings, ConnectorTemplate};

/// Configured property referencing an API specification
pub const SPECIFICATION_PROPERTY: &str = "specification";

/// Computes default names and descriptions for connectors
pub trait ConnectorDerivation {
    fn derive_name(
        &self,
        template: &ConnectorTemplate,
        settings: &ConnectorSettings,
    ) -> Result<String, DerivationError>;

    fn derive_description(
        &self,
        template: &ConnectorTemplate,
        settings: &ConnectorSettings,
    ) -> Result<String, DerivationError>;
}

impl<D: ConnectorDerivation + ?Sized> ConnectorDerivation for &D {
    fn derive_name(
        &self,
        template: &ConnectorTemplate,
        settings: &ConnectorSettings,
    ) -> Result<String, DerivationError> {
        (**self).derive_name(template, settings)
    }

    fn derive_description(
        &self,
        template: &ConnectorTemplate,
        settings: &ConnectorSettings,
    ) -> Result<String, DerivationError> {
        (**self).derive_description(template, settings)
    }
}

impl<D: ConnectorDerivation + ?Sized> ConnectorDerivation for Box<D> {
    fn derive_name(
        &self,
        template: &ConnectorTemplate,
        settings: &ConnectorSettings,
    ) -> Result<String, DerivationError> {
        (**self).derive_name(template, settings)
    }

    fn derive_description(
        &self,
        template: &ConnectorTemplate,
        settings: &ConnectorSettings,
    ) -> Result<String, DerivationError> {
        (**self).derive_description(template, settings)
    }
}

/// Derivation built from a pair of functions
pub struct FnDerivation<N, D> {
    name: N,
    description: D,
}

impl<N, D> FnDerivation<N, D>
where
    N: Fn(&ConnectorTemplate, &ConnectorSettings) -> Result<String, DerivationError>,
    D: Fn(&ConnectorTemplate, &ConnectorSettings) -> Result<String, DerivationError>,
{
    pub fn new(name: N, description: D) -> Self {
        Self { name, description }
    }
}

impl<N, D> ConnectorDerivation for FnDerivation<N, D>
where
    N: Fn(&ConnectorTemplate, &ConnectorSettings) -> Result<String, DerivationError>,
    D: Fn(&ConnectorTemplate, &ConnectorSettings) -> Result<String, DerivationError>,
{
    fn derive_name(
        &self,
        template: &ConnectorTemplate,
        settings: &ConnectorSettings,
    ) -> Result<String, DerivationError> {
        (self.name)(template, settings)
    }

    fn derive_description(
        &self,
        template: &ConnectorTemplate,
        settings: &ConnectorSettings,
    ) -> Result<String, DerivationError> {
        (self.description)(template, settings)
    }
}

/// Derives from the template's own metadata
///
/// Fallback order:
/// 1. Template name / description
/// 2. Connector group id
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateMetadataDerivation;

impl ConnectorDerivation for TemplateMetadataDerivation {
    fn derive_name(
        &self,
        template: &ConnectorTemplate,
        _settings: &ConnectorSettings,
    ) -> Result<String, DerivationError> {
        if let Some(name) = template.name.as_deref().filter(|s| !s.is_empty()) {
            return Ok(name.to_string());
        }
        let group = template.connector_group.id.as_str();
        if group.is_empty() {
            return Err(DerivationError::missing_metadata(&template.id, "name"));
        }
        Ok(group.to_string())
    }

    fn derive_description(
        &self,
        template: &ConnectorTemplate,
        _settings: &ConnectorSettings,
    ) -> Result<String, DerivationError> {
        if let Some(description) = template.description.as_deref().filter(|s| !s.is_empty()) {
            return Ok(description.to_string());
        }
        let group = template.connector_group.id.as_str();
        if group.is_empty() {
            return Err(DerivationError::missing_metadata(&template.id, "description"));
        }
        Ok(format!("{} connector", group))
    }
}

/// Title and description published by an API specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecificationInfo {
    pub title: String,
    pub description: Option<String>,
}

impl SpecificationInfo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Read-only access to API specifications
///
/// Lookups are synchronous; retries and timeouts are the implementor's concern.
pub trait SpecificationSource {
    fn lookup(&self, reference: &str) -> Result<SpecificationInfo, DerivationError>;
}

/// In-memory specification source
#[derive(Debug, Clone, Default)]
pub struct StaticSpecifications {
    specs: HashMap<String, SpecificationInfo>,
}

impl StaticSpecifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_specification(mut self, reference: impl Into<String>, info: SpecificationInfo) -> Self {
        self.specs.insert(reference.into(), info);
        self
    }
}

impl SpecificationSource for StaticSpecifications {
    fn lookup(&self, reference: &str) -> Result<SpecificationInfo, DerivationError> {
        self.specs
            .get(reference)
            .cloned()
            .ok_or_else(|| DerivationError::lookup_failed(reference, "unknown specification"))
    }
}

/// Derives from the API specification referenced by the settings
///
/// The reference is read from the `specification` configured property, falling
/// back to that property's default in the template schema.
#[derive(Debug, Clone)]
pub struct SpecificationDerivation<S> {
    source: S,
}

impl<S: SpecificationSource> SpecificationDerivation<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    fn lookup(
        &self,
        template: &ConnectorTemplate,
        settings: &ConnectorSettings,
    ) -> Result<SpecificationInfo, DerivationError> {
        let reference = settings
            .configured_properties
            .get(SPECIFICATION_PROPERTY)
            .map(String::as_str)
            .or_else(|| {
                template
                    .properties
                    .get(SPECIFICATION_PROPERTY)
                    .and_then(|p| p.default_value.as_deref())
            })
            .ok_or_else(|| DerivationError::MissingSpecification {
                template: template.id.clone(),
            })?;
        self.source.lookup(reference)
    }
}

impl<S: SpecificationSource> ConnectorDerivation for SpecificationDerivation<S> {
    fn derive_name(
        &self,
        template: &ConnectorTemplate,
        settings: &ConnectorSettings,
    ) -> Result<String, DerivationError> {
        Ok(self.lookup(template, settings)?.title)
    }

    fn derive_description(
        &self,
        template: &ConnectorTemplate,
        settings: &ConnectorSettings,
    ) -> Result<String, DerivationError> {
        self.lookup(template, settings)?
            .description
            .ok_or_else(|| DerivationError::missing_metadata(&template.id, "description"))
    }
}
