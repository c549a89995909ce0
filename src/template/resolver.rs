//! Template resolution - turns a template and settings into a connector

use std::collections::BTreeMap;

use tracing::{debug, trace};
use uuid::Uuid;

use crate::error::{GeneratorError, ValidationError};
use crate::model::{Connector, ConnectorSettings, ConnectorSummary, ConnectorTemplate};

use super::derivation::ConnectorDerivation;
use super::registry::TemplateRegistry;

/// Resolves connector templates using a derivation strategy
///
/// The generator holds no mutable state; it can be shared between threads
/// whenever its strategy can.
#[derive(Debug, Clone, Default)]
pub struct ConnectorGenerator<D> {
    derivation: D,
}

impl<D: ConnectorDerivation> ConnectorGenerator<D> {
    pub fn new(derivation: D) -> Self {
        Self { derivation }
    }

    /// Resolve a template into a complete connector
    ///
    /// This function:
    /// 1. Validates the template id and property schema
    /// 2. Takes name and description from settings or derives them
    /// 3. Merges schema defaults with configured properties (settings win)
    /// 4. Checks that every required property has a value
    /// 5. Assigns a fresh id
    pub fn resolve(
        &self,
        template: &ConnectorTemplate,
        settings: &ConnectorSettings,
    ) -> Result<Connector, GeneratorError> {
        debug!(template = %template.id, "resolving connector");
        validate_template(template)?;

        let name = self.determine_name(template, settings)?;
        let description = self.determine_description(template, settings)?;
        let configured_properties = merge_properties(template, settings);
        check_required(template, &configured_properties)?;

        let connector = Connector {
            id: fresh_id(&template.id),
            template_id: template.id.clone(),
            name,
            description,
            tags: Default::default(),
            connector_group: template.connector_group.clone(),
            properties: template.properties.clone(),
            configured_properties,
        };

        debug!(template = %template.id, connector = %connector.id, "resolved connector");
        Ok(connector)
    }

    /// Preview name, description and schema without merging properties
    pub fn summarize(
        &self,
        template: &ConnectorTemplate,
        settings: &ConnectorSettings,
    ) -> Result<ConnectorSummary, GeneratorError> {
        validate_template(template)?;

        Ok(ConnectorSummary {
            name: self.determine_name(template, settings)?,
            description: self.determine_description(template, settings)?,
            property_keys: template.properties.keys().map(str::to_string).collect(),
            connector_group: template.connector_group.clone(),
        })
    }

    /// Resolve a template looked up by id
    pub fn resolve_registered(
        &self,
        registry: &TemplateRegistry,
        template_id: &str,
        settings: &ConnectorSettings,
    ) -> Result<Connector, GeneratorError> {
        self.resolve(registry.require(template_id)?, settings)
    }

    /// Summarize a template looked up by id
    pub fn summarize_registered(
        &self,
        registry: &TemplateRegistry,
        template_id: &str,
        settings: &ConnectorSettings,
    ) -> Result<ConnectorSummary, GeneratorError> {
        self.summarize(registry.require(template_id)?, settings)
    }

    fn determine_name(
        &self,
        template: &ConnectorTemplate,
        settings: &ConnectorSettings,
    ) -> Result<String, GeneratorError> {
        match settings.explicit_name() {
            Some(name) => Ok(name.to_string()),
            None => Ok(self.derivation.derive_name(template, settings)?),
        }
    }

    fn determine_description(
        &self,
        template: &ConnectorTemplate,
        settings: &ConnectorSettings,
    ) -> Result<String, GeneratorError> {
        match settings.explicit_description() {
            Some(description) => Ok(description.to_string()),
            None => Ok(self.derivation.derive_description(template, settings)?),
        }
    }
}

fn validate_template(template: &ConnectorTemplate) -> Result<(), ValidationError> {
    if template.id.is_empty() {
        return Err(ValidationError::MissingTemplateId);
    }
    template.properties.validate(&template.id)
}

/// Schema defaults overridden and extended by configured properties
fn merge_properties(
    template: &ConnectorTemplate,
    settings: &ConnectorSettings,
) -> BTreeMap<String, String> {
    let mut merged: BTreeMap<String, String> = template
        .properties
        .defaults()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    for (key, value) in &settings.configured_properties {
        if !template.properties.contains(key) {
            trace!(template = %template.id, key = %key, "passing through undeclared property");
        }
        merged.insert(key.clone(), value.clone());
    }

    merged
}

fn check_required(
    template: &ConnectorTemplate,
    merged: &BTreeMap<String, String>,
) -> Result<(), ValidationError> {
    for (key, property) in template.properties.iter() {
        if property.needs_value() && !merged.contains_key(key) {
            return Err(ValidationError::MissingRequiredProperty {
                template: template.id.clone(),
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

fn fresh_id(template_id: &str) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if id != template_id {
            return id;
        }
    }
}
