//! Template registry for storing and retrieving connector templates

use std::collections::HashMap;

use crate::error::ValidationError;
use crate::model::ConnectorTemplate;

/// Registry of connector templates keyed by id
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, ConnectorTemplate>,
}

impl TemplateRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template
    ///
    /// The template id must be non-empty, unique within the registry, and its
    /// property schema free of duplicate keys.
    pub fn register(&mut self, template: ConnectorTemplate) -> Result<(), ValidationError> {
        if template.id.is_empty() {
            return Err(ValidationError::MissingTemplateId);
        }
        if self.templates.contains_key(&template.id) {
            return Err(ValidationError::DuplicateTemplate { id: template.id });
        }
        template.properties.validate(&template.id)?;

        self.templates.insert(template.id.clone(), template);
        Ok(())
    }

    /// Get a template by id
    pub fn get(&self, id: &str) -> Option<&ConnectorTemplate> {
        self.templates.get(id)
    }

    /// Get a template by id, failing when it is absent
    pub fn require(&self, id: &str) -> Result<&ConnectorTemplate, ValidationError> {
        self.get(id).ok_or_else(|| ValidationError::TemplateNotFound { id: id.to_string() })
    }

    /// Check if a template exists
    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// All registered ids, sorted
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConfigurationProperty, ConnectorGroup};

    fn template(id: &str) -> ConnectorTemplate {
        ConnectorTemplate::new(id, ConnectorGroup::new("group"))
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = TemplateRegistry::new();
        registry.register(template("http")).expect("Should register");

        assert!(registry.contains("http"));
        assert!(registry.get("http").is_some());
        assert_eq!(registry.ids(), vec!["http"]);
    }

    #[test]
    fn test_registry_duplicate_error() {
        let mut registry = TemplateRegistry::new();
        registry
            .register(template("http"))
            .expect("First register should succeed");

        let result = registry.register(template("http"));
        assert!(matches!(result, Err(ValidationError::DuplicateTemplate { .. })));
    }

    #[test]
    fn test_registry_rejects_malformed_schema() {
        let mut registry = TemplateRegistry::new();
        let malformed = template("http")
            .put_property("url", ConfigurationProperty::new())
            .put_property("url", ConfigurationProperty::new());

        let result = registry.register(malformed);
        assert!(matches!(result, Err(ValidationError::DuplicateProperty { .. })));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_require_missing_template() {
        let registry = TemplateRegistry::new();
        assert_eq!(
            registry.require("ftp").err(),
            Some(ValidationError::TemplateNotFound { id: "ftp".to_string() })
        );
    }
}
