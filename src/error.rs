//! Error types for template resolution and connector derivation

use thiserror::Error;

/// Malformed or missing input, detected locally
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Template carries an empty id
    #[error("connector template id must not be empty")]
    MissingTemplateId,

    /// No template registered under the requested id
    #[error("template not found: {id}")]
    TemplateNotFound { id: String },

    /// Template id registered twice
    #[error("duplicate template definition: {id}")]
    DuplicateTemplate { id: String },

    /// Property key declared more than once in a template schema
    #[error("duplicate property '{key}' in template {template}")]
    DuplicateProperty { template: String, key: String },

    /// Required property with neither a default nor a configured value
    #[error("missing required property '{key}' for template {template}")]
    MissingRequiredProperty { template: String, key: String },
}

/// A derivation strategy could not produce a name or description
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DerivationError {
    /// Template has no metadata to derive the field from
    #[error("cannot derive connector {field} for template {template}: no metadata")]
    MissingMetadata { template: String, field: String },

    /// Settings do not reference a specification
    #[error("template {template} requires a 'specification' configured property")]
    MissingSpecification { template: String },

    /// External metadata lookup failed
    #[error("specification lookup for '{reference}' failed: {reason}")]
    LookupFailed { reference: String, reason: String },
}

impl DerivationError {
    /// Create a missing metadata error
    pub fn missing_metadata(template: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingMetadata {
            template: template.into(),
            field: field.into(),
        }
    }

    /// Create a lookup failure error
    pub fn lookup_failed(reference: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LookupFailed {
            reference: reference.into(),
            reason: reason.into(),
        }
    }
}

/// Errors returned by [`crate::ConnectorGenerator`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("derivation error: {0}")]
    Derivation(#[from] DerivationError),
}
