//! Connector template resolution
//!
//! This module turns reusable connector templates into concrete connectors.
//! A [`ConnectorGenerator`] merges a template's property schema with the
//! settings of one request; names and descriptions missing from the settings
//! come from a pluggable [`ConnectorDerivation`] strategy.
//!
//! # Example
//!
//! ```rust
//! use connector_kit::model::{ConfigurationProperty, ConnectorGroup, ConnectorSettings, ConnectorTemplate};
//! use connector_kit::template::{ConnectorGenerator, TemplateMetadataDerivation};
//!
//! let template = ConnectorTemplate::new("http-template", ConnectorGroup::new("http"))
//!     .put_property("method", ConfigurationProperty::new().with_default("GET"));
//! let settings = ConnectorSettings::new().put_configured_property("url", "https://example.com");
//!
//! let connector = ConnectorGenerator::new(TemplateMetadataDerivation)
//!     .resolve(&template, &settings)
//!     .unwrap();
//! assert_eq!(connector.name, "http");
//! assert_eq!(connector.configured("method"), Some("GET"));
//! assert_eq!(connector.configured("url"), Some("https://example.com"));
//! ```

mod derivation;
mod registry;
mod resolver;

pub use derivation::{
    ConnectorDerivation, FnDerivation, SpecificationDerivation, SpecificationInfo,
    SpecificationSource, StaticSpecifications, TemplateMetadataDerivation, SPECIFICATION_PROPERTY,
};
pub use registry::TemplateRegistry;
pub use resolver::ConnectorGenerator;
