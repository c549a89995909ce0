//! Connector Kit - connector template resolution and tag aggregation
//!
//! This library resolves reusable connector templates into concrete connectors
//! and aggregates tags across listings of different entity kinds.
//!
//! # Example
//!
//! ```rust
//! use connector_kit::model::{ConfigurationProperty, ConnectorGroup, ConnectorSettings, ConnectorTemplate};
//! use connector_kit::{ConnectorGenerator, TemplateMetadataDerivation};
//!
//! let template = ConnectorTemplate::new("template-id", ConnectorGroup::new("template-group"))
//!     .put_property("property1", ConfigurationProperty::new())
//!     .put_property("property2", ConfigurationProperty::new());
//! let settings = ConnectorSettings::new()
//!     .with_name("given-name")
//!     .put_configured_property("property2", "value2");
//!
//! let connector = ConnectorGenerator::new(TemplateMetadataDerivation)
//!     .resolve(&template, &settings)
//!     .unwrap();
//!
//! assert_eq!(connector.name, "given-name");
//! assert_ne!(connector.id, template.id);
//! ```

pub mod catalog;
pub mod error;
pub mod model;
pub mod tags;
pub mod template;

pub use catalog::{to_toml, CatalogError, TagListing};
pub use error::{DerivationError, GeneratorError, ValidationError};
pub use tags::TagFinder;
pub use template::{
    ConnectorDerivation, ConnectorGenerator, FnDerivation, SpecificationDerivation,
    SpecificationInfo, SpecificationSource, StaticSpecifications, TemplateMetadataDerivation,
    TemplateRegistry,
};
