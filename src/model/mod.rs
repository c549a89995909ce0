//! Value types shared by the resolver and the tag finder

mod connector;
mod listing;
mod property;

pub use connector::{Connector, ConnectorGroup, ConnectorSettings, ConnectorSummary, ConnectorTemplate};
pub use listing::{Connection, Integration, ListResult, WithTags};
pub use property::{ConfigurationProperty, PropertySchema, DEFAULT_PROPERTY_KIND};
