//! Integration tests for connector template resolution

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;

use connector_kit::model::{
    ConfigurationProperty, Connector, ConnectorGroup, ConnectorSettings, ConnectorTemplate,
};
use connector_kit::{
    ConnectorDerivation, ConnectorGenerator, DerivationError, FnDerivation, GeneratorError,
    SpecificationDerivation, SpecificationInfo, StaticSpecifications, TemplateRegistry,
    ValidationError,
};

/// Derivation returning fixed values, like a test generator overriding the hooks
struct FixedDerivation;

impl ConnectorDerivation for FixedDerivation {
    fn derive_name(
        &self,
        _template: &ConnectorTemplate,
        _settings: &ConnectorSettings,
    ) -> Result<String, DerivationError> {
        Ok("test-name".to_string())
    }

    fn derive_description(
        &self,
        _template: &ConnectorTemplate,
        _settings: &ConnectorSettings,
    ) -> Result<String, DerivationError> {
        Ok("test-description".to_string())
    }
}

fn template() -> ConnectorTemplate {
    ConnectorTemplate::new("template-id", ConnectorGroup::new("template-group"))
        .put_property("property1", ConfigurationProperty::new())
        .put_property("property2", ConfigurationProperty::new())
}

/// Expected connector for `template()`, with the generated id copied over
fn expected(actual: &Connector, name: &str, description: &str) -> Connector {
    let template = template();
    Connector {
        id: actual.id.clone(),
        template_id: template.id.clone(),
        name: name.to_string(),
        description: description.to_string(),
        tags: Default::default(),
        connector_group: template.connector_group.clone(),
        properties: template.properties.clone(),
        configured_properties: BTreeMap::from([("property2".to_string(), "value2".to_string())]),
    }
}

#[test]
fn test_should_create_base_connectors() {
    let generator = ConnectorGenerator::new(FixedDerivation);
    let settings = ConnectorSettings::new().put_configured_property("property2", "value2");

    let connector = generator
        .resolve(&template(), &settings)
        .expect("Should resolve");

    assert_eq!(connector, expected(&connector, "test-name", "test-description"));
    assert_ne!(connector.id, "template-id");
}

#[test]
fn test_should_create_base_connectors_with_given_name_and_description() {
    let generator = ConnectorGenerator::new(FixedDerivation);
    let settings = ConnectorSettings::new()
        .with_name("given-name")
        .with_description("given-description")
        .put_configured_property("property2", "value2");

    let connector = generator
        .resolve(&template(), &settings)
        .expect("Should resolve");

    assert_eq!(connector, expected(&connector, "given-name", "given-description"));
}

#[test]
fn test_empty_name_falls_back_to_derivation() {
    let generator = ConnectorGenerator::new(FixedDerivation);
    let settings = ConnectorSettings::new().with_name("").with_description("");

    let connector = generator
        .resolve(&template(), &settings)
        .expect("Should resolve");

    assert_eq!(connector.name, "test-name");
    assert_eq!(connector.description, "test-description");
}

#[test]
fn test_settings_override_template_defaults() {
    let template = template()
        .put_property("host", ConfigurationProperty::new().with_default("localhost"))
        .put_property("port", ConfigurationProperty::new().with_default("80"));
    let settings = ConnectorSettings::new().put_configured_property("port", "8080");

    let connector = ConnectorGenerator::new(FixedDerivation)
        .resolve(&template, &settings)
        .expect("Should resolve");

    assert_eq!(connector.configured("host"), Some("localhost"));
    assert_eq!(connector.configured("port"), Some("8080"));
}

#[test]
fn test_unknown_properties_pass_through() {
    let settings = ConnectorSettings::new()
        .put_configured_property("property2", "value2")
        .put_configured_property("undeclared", "kept");

    let connector = ConnectorGenerator::new(FixedDerivation)
        .resolve(&template(), &settings)
        .expect("Should resolve");

    assert_eq!(connector.configured("undeclared"), Some("kept"));
    assert!(!connector.properties.contains("undeclared"));
}

#[test]
fn test_required_default_satisfies_requirement() {
    let template = template().put_property(
        "mode",
        ConfigurationProperty::new()
            .with_required(true)
            .with_default("sync"),
    );

    let connector = ConnectorGenerator::new(FixedDerivation)
        .resolve(&template, &ConnectorSettings::new())
        .expect("Should resolve");

    assert_eq!(connector.configured("mode"), Some("sync"));
}

#[test]
fn test_resolution_is_all_or_nothing() {
    let template = template().put_property("token", ConfigurationProperty::new().with_required(true));

    let result = ConnectorGenerator::new(FixedDerivation).resolve(&template, &ConnectorSettings::new());

    assert_eq!(
        result,
        Err(GeneratorError::Validation(
            ValidationError::MissingRequiredProperty {
                template: "template-id".to_string(),
                key: "token".to_string(),
            }
        ))
    );
}

#[test]
fn test_resolve_does_not_mutate_inputs() {
    let template = template();
    let settings = ConnectorSettings::new().put_configured_property("property2", "value2");
    let (template_before, settings_before) = (template.clone(), settings.clone());

    let generator = ConnectorGenerator::new(FixedDerivation);
    generator.resolve(&template, &settings).expect("Should resolve");
    generator.summarize(&template, &settings).expect("Should summarize");

    assert_eq!(template, template_before);
    assert_eq!(settings, settings_before);
}

#[test]
fn test_summary_matches_resolution() {
    let generator = ConnectorGenerator::new(FixedDerivation);
    let settings = ConnectorSettings::new().put_configured_property("property2", "value2");

    let summary = generator
        .summarize(&template(), &settings)
        .expect("Should summarize");
    let connector = generator
        .resolve(&template(), &settings)
        .expect("Should resolve");

    assert_eq!(summary.name, connector.name);
    assert_eq!(summary.description, connector.description);
    assert_eq!(summary.connector_group, connector.connector_group);
    assert_eq!(summary.property_keys, vec!["property1", "property2"]);
}

#[test]
fn test_resolve_registered_unknown_template() {
    let registry = TemplateRegistry::new();
    let result = ConnectorGenerator::new(FixedDerivation).resolve_registered(
        &registry,
        "missing",
        &ConnectorSettings::new(),
    );

    assert_eq!(
        result,
        Err(GeneratorError::Validation(ValidationError::TemplateNotFound {
            id: "missing".to_string(),
        }))
    );
}

#[test]
fn test_resolve_registered_template() {
    let mut registry = TemplateRegistry::new();
    registry.register(template()).expect("Should register");
    let settings = ConnectorSettings::new().put_configured_property("property2", "value2");

    let connector = ConnectorGenerator::new(FixedDerivation)
        .resolve_registered(&registry, "template-id", &settings)
        .expect("Should resolve");

    assert_eq!(connector.template_id, "template-id");
    assert_eq!(connector.configured("property2"), Some("value2"));
}

#[test]
fn test_specification_backed_connector() {
    let specs = StaticSpecifications::new().with_specification(
        "petstore",
        SpecificationInfo::new("Swagger Petstore").with_description("Sample pet store API"),
    );
    let template = ConnectorTemplate::new("swagger-connector-template", ConnectorGroup::new("swagger"))
        .put_property("specification", ConfigurationProperty::new().with_required(true))
        .put_property("host", ConfigurationProperty::new());
    let settings = ConnectorSettings::new()
        .put_configured_property("specification", "petstore")
        .put_configured_property("host", "petstore.example.com");

    let connector = ConnectorGenerator::new(SpecificationDerivation::new(specs))
        .resolve(&template, &settings)
        .expect("Should resolve");

    assert_eq!(connector.name, "Swagger Petstore");
    assert_eq!(connector.description, "Sample pet store API");
    assert_eq!(connector.configured("host"), Some("petstore.example.com"));
}

#[test]
fn test_derivation_error_message() {
    let generator = ConnectorGenerator::new(FnDerivation::new(
        |_: &ConnectorTemplate, _: &ConnectorSettings| {
            Err(DerivationError::lookup_failed("petstore", "connection refused"))
        },
        |_: &ConnectorTemplate, _: &ConnectorSettings| Ok(String::new()),
    ));

    let err = generator
        .resolve(&template(), &ConnectorSettings::new())
        .expect_err("Derivation should fail");

    insta::assert_snapshot!(
        err.to_string(),
        @"derivation error: specification lookup for 'petstore' failed: connection refused"
    );
}
