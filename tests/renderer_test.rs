use vuegen::error::Error;
use vuegen::loader::EmbeddedLoader;
use vuegen::registry::TemplateRegistry;
use vuegen::renderer::{OnMissing, SubstitutionEngine};

fn prepared_registry() -> TemplateRegistry {
    let mut registry = TemplateRegistry::new();
    registry.set_resolved_value("OBJECT_NAME", "my-widget".to_string());
    registry.set_resolved_value("SCRIPT_EXT", "ts".to_string());
    registry.set_resolved_value("STYLE_FORMAT", "scss".to_string());
    registry
}

#[test]
fn test_resolve_text_replaces_all_occurrences() {
    let registry = prepared_registry();
    let engine = SubstitutionEngine::default();

    let result = engine
        .resolve_text(&registry, "/* OBJECT_NAME */ class OBJECT_NAME {}")
        .unwrap();
    assert_eq!(result, "/* my-widget */ class my-widget {}");
}

#[test]
fn test_resolve_text_is_idempotent_on_resolved_text() {
    let registry = prepared_registry();
    let engine = SubstitutionEngine::default();

    let text = "nothing to see here";
    assert_eq!(engine.resolve_text(&registry, text).unwrap(), text);
}

#[test]
fn test_resolve_text_is_transitive() {
    let mut registry = prepared_registry();
    // SCRIPT_FILE's value itself contains further tokens.
    registry.set_resolved_value("SCRIPT_FILE", "OBJECT_NAME.script.SCRIPT_EXT".to_string());
    let engine = SubstitutionEngine::default();

    let result = engine
        .resolve_text(&registry, r#"<script src="./SCRIPT_FILE"></script>"#)
        .unwrap();
    assert_eq!(result, r#"<script src="./my-widget.script.ts"></script>"#);
    assert!(!result.contains("SCRIPT_FILE"));
    assert!(!result.contains("OBJECT_NAME"));
}

#[test]
fn test_cyclic_registry_is_an_error() {
    let mut registry = TemplateRegistry::new();
    registry.set_resolved_value("OBJECT_NAME", "SCRIPT_EXT".to_string());
    registry.set_resolved_value("SCRIPT_EXT", "OBJECT_NAME".to_string());
    let engine = SubstitutionEngine::default();

    match engine.resolve_text(&registry, "OBJECT_NAME") {
        Err(Error::CyclicTemplateError { .. }) => (),
        other => panic!("Expected CyclicTemplateError, got {:?}", other),
    }
}

#[test]
fn test_resolve_loads_and_stores_result() {
    let mut registry = prepared_registry();
    let engine = SubstitutionEngine::default();
    let loader = EmbeddedLoader::new();

    let content = engine.resolve(&mut registry, &loader, "INTERFACE_SCRIPT").unwrap();
    assert!(content.contains("export interface my-widget"));
    assert_eq!(registry.get("INTERFACE_SCRIPT").unwrap().resolved_value, content);
}

#[test]
fn test_resolve_value_placeholder_skips_loader() {
    let mut registry = prepared_registry();
    let engine = SubstitutionEngine::default();
    let loader = EmbeddedLoader::new();

    let value = engine.resolve(&mut registry, &loader, "OBJECT_NAME").unwrap();
    assert_eq!(value, "my-widget");
}

#[test]
fn test_missing_template_resolves_to_empty_by_default() {
    let mut registry = prepared_registry();
    let engine = SubstitutionEngine::new(OnMissing::Empty);
    let loader = EmbeddedLoader::new();

    let value = engine.resolve(&mut registry, &loader, "NO_SUCH_TEMPLATE").unwrap();
    assert_eq!(value, "");
}

#[test]
fn test_missing_template_can_be_a_hard_error() {
    let mut registry = prepared_registry();
    let engine = SubstitutionEngine::new(OnMissing::Error);
    let loader = EmbeddedLoader::new();

    match engine.resolve(&mut registry, &loader, "NO_SUCH_TEMPLATE") {
        Err(Error::TemplateError(_)) => (),
        other => panic!("Expected TemplateError, got {:?}", other),
    }
}
