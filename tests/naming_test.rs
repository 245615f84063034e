use vuegen::naming::{capitalize, format_object_name};
use vuegen::request::ObjectType;

#[test]
fn test_hyphenated_name_unchanged() {
    assert_eq!(
        format_object_name("my-component", ObjectType::Component),
        "my-component"
    );
}

#[test]
fn test_camel_case_name_unchanged() {
    assert_eq!(format_object_name("MyWidget", ObjectType::Component), "MyWidget");
    assert_eq!(format_object_name("MyWidget2Go", ObjectType::Component), "MyWidget2Go");
}

#[test]
fn test_capitalized_single_word_gets_type_suffix() {
    assert_eq!(format_object_name("Foo", ObjectType::Component), "FooComponent");
}

#[test]
fn test_inner_capital_gets_leading_capital() {
    assert_eq!(format_object_name("fooBar", ObjectType::Component), "FooBar");
}

#[test]
fn test_all_lowercase_gets_hyphenated_suffix() {
    assert_eq!(
        format_object_name("widget", ObjectType::Component),
        "widget-component"
    );
}

#[test]
fn test_non_component_types_pass_through() {
    assert_eq!(format_object_name("anything", ObjectType::Interface), "anything");
    assert_eq!(format_object_name("user", ObjectType::Model), "user");
    assert_eq!(format_object_name("Foo", ObjectType::Service), "Foo");
}

#[test]
fn test_capitalize() {
    assert_eq!(capitalize("component"), "Component");
    assert_eq!(capitalize(""), "");
}
