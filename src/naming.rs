//! Object name normalization for vuegen.
//! Guarantees that a component name reads as a multi-word identifier
//! regardless of how the user typed it. Other object types pass through.

use crate::request::ObjectType;
use regex::Regex;
use std::sync::LazyLock;

/// Two or more consecutive capitalized word segments, e.g. "MyWidget".
static MULTI_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z][a-z]*[0-9]*){2,}").unwrap());

/// Normalizes a raw user-supplied identifier into a valid object name.
///
/// Component names must read as multi-word identifiers:
/// * already camel-case or hyphenated names are returned unchanged
/// * a capitalized single word gets the object-type word appended ("Foo" -> "FooComponent")
/// * a name with a non-leading capital gets its first letter capitalized ("fooBar" -> "FooBar")
/// * an all-lowercase word gets a hyphenated suffix ("widget" -> "widget-component")
///
/// Never fails; non-component types are returned unchanged.
pub fn format_object_name(raw: &str, object_type: ObjectType) -> String {
    if object_type != ObjectType::Component {
        return raw.to_string();
    }

    if MULTI_WORD.is_match(raw) || raw.contains('-') {
        raw.to_string()
    } else if raw.starts_with(|c: char| c.is_ascii_uppercase()) {
        format!("{}{}", raw, capitalize(object_type.word()))
    } else if raw.chars().any(|c| c.is_ascii_uppercase()) {
        capitalize(raw)
    } else {
        format!("{}-{}", raw, object_type.word())
    }
}

/// Capitalizes the first letter of a word.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
