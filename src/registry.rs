//! Template registry, definitions and selection for vuegen.
//! The registry is a request-scoped catalog of template definitions in
//! declaration order; selection and substitution both walk it in order.

use crate::request::{ObjectType, StructureMode};
use indexmap::IndexMap;

/// A single registry entry.
///
/// An entry without a `source_ref` is a value placeholder: it is never
/// written to a file and only serves as a substitution source. An entry
/// with a `source_ref` is a file template whose resolved content becomes
/// file output when selected.
#[derive(Debug, Clone)]
pub struct TemplateDefinition {
    /// Unique token, matched literally inside template text.
    pub name: &'static str,
    /// Object type this entry applies to; `None` means any.
    pub object_type: Option<ObjectType>,
    /// Structure mode this entry applies to; `None` means any.
    pub structure: Option<StructureMode>,
    /// Template source file name under the templates directory.
    pub source_ref: Option<&'static str>,
    /// Filename pattern, itself subject to substitution.
    pub file_name_pattern: Option<&'static str>,
    /// Current substitution value, filled per request.
    pub resolved_value: String,
    /// Computed output filename, filled per request.
    pub output_file_name: String,
}

struct CatalogEntry {
    name: &'static str,
    object_type: Option<ObjectType>,
    structure: Option<StructureMode>,
    source_ref: Option<&'static str>,
    file_name_pattern: Option<&'static str>,
}

/// Static template catalog. Declaration order is selection order, and
/// token names are chosen so that no token is a substring of another.
const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "OBJECT_NAME",
        object_type: None,
        structure: None,
        source_ref: None,
        file_name_pattern: None,
    },
    CatalogEntry {
        name: "SCRIPT_EXT",
        object_type: None,
        structure: None,
        source_ref: None,
        file_name_pattern: None,
    },
    CatalogEntry {
        name: "STYLE_FORMAT",
        object_type: None,
        structure: None,
        source_ref: None,
        file_name_pattern: None,
    },
    CatalogEntry {
        name: "COMPONENT_FILE",
        object_type: None,
        structure: None,
        source_ref: None,
        file_name_pattern: Some("OBJECT_NAME.vue"),
    },
    CatalogEntry {
        name: "TEMPLATE_FILE",
        object_type: None,
        structure: None,
        source_ref: None,
        file_name_pattern: Some("OBJECT_NAME.template.html"),
    },
    CatalogEntry {
        name: "SCRIPT_FILE",
        object_type: None,
        structure: None,
        source_ref: None,
        file_name_pattern: Some("OBJECT_NAME.script.SCRIPT_EXT"),
    },
    CatalogEntry {
        name: "STYLE_FILE",
        object_type: None,
        structure: None,
        source_ref: None,
        file_name_pattern: Some("OBJECT_NAME.style.STYLE_FORMAT"),
    },
    CatalogEntry {
        name: "COMPONENT_VUE",
        object_type: Some(ObjectType::Component),
        structure: Some(StructureMode::Multi),
        source_ref: Some("component.vue.tmpl"),
        file_name_pattern: Some("COMPONENT_FILE"),
    },
    CatalogEntry {
        name: "COMPONENT_HTML",
        object_type: Some(ObjectType::Component),
        structure: Some(StructureMode::Multi),
        source_ref: Some("component.html.tmpl"),
        file_name_pattern: Some("TEMPLATE_FILE"),
    },
    CatalogEntry {
        name: "COMPONENT_SCRIPT",
        object_type: Some(ObjectType::Component),
        structure: Some(StructureMode::Multi),
        source_ref: Some("component.script.tmpl"),
        file_name_pattern: Some("SCRIPT_FILE"),
    },
    CatalogEntry {
        name: "COMPONENT_STYLE",
        object_type: Some(ObjectType::Component),
        structure: Some(StructureMode::Multi),
        source_ref: Some("component.style.tmpl"),
        file_name_pattern: Some("STYLE_FILE"),
    },
    CatalogEntry {
        name: "COMPONENT_SINGLE",
        object_type: Some(ObjectType::Component),
        structure: Some(StructureMode::Single),
        source_ref: Some("component.single.tmpl"),
        file_name_pattern: Some("COMPONENT_FILE"),
    },
    CatalogEntry {
        name: "INTERFACE_SCRIPT",
        object_type: Some(ObjectType::Interface),
        structure: None,
        source_ref: Some("interface.tmpl"),
        file_name_pattern: Some("OBJECT_NAME.SCRIPT_EXT"),
    },
    CatalogEntry {
        name: "MODEL_SCRIPT",
        object_type: Some(ObjectType::Model),
        structure: None,
        source_ref: Some("model.tmpl"),
        file_name_pattern: Some("OBJECT_NAME.SCRIPT_EXT"),
    },
    CatalogEntry {
        name: "SERVICE_SCRIPT",
        object_type: Some(ObjectType::Service),
        structure: None,
        source_ref: Some("service.tmpl"),
        file_name_pattern: Some("OBJECT_NAME.service.SCRIPT_EXT"),
    },
];

/// Request-scoped template registry.
///
/// Built fresh per invocation so resolved values and computed filenames
/// never leak across requests.
#[derive(Debug)]
pub struct TemplateRegistry {
    entries: IndexMap<&'static str, TemplateDefinition>,
}

impl TemplateRegistry {
    /// Builds a registry from the static catalog with empty computed fields.
    pub fn new() -> Self {
        let entries = CATALOG
            .iter()
            .map(|entry| {
                (
                    entry.name,
                    TemplateDefinition {
                        name: entry.name,
                        object_type: entry.object_type,
                        structure: entry.structure,
                        source_ref: entry.source_ref,
                        file_name_pattern: entry.file_name_pattern,
                        resolved_value: String::new(),
                        output_file_name: String::new(),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Looks up a definition by token name.
    pub fn get(&self, name: &str) -> Option<&TemplateDefinition> {
        self.entries.get(name)
    }

    /// Iterates over all definitions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &TemplateDefinition> {
        self.entries.values()
    }

    /// Filters the registry to the file templates applicable to a request.
    ///
    /// Object type matches exactly (value placeholders are excluded);
    /// structure matches exactly or is declared for any mode. Order is
    /// declaration order and stable across calls.
    pub fn select(
        &self,
        object_type: ObjectType,
        structure: StructureMode,
    ) -> Vec<&TemplateDefinition> {
        self.entries
            .values()
            .filter(|def| {
                def.source_ref.is_some()
                    && def.object_type == Some(object_type)
                    && def.structure.map_or(true, |mode| mode == structure)
            })
            .collect()
    }

    /// All file templates declared for an object type, regardless of
    /// structure mode. Used for filename computation, since cross-file
    /// references in multi-mode bundles need every filename available.
    pub fn file_templates(&self, object_type: ObjectType) -> Vec<&TemplateDefinition> {
        self.entries
            .values()
            .filter(|def| def.source_ref.is_some() && def.object_type == Some(object_type))
            .collect()
    }

    /// Overwrites an entry's resolved value. No-op when the name is
    /// unknown; partial registries are not an error.
    pub fn set_resolved_value(&mut self, name: &str, value: String) {
        if let Some(def) = self.entries.get_mut(name) {
            def.resolved_value = value;
        }
    }

    /// Overwrites an entry's computed output filename. No-op when the
    /// name is unknown.
    pub fn set_output_file_name(&mut self, name: &str, value: String) {
        if let Some(def) = self.entries.get_mut(name) {
            def.output_file_name = value;
        }
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        TemplateRegistry::new()
    }
}
