//! Generation request model for vuegen.
//! Validates the raw action and type tokens from the command line and
//! carries the resolved inputs for a single invocation.

use crate::cli::Args;
use crate::error::{Error, Result};
use crate::naming::format_object_name;

/// Category of artifact being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Component,
    Interface,
    Model,
    Service,
}

impl ObjectType {
    /// Lowercase word used in formatted names and usage messages.
    pub fn word(&self) -> &'static str {
        match self {
            ObjectType::Component => "component",
            ObjectType::Interface => "interface",
            ObjectType::Model => "model",
            ObjectType::Service => "service",
        }
    }

    /// Single-letter abbreviation accepted on the command line.
    pub fn letter(&self) -> &'static str {
        match self {
            ObjectType::Component => "c",
            ObjectType::Interface => "i",
            ObjectType::Model => "m",
            ObjectType::Service => "s",
        }
    }

    /// All object types, in usage-message order.
    pub const ALL: [ObjectType; 4] = [
        ObjectType::Component,
        ObjectType::Interface,
        ObjectType::Model,
        ObjectType::Service,
    ];
}

/// Whether a generated object occupies one file or several cooperating files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StructureMode {
    Single,
    Multi,
}

/// Resolved inputs for a single generation run.
///
/// Constructed once per invocation; the name is formatted in the
/// constructor and immutable afterwards.
#[derive(Debug)]
pub struct GenerationRequest {
    pub object_type: ObjectType,
    pub raw_name: String,
    pub name: String,
    pub structure: StructureMode,
    pub script_extension: String,
    pub style_format: String,
}

impl GenerationRequest {
    pub fn new(
        object_type: ObjectType,
        raw_name: &str,
        structure: StructureMode,
        script_extension: String,
        style_format: String,
    ) -> Self {
        let name = format_object_name(raw_name, object_type);
        Self {
            object_type,
            raw_name: raw_name.to_string(),
            name,
            structure,
            script_extension,
            style_format,
        }
    }
}

/// Validates the action and type tokens of parsed arguments.
///
/// Abbreviations ('g' and the single-letter type codes) are accepted only
/// when both tokens are exactly one character long.
///
/// # Errors
/// * `Error::UsageError` for an unrecognized action or object type
pub fn parse_action_and_type(args: &Args) -> Result<ObjectType> {
    let use_abbreviations = args.action.len() == 1 && args.object_type.len() == 1;

    if args.action != "generate" && !(use_abbreviations && args.action == "g") {
        return Err(Error::UsageError(
            "Improper parameters specified. First parameter can be either 'generate' or 'g'."
                .to_string(),
        ));
    }

    let object_type = ObjectType::ALL.iter().copied().find(|t| {
        args.object_type == t.word()
            || (use_abbreviations && args.object_type == t.letter())
    });

    object_type.ok_or_else(|| {
        let options = ObjectType::ALL
            .iter()
            .map(|t| format!("{} (or '{}')", t.letter(), t.word()))
            .collect::<Vec<_>>()
            .join(", ");
        Error::UsageError(format!(
            "Improper parameters specified. Options for second parameter are: [{}].",
            options
        ))
    })
}
