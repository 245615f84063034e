//! Vuegen is a scaffolding generator for Vue projects.
//! Given an object type and a name it renders one or more source files from
//! a fixed template catalog and writes them to the working directory.

/// Command-line interface module for the vuegen application
pub mod cli;

/// Error types and handling for the vuegen application
pub mod error;

/// Template source loading from the installation directory or embedded copies
pub mod loader;

/// Project manifest probe used to pick the script file extension
pub mod manifest;

/// Object name normalization rules
pub mod naming;

/// Core generation orchestration
/// Combines all components to produce the final output plan
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Template registry, definitions and selection
pub mod registry;

/// Placeholder substitution engine
pub mod renderer;

/// Generation request model and argument validation
pub mod request;
