//! Command-line interface implementation for vuegen.
//! Provides argument parsing and help text formatting using clap.

use crate::request::StructureMode;
use clap::{error::ErrorKind, CommandFactory, Parser};

/// Command-line arguments structure for vuegen.
#[derive(Parser, Debug)]
#[command(author, version, about = "Vuegen: Vue object scaffolding tool", long_about = None)]
pub struct Args {
    /// Action to perform: 'generate' (or 'g')
    #[arg(value_name = "ACTION")]
    pub action: String,

    /// Object type to generate: component, interface, model or service
    /// (single-letter codes are accepted when the action is also abbreviated)
    #[arg(value_name = "TYPE")]
    pub object_type: String,

    /// Name of the object to generate
    #[arg(value_name = "NAME")]
    pub name: String,

    /// File structure mode: one file or a cooperating bundle
    #[arg(long = "f", value_enum, value_name = "MODE", default_value_t = StructureMode::Single)]
    pub structure: StructureMode,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
