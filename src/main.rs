//! Vuegen's main application entry point and filesystem glue.
//! Handles command-line argument parsing, drives the generation plan
//! and writes the resulting files to the working directory.

use std::path::{Path, PathBuf};

use vuegen::{
    cli::{get_args, Args},
    error::{default_error_handler, Error, Result},
    loader::default_loader,
    manifest::detect_script_extension,
    processor::{GenerationPlan, Processor},
    prompt::{DialoguerPrompter, Prompter, DEFAULT_STYLE_FORMAT},
    renderer::{OnMissing, SubstitutionEngine},
    request::{parse_action_and_type, GenerationRequest, ObjectType, StructureMode},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Validates the action and object-type tokens
/// 2. Resolves the script extension from the project manifest
/// 3. Prompts for a stylesheet format on component bundle requests
/// 4. Plans the generation run (selection + substitution)
/// 5. Writes the planned files to the working directory
fn run(args: Args) -> Result<()> {
    let object_type = parse_action_and_type(&args)?;

    let working_dir = std::env::current_dir().map_err(Error::IoError)?;
    let script_extension = detect_script_extension(&working_dir);

    let style_format =
        if object_type == ObjectType::Component && args.structure == StructureMode::Multi {
            DialoguerPrompter::new().select_style_format()?
        } else {
            DEFAULT_STYLE_FORMAT.to_string()
        };

    let request = GenerationRequest::new(
        object_type,
        &args.name,
        args.structure,
        script_extension,
        style_format,
    );

    let engine = SubstitutionEngine::new(OnMissing::Empty);
    let loader = default_loader();
    let mut processor = Processor::new(&engine, &*loader);
    let plan = processor.plan(&request)?;

    write_plan(&working_dir, &request, plan)
}

/// Writes every planned file, creating the bundle subfolder first when
/// one is needed. Files already written are not rolled back when a later
/// write fails.
fn write_plan(working_dir: &Path, request: &GenerationRequest, plan: GenerationPlan) -> Result<()> {
    let target_dir = match &plan.folder {
        Some(folder) => create_output_folder(&working_dir.join(folder))?,
        None => working_dir.to_path_buf(),
    };

    for file in plan.files {
        let path = target_dir.join(&file.file_name);
        std::fs::write(&path, &file.content).map_err(Error::IoError)?;
        println!("{}/{} has been generated successfully.", request.name, file.file_name);
    }

    Ok(())
}

/// Creates the output subfolder; a partially created folder is removed
/// before the failure is propagated.
fn create_output_folder(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return Ok(path.to_path_buf());
    }

    if let Err(err) = std::fs::create_dir(path) {
        let _ = std::fs::remove_dir(path);
        return Err(Error::IoError(err));
    }

    Ok(path.to_path_buf())
}
