//! Core generation orchestration for vuegen.
//! Builds a request-scoped registry, assigns placeholder values, computes
//! output filenames and resolves the selected templates into a plan of
//! (folder, file name, content) outputs. Writing the plan to disk is the
//! caller's concern.

use crate::error::Result;
use crate::loader::TemplateLoader;
use crate::registry::TemplateRegistry;
use crate::renderer::SubstitutionEngine;
use crate::request::GenerationRequest;
use log::debug;

/// One output file of a generation run.
#[derive(Debug)]
pub struct GeneratedFile {
    pub file_name: String,
    pub content: String,
}

/// Everything a generation run wants written to disk.
///
/// `folder` is the subfolder to create under the working directory, set
/// only when more than one file is produced.
#[derive(Debug)]
pub struct GenerationPlan {
    pub folder: Option<String>,
    pub files: Vec<GeneratedFile>,
}

/// Orchestrates registry setup, selection and substitution for a request.
pub struct Processor<'a> {
    engine: &'a SubstitutionEngine,
    loader: &'a dyn TemplateLoader,
    registry: TemplateRegistry,
}

impl<'a> Processor<'a> {
    pub fn new(engine: &'a SubstitutionEngine, loader: &'a dyn TemplateLoader) -> Self {
        Self {
            engine,
            loader,
            registry: TemplateRegistry::new(),
        }
    }

    /// Produces the generation plan for a request.
    ///
    /// Sequence: assign value placeholders, seed the filename placeholders
    /// with their raw patterns, compute output filenames for every file
    /// template of the requested object type (cross-references in
    /// multi-mode bundles need filenames beyond the selected subset),
    /// then resolve each selected template's content.
    pub fn plan(&mut self, request: &GenerationRequest) -> Result<GenerationPlan> {
        self.registry.set_resolved_value("OBJECT_NAME", request.name.clone());
        self.registry.set_resolved_value("SCRIPT_EXT", request.script_extension.clone());
        self.registry.set_resolved_value("STYLE_FORMAT", request.style_format.clone());

        // Filename placeholders carry their pattern unresolved; the
        // substitution engine expands them transitively at render time.
        let seeds: Vec<(&'static str, &'static str)> = self
            .registry
            .iter()
            .filter(|def| def.source_ref.is_none())
            .filter_map(|def| def.file_name_pattern.map(|pattern| (def.name, pattern)))
            .collect();
        for (name, pattern) in seeds {
            self.registry.set_resolved_value(name, pattern.to_string());
        }

        let patterns: Vec<(&'static str, &'static str)> = self
            .registry
            .file_templates(request.object_type)
            .iter()
            .filter_map(|def| def.file_name_pattern.map(|pattern| (def.name, pattern)))
            .collect();
        for (name, pattern) in patterns {
            let file_name = self.engine.resolve_text(&self.registry, pattern)?;
            debug!("Output filename for '{}': '{}'", name, file_name);
            self.registry.set_output_file_name(name, file_name);
        }

        let selected: Vec<&'static str> = self
            .registry
            .select(request.object_type, request.structure)
            .iter()
            .map(|def| def.name)
            .collect();

        let mut files = Vec::new();
        for name in selected {
            let content = self.engine.resolve(&mut self.registry, self.loader, name)?;
            let file_name = self
                .registry
                .get(name)
                .map(|def| def.output_file_name.clone())
                .unwrap_or_default();
            files.push(GeneratedFile { file_name, content });
        }

        let folder = (files.len() > 1).then(|| request.name.clone());
        Ok(GenerationPlan { folder, files })
    }
}
