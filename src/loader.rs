//! Template source loading for vuegen.
//! Raw template text lives in a `templates/` directory next to the
//! installed executable; copies embedded at compile time keep the binary
//! usable when that directory is absent.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::PathBuf;

/// Name of the template directory colocated with the executable.
pub const TEMPLATES_DIR: &str = "templates";

/// Template sources compiled into the binary.
const EMBEDDED: &[(&str, &str)] = &[
    ("component.vue.tmpl", include_str!("../templates/component.vue.tmpl")),
    ("component.html.tmpl", include_str!("../templates/component.html.tmpl")),
    ("component.script.tmpl", include_str!("../templates/component.script.tmpl")),
    ("component.style.tmpl", include_str!("../templates/component.style.tmpl")),
    ("component.single.tmpl", include_str!("../templates/component.single.tmpl")),
    ("interface.tmpl", include_str!("../templates/interface.tmpl")),
    ("model.tmpl", include_str!("../templates/model.tmpl")),
    ("service.tmpl", include_str!("../templates/service.tmpl")),
];

/// Trait for loading raw template text by source reference.
pub trait TemplateLoader {
    /// Loads the raw text for a template source file name.
    ///
    /// # Errors
    /// * `Error::TemplateError` if the source is unknown or unreadable
    fn load(&self, source_ref: &str) -> Result<String>;
}

/// Loader reading template sources from a directory on disk.
pub struct FileSystemLoader {
    root: PathBuf,
}

impl FileSystemLoader {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl TemplateLoader for FileSystemLoader {
    fn load(&self, source_ref: &str) -> Result<String> {
        let path = self.root.join(source_ref);
        debug!("Loading template source '{}'", path.display());
        fs::read_to_string(&path).map_err(|err| {
            Error::TemplateError(format!(
                "cannot read template source '{}': {}",
                path.display(),
                err
            ))
        })
    }
}

/// Loader serving the template sources embedded at compile time.
pub struct EmbeddedLoader;

impl EmbeddedLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmbeddedLoader {
    fn default() -> Self {
        EmbeddedLoader::new()
    }
}

impl TemplateLoader for EmbeddedLoader {
    fn load(&self, source_ref: &str) -> Result<String> {
        EMBEDDED
            .iter()
            .find(|(name, _)| *name == source_ref)
            .map(|(_, text)| text.to_string())
            .ok_or_else(|| {
                Error::TemplateError(format!("unknown template source '{}'", source_ref))
            })
    }
}

/// Returns the template loader for this installation: the `templates/`
/// directory next to the executable when it exists, the embedded copies
/// otherwise.
pub fn default_loader() -> Box<dyn TemplateLoader> {
    let install_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()));

    if let Some(dir) = install_dir {
        let templates_dir = dir.join(TEMPLATES_DIR);
        if templates_dir.is_dir() {
            debug!("Using template directory '{}'", templates_dir.display());
            return Box::new(FileSystemLoader::new(templates_dir));
        }
    }

    debug!("Using embedded template sources");
    Box::new(EmbeddedLoader::new())
}
