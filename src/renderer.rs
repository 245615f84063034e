//! Placeholder substitution engine for vuegen.
//! Performs exhaustive recursive token replacement over registry values,
//! with an explicit pass cap instead of silent non-termination.

use crate::error::{Error, Result};
use crate::loader::TemplateLoader;
use crate::registry::TemplateRegistry;
use log::{debug, warn};

/// Upper bound on full-registry substitution passes. A well-formed
/// catalog converges in a handful of passes; hitting the cap means the
/// registry contains a token cycle.
const MAX_PASSES: usize = 32;

/// Policy for a template name or source file that cannot be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnMissing {
    /// Resolve to an empty string and log a warning.
    Empty,
    /// Fail the run with a template error.
    Error,
}

/// Engine that resolves template text against the registry's current
/// placeholder values.
pub struct SubstitutionEngine {
    on_missing: OnMissing,
}

impl SubstitutionEngine {
    pub fn new(on_missing: OnMissing) -> Self {
        Self { on_missing }
    }

    /// Replaces every registry token occurring in `text` with its current
    /// resolved value, re-scanning the whole result until a full registry
    /// pass finds no remaining tokens. Replacement values may themselves
    /// contain further tokens; those are picked up by later passes, so
    /// the final output is order-independent for acyclic registries.
    /// Text containing no tokens is returned unchanged.
    ///
    /// # Errors
    /// * `Error::CyclicTemplateError` if the pass cap is exceeded
    pub fn resolve_text(&self, registry: &TemplateRegistry, text: &str) -> Result<String> {
        let mut current = text.to_string();
        for _ in 0..MAX_PASSES {
            let mut changed = false;
            for def in registry.iter() {
                if current.contains(def.name) {
                    current = current.replace(def.name, &def.resolved_value);
                    changed = true;
                }
            }
            if !changed {
                return Ok(current);
            }
        }
        Err(Error::CyclicTemplateError {
            template: text.to_string(),
        })
    }

    /// Resolves the named template: loads its raw text through the
    /// loader, substitutes exhaustively, stores the result back into the
    /// registry entry and returns it. Value placeholders resolve to their
    /// current value without touching the loader.
    ///
    /// An unknown name or an unloadable source is handled per the
    /// configured `OnMissing` policy.
    pub fn resolve(
        &self,
        registry: &mut TemplateRegistry,
        loader: &dyn TemplateLoader,
        name: &str,
    ) -> Result<String> {
        let (source_ref, resolved_value) = match registry.get(name) {
            Some(def) => (def.source_ref, def.resolved_value.clone()),
            None => return self.missing(&format!("unknown template '{}'", name)),
        };

        let source_ref = match source_ref {
            Some(source_ref) => source_ref,
            // Value placeholder: nothing to load.
            None => return Ok(resolved_value),
        };

        let raw = match loader.load(source_ref) {
            Ok(raw) => raw,
            Err(err) => return self.missing(&err.to_string()),
        };

        debug!("Resolving template '{}' from '{}'", name, source_ref);
        let resolved = self.resolve_text(registry, &raw)?;
        registry.set_resolved_value(name, resolved.clone());
        Ok(resolved)
    }

    fn missing(&self, reason: &str) -> Result<String> {
        match self.on_missing {
            OnMissing::Empty => {
                warn!("{}; resolving to an empty string", reason);
                Ok(String::new())
            }
            OnMissing::Error => Err(Error::TemplateError(reason.to_string())),
        }
    }
}

impl Default for SubstitutionEngine {
    fn default() -> Self {
        SubstitutionEngine::new(OnMissing::Empty)
    }
}
