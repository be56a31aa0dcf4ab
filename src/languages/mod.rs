//! Built-in language grammars.
//!
//! Grammars are data: compositions of the engine's combinators, registered
//! by name during startup. Nothing in here is engine logic, so a consumer
//! crate could define its own languages the same way.

pub mod c;
pub mod javascript;
pub mod python;
pub mod xml;

use std::path::Path;

use phf::{Map, phf_map};

use crate::scope::ScopeRegistry;

static SCOPE_BY_EXTENSION: Map<&'static str, &'static str> = phf_map! {
    "c" => "c",
    "h" => "c",
    "js" => "javascript",
    "mjs" => "javascript",
    "py" => "python",
    "xml" => "xml",
    "svg" => "xml",
};

/// Register every built-in language.
pub fn register_all(registry: &mut ScopeRegistry) {
    c::register(registry);
    javascript::register(registry);
    python::register(registry);
    xml::register(registry);
}

/// Scope name for a file path, by extension.
pub fn scope_for_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?;
    SCOPE_BY_EXTENSION.get(extension).copied()
}
