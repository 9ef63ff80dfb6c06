//! Go module manifest (`go.mod`) reader

use gtool_common::{GeneratorError, Result};
use std::fs;
use std::path::Path;

const MODULE_PREFIX: &str = "module ";

/// Read the module path declared in a go.mod file
pub fn read_go_module<P: AsRef<Path>>(path: P) -> Result<String> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        GeneratorError::Parse(format!(
            "Failed to read manifest {}: {}",
            path.as_ref().display(),
            e
        ))
    })?;

    parse_go_module(&content).ok_or_else(|| {
        GeneratorError::Parse(format!(
            "No module declaration found in {}",
            path.as_ref().display()
        ))
    })
}

/// Extract the module path from go.mod content
///
/// Only the first line starting with `module ` counts; indented lines do not.
///
/// ```
/// use gtool_parser::parse_go_module;
///
/// let content = "module example.com/proj\n\ngo 1.22\n";
/// assert_eq!(parse_go_module(content), Some("example.com/proj".to_string()));
/// ```
pub fn parse_go_module(content: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| line.strip_prefix(MODULE_PREFIX))
        .map(|module| module.trim().to_string())
}
