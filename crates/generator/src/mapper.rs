//! Mongo mapper scaffold generation

use crate::templates::{self, MAPPER_TEMPLATE};
use gtool_common::{GeneratorError, MapperDefinition, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tera::Tera;

const MAPPER_FILE: &str = "mapper.go";

/// Mapper scaffold generator
///
/// Writes `biz/infra/mapper/<name>/mapper.go` under a project root.
pub struct MapperGenerator {
    mapper_def: MapperDefinition,
    tera: Tera,
}

impl MapperGenerator {
    /// Create a new generator from a MapperDefinition
    pub fn new(mapper_def: MapperDefinition) -> Result<Self> {
        let tera = templates::load_templates()?;
        Ok(Self { mapper_def, tera })
    }

    /// Directory the scaffold lands in, relative to the project root
    pub fn relative_dir(&self) -> PathBuf {
        ["biz", "infra", "mapper", self.mapper_def.package_name.as_str()]
            .iter()
            .collect()
    }

    /// Render the Go source text
    pub fn render(&self) -> Result<String> {
        let mut context = tera::Context::new();
        context.insert("mapper", &self.mapper_def);
        templates::render(&self.tera, MAPPER_TEMPLATE, &context)
    }

    /// Generate the scaffold under `project_root` and return the file path
    ///
    /// An existing mapper file is overwritten.
    pub fn generate_to_directory(&self, project_root: &Path) -> Result<PathBuf> {
        let dir = project_root.join(self.relative_dir());
        fs::create_dir_all(&dir).map_err(|e| {
            GeneratorError::Generation(format!(
                "Failed to create mapper directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        let rendered = self.render()?;
        let output_path = dir.join(MAPPER_FILE);
        fs::write(&output_path, rendered).map_err(|e| {
            GeneratorError::Generation(format!(
                "Failed to write {}: {}",
                output_path.display(),
                e
            ))
        })?;

        Ok(output_path)
    }
}
