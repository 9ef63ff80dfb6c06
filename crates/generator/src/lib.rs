//! Scaffolding generation for xh-polaris projects
//!
//! This crate turns scanned inputs into source files:
//! - a proto service definition pairing `*Req` / `*Resp` messages
//! - a go-zero mongo mapper skeleton

mod mapper;
mod service;
mod templates;

pub use mapper::MapperGenerator;
pub use service::{synthesize_methods, ServiceGenerator};

use gtool_common::{MapperDefinition, MessageSet, Result, ServiceDefinition};
use std::path::{Path, PathBuf};

/// Synthesize and write a service definition (convenience function)
pub fn generate_service(
    service_name: &str,
    messages: &MessageSet,
    output_path: &Path,
) -> Result<ServiceDefinition> {
    let generator = ServiceGenerator::from_messages(service_name, messages)?;
    generator.generate_to_file(output_path)?;
    Ok(generator.service_def().clone())
}

/// Generate a mapper scaffold under `project_root` (convenience function)
pub fn generate_mapper(mapper_def: MapperDefinition, project_root: &Path) -> Result<PathBuf> {
    let generator = MapperGenerator::new(mapper_def)?;
    generator.generate_to_directory(project_root)
}
