//! Template loading and management

use gtool_common::{GeneratorError, Result};
use tera::Tera;

/// Template name of the proto service definition
pub const SERVICE_TEMPLATE: &str = "service.proto";

/// Template name of the mongo mapper scaffold
pub const MAPPER_TEMPLATE: &str = "mapper.go";

/// Load all templates
pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();

    tera.add_raw_template(
        SERVICE_TEMPLATE,
        include_str!("../templates/service.proto.tera"),
    )
    .map_err(|e| {
        GeneratorError::Generation(format!("Failed to load service.proto template: {}", e))
    })?;

    tera.add_raw_template(MAPPER_TEMPLATE, include_str!("../templates/mapper.go.tera"))
        .map_err(|e| {
            GeneratorError::Generation(format!("Failed to load mapper.go template: {}", e))
        })?;

    Ok(tera)
}

/// Render a loaded template, mapping tera errors into `GeneratorError`
pub fn render(tera: &Tera, name: &str, context: &tera::Context) -> Result<String> {
    tera.render(name, context)
        .map_err(|e| GeneratorError::Generation(format!("Template error in {}: {:?}", name, e)))
}
