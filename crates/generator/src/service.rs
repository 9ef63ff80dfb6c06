//! Proto service definition synthesis

use crate::templates::{self, SERVICE_TEMPLATE};
use gtool_common::{
    GeneratorError, MessageSet, Method, Result, ServiceDefinition, FALLBACK_RESPONSE,
    REQUEST_SUFFIX, RESPONSE_SUFFIX,
};
use std::fs;
use std::path::Path;
use tera::Tera;

/// Pair request messages with their responses by naming convention
///
/// Every `<Base>Req` message becomes a method `<Base>`. Its response is
/// `<Base>Resp` when that message was declared, `basic.Response` otherwise.
/// Scan order is kept.
pub fn synthesize_methods(messages: &MessageSet) -> Vec<Method> {
    messages
        .messages()
        .iter()
        .filter_map(|message| {
            let base = message.name.strip_suffix(REQUEST_SUFFIX)?;
            let paired = format!("{}{}", base, RESPONSE_SUFFIX);
            let response = if messages.contains(&paired) {
                paired
            } else {
                FALLBACK_RESPONSE.to_string()
            };

            Some(Method {
                name: base.to_string(),
                request: message.name.clone(),
                response,
            })
        })
        .collect()
}

/// Service definition generator
///
/// Renders a [`ServiceDefinition`] into proto source.
pub struct ServiceGenerator {
    service_def: ServiceDefinition,
    tera: Tera,
}

impl ServiceGenerator {
    /// Create a new generator from a ServiceDefinition
    pub fn new(service_def: ServiceDefinition) -> Result<Self> {
        let tera = templates::load_templates()?;
        Ok(Self { service_def, tera })
    }

    /// Build the definition from scanned messages and create a generator
    pub fn from_messages(service_name: &str, messages: &MessageSet) -> Result<Self> {
        Self::new(ServiceDefinition::new(
            service_name,
            synthesize_methods(messages),
        ))
    }

    pub fn service_def(&self) -> &ServiceDefinition {
        &self.service_def
    }

    /// Render the proto source text
    pub fn render(&self) -> Result<String> {
        let mut context = tera::Context::new();
        context.insert("service", &self.service_def);
        templates::render(&self.tera, SERVICE_TEMPLATE, &context)
    }

    /// Render and write to `output_path`, replacing any existing content
    pub fn generate_to_file(&self, output_path: &Path) -> Result<()> {
        let rendered = self.render()?;
        fs::write(output_path, rendered).map_err(|e| {
            GeneratorError::Generation(format!(
                "Failed to write {}: {}",
                output_path.display(),
                e
            ))
        })
    }
}
