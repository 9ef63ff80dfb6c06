//! Common types and utilities for gtool
//!
//! This crate contains shared data structures, error types, naming helpers
//! and configuration used across the parser, generator, and CLI components.

pub mod config;
pub mod naming;

pub use config::{MapperConfig, ServiceGenConfig};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Suffix marking a message as a request type
pub const REQUEST_SUFFIX: &str = "Req";

/// Suffix marking a message as a response type
pub const RESPONSE_SUFFIX: &str = "Resp";

/// Response type used when no `<base>Resp` message was declared
pub const FALLBACK_RESPONSE: &str = "basic.Response";

/// Errors that can occur during scanning and generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// A proto message, identified only by its name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    pub name: String,
}

impl Message {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Messages discovered in one proto file
///
/// Keeps declaration order (duplicates included) alongside a set used for
/// existence lookups during request/response pairing.
#[derive(Debug, Clone, Default)]
pub struct MessageSet {
    messages: Vec<Message>,
    seen: HashSet<Message>,
}

impl MessageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message, keeping duplicates in order
    pub fn push(&mut self, message: Message) {
        self.seen.insert(message.clone());
        self.messages.push(message);
    }

    /// Whether a message with this name was declared
    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(&Message::new(name))
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl FromIterator<Message> for MessageSet {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        let mut set = MessageSet::new();
        for message in iter {
            set.push(message);
        }
        set
    }
}

/// One synthesized RPC method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub request: String,
    pub response: String,
}

/// Render context for a proto service definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    /// Lower-cased service name, used as `go_package`
    pub package_name: String,

    /// Title-cased service name, used as the `service` identifier
    pub type_name: String,

    /// Methods in scan order
    pub methods: Vec<Method>,
}

impl ServiceDefinition {
    pub fn new(service_name: &str, methods: Vec<Method>) -> Self {
        Self {
            package_name: naming::package_name(service_name),
            type_name: naming::title_case(service_name),
            methods,
        }
    }
}

/// Render context for a mongo mapper scaffold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperDefinition {
    /// snake_case name; doubles as the Go package and directory name
    pub package_name: String,

    /// Go module path from the project's go.mod
    pub module: String,

    /// Mongo collection name
    pub collection: String,

    /// CamelCase form used in the constructor name
    pub type_name: String,
}

impl MapperDefinition {
    /// `name` must be snake_case: `[a-z0-9_]`, starting with a letter
    pub fn new(name: &str, module: &str) -> Result<Self> {
        if !naming::is_snake_case(name) {
            return Err(GeneratorError::InvalidName(format!(
                "{:?} is not a snake_case mapper name (e.g. user_info)",
                name
            )));
        }

        Ok(Self {
            package_name: name.to_string(),
            module: module.to_string(),
            collection: name.to_string(),
            type_name: naming::snake_to_camel(name),
        })
    }
}
