//! Immutable per-command configuration built by the CLI

use std::path::PathBuf;

/// Configuration for `xh idl gen-svc`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceGenConfig {
    /// Proto file holding the message declarations
    pub common_proto: PathBuf,

    /// Proto file the service definition is written to (overwritten)
    pub service_proto: PathBuf,

    /// Service name as typed by the user
    pub service_name: String,
}

/// Configuration for `xh mapper new`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperConfig {
    /// snake_case mapper name
    pub name: String,

    /// Project root holding `go.mod`
    pub project_root: PathBuf,
}

impl MapperConfig {
    /// Path of the project manifest read for the module name
    pub fn manifest_path(&self) -> PathBuf {
        self.project_root.join("go.mod")
    }
}
