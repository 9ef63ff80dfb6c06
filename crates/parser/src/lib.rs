//! Input scanning for gtool generators
//!
//! This crate reads the plain-text inputs the scaffolding generators depend on
//! and turns them into the shared types from `gtool-common`.
//!
//! ## Scanning Strategy
//!
//! Neither input is parsed with a grammar. Both scanners work line by line:
//! - proto files: lines starting with `message` declare a message, the
//!   second field is its name
//! - go.mod: the first line starting with `module ` names the Go module
//!
//! Anything else is ignored without error.

mod manifest;
mod proto;

pub use manifest::{parse_go_module, read_go_module};
pub use proto::{scan_messages, ProtoScanner};
