//! Proto message scanner
//!
//! Extracts message names from a `.proto` source file for request/response
//! pairing.
//!
//! ## Example
//! ```rust,ignore
//! use gtool_parser::ProtoScanner;
//!
//! let messages = ProtoScanner::from_file("common.proto")?.scan();
//! assert!(messages.contains("PingReq"));
//! ```

mod scanner;

pub use scanner::{scan_messages, ProtoScanner};
