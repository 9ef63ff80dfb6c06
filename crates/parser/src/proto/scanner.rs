//! Line-oriented `message` declaration scanner

use gtool_common::{GeneratorError, Message, MessageSet, Result};
use std::fs;
use std::path::Path;

const MESSAGE_KEYWORD: &str = "message";

/// Proto message scanner
///
/// Holds the proto source text and extracts single-line `message` declarations.
/// Comments, nested messages and declarations split across lines are not
/// recognized.
pub struct ProtoScanner {
    source: String,
}

impl ProtoScanner {
    /// Load proto source from a file
    ///
    /// # Example
    /// ```rust,ignore
    /// let scanner = ProtoScanner::from_file("idl/common.proto")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = fs::read_to_string(path.as_ref()).map_err(|e| {
            GeneratorError::Parse(format!(
                "Failed to read proto file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Ok(Self::from_source(source))
    }

    /// Scanner over in-memory proto source
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Collect every declared message in file order
    pub fn scan(&self) -> MessageSet {
        self.source.lines().filter_map(parse_message_line).collect()
    }
}

/// Read and scan a proto file (convenience function)
pub fn scan_messages<P: AsRef<Path>>(path: P) -> Result<MessageSet> {
    Ok(ProtoScanner::from_file(path)?.scan())
}

fn parse_message_line(line: &str) -> Option<Message> {
    let line = line.trim();
    if !line.starts_with(MESSAGE_KEYWORD) {
        return None;
    }

    let name = line.split_whitespace().nth(1)?;
    let name = name.strip_suffix('{').unwrap_or(name);
    Some(Message::new(name))
}
