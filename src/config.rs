//! Generator configuration
//!
//! Plain settings consumed by the library. The binary fills them from
//! command-line arguments and environment variables; tests build them
//! directly.

use std::path::PathBuf;

use crate::error::{CodegenError, Result};

/// Enum the generated lines refer to when none is configured
pub const DEFAULT_ENUM_NAME: &str = "ClanCeremony";

/// Leading spaces on every generated line
pub const DEFAULT_INDENT: usize = 4;

/// Settings for a single generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// JSON document mapping ceremony keys to `[id, description, ..]` arrays
    pub input: PathBuf,

    /// Output file; `None` writes to stdout
    pub output: Option<PathBuf>,

    pub render: RenderOptions,
}

/// How each entry is rendered as a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub enum_name: String,
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            enum_name: DEFAULT_ENUM_NAME.to_string(),
            indent: DEFAULT_INDENT,
        }
    }
}

impl RenderOptions {
    /// Reject enum names that cannot prefix a member access
    pub fn validate(&self) -> Result<()> {
        let name = self.enum_name.as_str();
        if name.is_empty() {
            return Err(CodegenError::Config("enum name must not be empty".to_string()));
        }
        if name.chars().any(|ch| ch.is_whitespace() || ch == '"') {
            return Err(CodegenError::Config(format!(
                "enum name `{}` must not contain whitespace or quotes",
                name
            )));
        }
        Ok(())
    }
}

impl GeneratorConfig {
    /// Config reading `input` and writing to stdout with default rendering
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            render: RenderOptions::default(),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_enum_name(mut self, enum_name: impl Into<String>) -> Self {
        self.render.enum_name = enum_name.into();
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.render.indent = indent;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.render.validate()
    }
}
