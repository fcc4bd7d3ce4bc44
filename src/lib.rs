//! Ceremony Code Generator
//!
//! Turns a JSON ceremony table into enum-member lines for the game sources:
//!
//! ```text
//! {"fire_heart": ["x", "A cat dies"]}   ->       ClanCeremony.FireHeart: "A cat dies"
//! ```
//!
//! Layout:
//! - `utils/`: Identifier formatting (title-case, strip separators)
//! - `document`: JSON loading and per-entry validation
//! - `formatters/`: Line rendering
//! - `generator`: Load → validate → emit orchestration
//! - `config` / `error`: Run settings and failure taxonomy

pub mod config;
pub mod document;
pub mod error;
pub mod formatters;
pub mod generator;
pub mod utils;

// Re-export commonly used types
pub use config::{GeneratorConfig, RenderOptions, DEFAULT_ENUM_NAME, DEFAULT_INDENT};
pub use document::{CeremonyDocument, CeremonyEntry};
pub use error::CodegenError;
pub use formatters::EnumEntryFormatter;
pub use generator::{generate, CeremonyGenerator, GenerationSummary};
pub use utils::{pascal_join, title_case};
