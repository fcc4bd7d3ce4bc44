//! Utility modules for ceremony generation
//!
//! - Identifier: Title-casing and Pascal-joining of ceremony keys

pub mod identifier;

pub use identifier::{pascal_join, title_case};
