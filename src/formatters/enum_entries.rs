use std::io::Write;

use crate::config::RenderOptions;
use crate::document::{CeremonyDocument, CeremonyEntry};
use crate::error::Result;
use crate::utils::pascal_join;

/// Formatter for enum-member lines (`    ClanCeremony.FireHeart: "A cat dies"`)
pub struct EnumEntryFormatter;

impl EnumEntryFormatter {
    /// Format one entry as a line, without the trailing newline
    pub fn format_line(entry: &CeremonyEntry, options: &RenderOptions) -> String {
        format!(
            "{:indent$}{}.{}: \"{}\"",
            "",
            options.enum_name,
            pascal_join(&entry.key),
            entry.description_text(),
            indent = options.indent
        )
    }

    /// Write every entry of the document, one newline-terminated line each
    ///
    /// Returns: number of lines written
    pub fn write_all<W: Write>(
        document: &CeremonyDocument,
        options: &RenderOptions,
        writer: &mut W,
    ) -> Result<usize> {
        for entry in document.entries() {
            let line = Self::format_line(entry, options);
            tracing::debug!("{} -> {}", entry.key, line.trim_start());
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        Ok(document.len())
    }

    /// Render the whole document into a string
    pub fn render_to_string(document: &CeremonyDocument, options: &RenderOptions) -> String {
        let mut out = String::with_capacity(document.len() * 64);
        for entry in document.entries() {
            out.push_str(&Self::format_line(entry, options));
            out.push('\n');
        }
        out
    }
}
