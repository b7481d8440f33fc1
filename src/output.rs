//! CLI output formatting.
//!
//! Information-first display in the same two-level pattern everywhere: an
//! entity leads with its positional index and title, filesystem context
//! follows as indented lines.
//!
//! ```text
//! Sections
//! 001 Flag (2 items)
//!     Source: photos/flag/
//!     001 1 (image)
//!     002 2 (image)
//!
//! warning: No media found. Put files under photos/<section>/ and rerun.
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::paths::PHOTOS_DIR_NAME;
use crate::scan::{EntryKind, Manifest};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn kind_tag(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Image => "image",
        EntryKind::Video => "video",
        EntryKind::ExternalEmbed => "embed",
    }
}

/// Format the full inventory of a scan: every section with its entries.
pub fn format_inventory(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Sections".to_string());

    for (si, section) in manifest.sections.iter().enumerate() {
        lines.push(format!(
            "{} {} ({} items)",
            format_index(si + 1),
            section.title,
            section.items.len()
        ));
        lines.push(format!(
            "    Source: {}/{}/",
            PHOTOS_DIR_NAME, section.source_dir
        ));
        for (i, item) in section.items.iter().enumerate() {
            lines.push(format!(
                "    {} {} ({})",
                format_index(i + 1),
                item.label,
                kind_tag(item.kind)
            ));
        }
    }

    lines
}

/// Format the post-generate summary: the output path and one count line per
/// section.
pub fn format_generate_output(manifest: &Manifest, output_file: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("Generated {}", output_file.display()));
    for section in &manifest.sections {
        lines.push(format!(
            "  {}: {} item(s)",
            section.title,
            section.items.len()
        ));
    }
    lines
}

/// Format the warnings recovered during a scan, one `warning:` line each.
pub fn format_warnings(manifest: &Manifest) -> Vec<String> {
    manifest
        .warnings
        .iter()
        .map(|w| format!("warning: {w}"))
        .collect()
}

/// Print the scan inventory to stdout.
pub fn print_inventory(manifest: &Manifest) {
    for line in format_inventory(manifest) {
        println!("{}", line);
    }
}

/// Print the generate summary to stdout.
pub fn print_generate_output(manifest: &Manifest, output_file: &Path) {
    for line in format_generate_output(manifest, output_file) {
        println!("{}", line);
    }
}

/// Print scan warnings to stdout.
pub fn print_warnings(manifest: &Manifest) {
    for line in format_warnings(manifest) {
        println!("{}", line);
    }
}
