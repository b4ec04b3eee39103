//! Rendering of the aligned help table.
//!
//! Descriptions line up on a single column: the widest visible entry
//! prefix, capped at half the total width. Prefixes that fit get their
//! first description line on the same row; overlong prefixes push the
//! whole description onto the rows below. Wrapping is delegated to
//! `textwrap`.

use crate::option::OptionEntry;
use crate::registry::OptionRegistry;

/// Renders every visible entry at the given total width.
pub(crate) fn render(registry: &OptionRegistry, total_width: usize) -> String {
    let column = registry
        .entries()
        .filter(|entry| !entry.is_hidden())
        .map(OptionEntry::help_width)
        .max()
        .unwrap_or(0)
        .min(total_width / 2);
    let mut out = String::new();
    for entry in registry.entries().filter(|entry| !entry.is_hidden()) {
        write_entry(&mut out, entry, column, total_width);
    }
    out
}

/// Builds the `  -x [ --name ] arg (=default)` prefix for one entry.
///
/// A long name of a single character is matchable but not worth printing,
/// so only the short alias shows.
fn entry_prefix(entry: &OptionEntry) -> String {
    let mut prefix = String::from("  ");
    if let Some(short) = entry.short_name() {
        prefix.push('-');
        prefix.push(short);
        if let Some(name) = entry.long_name().filter(|name| name.chars().count() > 1) {
            prefix.push_str(" [ --");
            prefix.push_str(name);
            prefix.push_str(" ]");
        }
    } else if let Some(name) = entry.long_name() {
        prefix.push_str("--");
        prefix.push_str(name);
    }
    if !entry.is_flag() {
        prefix.push_str(" arg");
        if entry.has_default() {
            prefix.push_str(" (=");
            prefix.push_str(&entry.default_text());
            prefix.push(')');
        }
    }
    prefix
}

fn write_entry(out: &mut String, entry: &OptionEntry, column: usize, total_width: usize) {
    let prefix = entry_prefix(entry);
    let used = prefix.chars().count();
    let same_line = used + 2 <= column;
    out.push_str(&prefix);
    if !same_line {
        out.push('\n');
    }
    let description = entry.description();
    if description.is_empty() {
        if same_line {
            out.push('\n');
        }
        return;
    }
    let body_width = total_width.saturating_sub(column).max(1);
    let mut lead = if same_line { column - used } else { column };
    for line in textwrap::wrap(description, body_width) {
        out.push_str(&" ".repeat(lead));
        out.push_str(&line);
        out.push('\n');
        lead = column;
    }
}
