//! Ordered storage for option entries and positional operands.
//!
//! The registry is populated once from descriptors and then mutated only
//! through parsing. Lookups scan in declaration order, so when two entries
//! share a name the earlier declaration wins.

use crate::option::{OptionDef, OptionEntry};

/// The option table: entries in declaration order plus collected operands.
#[derive(Clone, Debug, Default)]
pub struct OptionRegistry {
    entries: Vec<OptionEntry>,
    operands: Vec<String>,
}

impl OptionRegistry {
    /// Builds the registry from descriptors, preserving their order.
    #[must_use]
    pub fn new(defs: impl IntoIterator<Item = OptionDef>) -> Self {
        Self {
            entries: defs.into_iter().map(OptionEntry::from_def).collect(),
            operands: Vec::new(),
        }
    }

    /// Finds the first entry whose long name matches exactly.
    ///
    /// Short-only entries store no long name and never match here.
    #[must_use]
    pub fn find_long(&self, name: &str) -> Option<&OptionEntry> {
        self.entries
            .iter()
            .find(|entry| entry.long_name() == Some(name))
    }

    /// Finds the first entry carrying this short alias.
    #[must_use]
    pub fn find_short(&self, alias: char) -> Option<&OptionEntry> {
        self.entries
            .iter()
            .find(|entry| entry.short_name() == Some(alias))
    }

    /// Resolves a query name: long names match first, and a
    /// single-character query falls back to the short aliases.
    #[must_use]
    pub fn find_named(&self, name: &str) -> Option<&OptionEntry> {
        if let Some(entry) = self.find_long(name) {
            return Some(entry);
        }
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(alias), None) => self.find_short(alias),
            _ => None,
        }
    }

    pub(crate) fn find_long_mut(&mut self, name: &str) -> Option<&mut OptionEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.long_name() == Some(name))
    }

    pub(crate) fn find_short_mut(&mut self, alias: char) -> Option<&mut OptionEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.short_name() == Some(alias))
    }

    /// Appends a positional token, preserving scan order.
    pub fn record_operand(&mut self, token: String) {
        self.operands.push(token);
    }

    /// The positional tokens, in the order they were scanned.
    #[must_use]
    pub fn operands(&self) -> &[String] {
        &self.operands
    }

    /// The entries, in declaration order.
    #[must_use]
    pub fn entries(&self) -> impl Iterator<Item = &OptionEntry> {
        self.entries.iter()
    }
}
