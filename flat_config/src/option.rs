//! Option descriptors and the entries the registry builds from them.
//!
//! An [`OptionDef`] is plain data describing one option: its names, its
//! description and, for valued options, its kind and optional default. The
//! registry turns each descriptor into an [`OptionEntry`], which adds the
//! mutable parse state (the stored value and the occurrence count).

use crate::error::ConfigError;
use crate::value::{Value, ValueKind};

/// Splits a declared name into its long and short parts.
///
/// A single-character declaration is a short alias with no long name. A
/// trailing `,x` (one character after the last comma) declares a short
/// alias next to the long name. Anything else is a long name only.
fn split_declared_name(declared: &str) -> (Option<String>, Option<char>) {
    let mut chars = declared.chars();
    if let (Some(only), None) = (chars.next(), chars.next()) {
        return (None, Some(only));
    }
    if let Some((head, tail)) = declared.rsplit_once(',') {
        let mut alias = tail.chars();
        if let (Some(short), None) = (alias.next(), alias.next())
            && !head.is_empty()
        {
            return (Some(head.to_owned()), Some(short));
        }
    }
    (Some(declared.to_owned()), None)
}

/// Declarative description of one command-line option.
///
/// Descriptors are inert data: building one performs the name split once
/// and nothing else. Hand them to [`Config::new`](crate::Config::new) or
/// [`OptionRegistry::new`](crate::OptionRegistry::new) in the order the
/// help text should list them.
///
/// # Examples
///
/// ```
/// use flat_config::{Config, OptionDef};
///
/// let mut config = Config::new([
///     OptionDef::flag("verbose,v", "emit progress details"),
///     OptionDef::with_default("threads,t", 4, "worker threads"),
///     OptionDef::path("output", "destination file"),
/// ]);
/// config.parse(["tool", "-v"], false)?;
/// assert!(config.has("threads"));
/// # Ok::<(), flat_config::ConfigError>(())
/// ```
#[derive(Clone, Debug)]
pub struct OptionDef {
    pub(crate) long_name: Option<String>,
    pub(crate) short_name: Option<char>,
    pub(crate) description: String,
    pub(crate) kind: Option<ValueKind>,
    pub(crate) default: Option<Value>,
    pub(crate) hidden: bool,
}

impl OptionDef {
    fn new(
        declared: &str,
        description: impl Into<String>,
        kind: Option<ValueKind>,
        default: Option<Value>,
    ) -> Self {
        let (long_name, short_name) = split_declared_name(declared);
        Self {
            long_name,
            short_name,
            description: description.into(),
            kind,
            default,
            hidden: false,
        }
    }

    /// Declares a flag: an option that takes no argument and records how
    /// often it appeared.
    #[must_use]
    pub fn flag(name: impl AsRef<str>, description: impl Into<String>) -> Self {
        Self::new(name.as_ref(), description, None, None)
    }

    /// Declares a valued option whose argument parses as an integer.
    #[must_use]
    pub fn int(name: impl AsRef<str>, description: impl Into<String>) -> Self {
        Self::new(name.as_ref(), description, Some(ValueKind::Int), None)
    }

    /// Declares a valued option whose argument parses as a float.
    #[must_use]
    pub fn float(name: impl AsRef<str>, description: impl Into<String>) -> Self {
        Self::new(name.as_ref(), description, Some(ValueKind::Float), None)
    }

    /// Declares a valued option whose argument is stored verbatim.
    #[must_use]
    pub fn text(name: impl AsRef<str>, description: impl Into<String>) -> Self {
        Self::new(name.as_ref(), description, Some(ValueKind::Text), None)
    }

    /// Declares a valued option whose argument is stored as a UTF-8 path.
    #[must_use]
    pub fn path(name: impl AsRef<str>, description: impl Into<String>) -> Self {
        Self::new(name.as_ref(), description, Some(ValueKind::Path), None)
    }

    /// Declares a valued option with a default; the value kind is taken
    /// from the default itself.
    ///
    /// The option counts as present before parsing, and the default shows
    /// up in the help text after the argument placeholder.
    #[must_use]
    pub fn with_default(
        name: impl AsRef<str>,
        default: impl Into<Value>,
        description: impl Into<String>,
    ) -> Self {
        let value = default.into();
        let kind = value.kind();
        Self::new(name.as_ref(), description, Some(kind), Some(value))
    }

    /// Omits the option from rendered help; it still parses normally.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// One option as owned by the registry: descriptor data plus parse state.
///
/// Lookups on [`OptionRegistry`](crate::OptionRegistry) hand out entries;
/// the scanner mutates them as tokens match.
#[derive(Clone, Debug)]
pub struct OptionEntry {
    long_name: Option<String>,
    short_name: Option<char>,
    description: String,
    kind: Option<ValueKind>,
    default: Option<Value>,
    value: Option<Value>,
    seen: u32,
    hidden: bool,
}

impl OptionEntry {
    pub(crate) fn from_def(def: OptionDef) -> Self {
        Self {
            value: def.default.clone(),
            long_name: def.long_name,
            short_name: def.short_name,
            description: def.description,
            kind: def.kind,
            default: def.default,
            seen: 0,
            hidden: def.hidden,
        }
    }

    /// The long name, absent for short-only options.
    #[must_use]
    pub fn long_name(&self) -> Option<&str> {
        self.long_name.as_deref()
    }

    /// The short alias, if one was declared.
    #[must_use]
    pub const fn short_name(&self) -> Option<char> {
        self.short_name
    }

    /// The descriptive text shown in help output.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The declared value kind; flags have none.
    #[must_use]
    pub const fn kind(&self) -> Option<ValueKind> {
        self.kind
    }

    /// True when the option takes no argument.
    #[must_use]
    pub const fn is_flag(&self) -> bool {
        self.kind.is_none()
    }

    /// How many times the option matched a token.
    #[must_use]
    pub const fn seen(&self) -> u32 {
        self.seen
    }

    /// True when the option declares a default value.
    #[must_use]
    pub const fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// True when the option is excluded from rendered help.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// The current value: the last parsed argument, else the default, else
    /// nothing.
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// The declared default rendered as text; empty without one.
    #[must_use]
    pub fn default_text(&self) -> String {
        self.default.as_ref().map(Value::render).unwrap_or_default()
    }

    /// Columns the entry's help prefix needs, margin included.
    ///
    /// The help renderer aligns descriptions to the widest visible entry,
    /// so this mirrors the prefix layout exactly: the long name when it is
    /// worth printing, room for `-x [ --name ]` when both names exist, the
    /// `arg` placeholder for valued options and the rendered default after
    /// it.
    #[must_use]
    pub fn help_width(&self) -> usize {
        let mut width = match &self.long_name {
            Some(name) if name.chars().count() > 1 => {
                let long = name.chars().count();
                if self.short_name.is_some() {
                    long + 7
                } else {
                    long
                }
            }
            _ => 2,
        };
        if !self.is_flag() {
            width += 4;
            if self.has_default() {
                width += 4 + self.default_text().chars().count();
            }
        }
        width + 6
    }

    /// The name used in diagnostics: the long name when present, else the
    /// short alias.
    pub(crate) fn display_name(&self) -> String {
        match (&self.long_name, self.short_name) {
            (Some(name), _) => name.clone(),
            (None, Some(short)) => short.to_string(),
            (None, None) => String::new(),
        }
    }

    /// Parses `token` into the declared kind and stores it.
    ///
    /// Flags declare no kind; the scanner never routes an argument to one,
    /// so the slot is left untouched.
    pub(crate) fn set_value(&mut self, token: &str) -> Result<(), ConfigError> {
        let Some(kind) = self.kind else {
            return Ok(());
        };
        match kind.parse_token(token) {
            Ok(value) => {
                self.value = Some(value);
                Ok(())
            }
            Err(source) => Err(ConfigError::InvalidArgument {
                option: self.display_name(),
                argument: token.to_owned(),
                source,
            }),
        }
    }

    pub(crate) fn note_seen(&mut self) {
        self.seen += 1;
    }
}
