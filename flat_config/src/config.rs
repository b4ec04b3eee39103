//! The configuration facade: declare, parse once, query anywhere after.

use std::fmt;

use crate::ConfigResult;
use crate::error::ConfigError;
use crate::help;
use crate::option::{OptionDef, OptionEntry};
use crate::parser;
use crate::registry::OptionRegistry;
use crate::value::{FromValue, Value};

/// A parsed option table.
///
/// Build one from descriptors, feed it an argument vector once, then query
/// it wherever the handle reaches. Displaying the table renders the help
/// text at the detected terminal width.
///
/// # Examples
///
/// ```
/// use flat_config::{Config, OptionDef};
///
/// let mut config = Config::new([
///     OptionDef::flag("verbose,v", "emit progress details"),
///     OptionDef::int("port,p", "listen port"),
/// ]);
/// config.parse(["serve", "-vv", "--port", "8080", "conf.toml"], false)?;
/// assert_eq!(config.count("verbose"), 2);
/// assert_eq!(config.get::<i64>("port")?, 8080);
/// assert_eq!(config.operands(), ["conf.toml"]);
/// # Ok::<(), flat_config::ConfigError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    registry: OptionRegistry,
}

impl Config {
    /// Builds the table from descriptors, in help order.
    #[must_use]
    pub fn new(defs: impl IntoIterator<Item = OptionDef>) -> Self {
        Self {
            registry: OptionRegistry::new(defs),
        }
    }

    /// Parses an argument vector, program name in the first slot.
    ///
    /// With `tolerate_unknown` set, tokens naming unregistered options are
    /// logged and dropped instead of failing the parse.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] a token resolves to. Options
    /// matched before the failing token keep their values and counts.
    pub fn parse<I>(&mut self, argv: I, tolerate_unknown: bool) -> ConfigResult<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        parser::parse_args(&mut self.registry, argv, tolerate_unknown)
    }

    /// True when the option resolves and was either matched or declares a
    /// default.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.registry
            .find_named(name)
            .is_some_and(|entry| entry.seen() > 0 || entry.has_default())
    }

    /// How many times the option was matched; zero when it resolves to
    /// nothing at all.
    #[must_use]
    pub fn count(&self, name: &str) -> u32 {
        self.registry.find_named(name).map_or(0, OptionEntry::seen)
    }

    /// The current value of a valued option, for matching on the variant.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownOption`] when the name resolves to no entry,
    /// [`ConfigError::NotSpecified`] when the option was never matched and
    /// declares no default. Flags always report `NotSpecified`.
    pub fn value(&self, name: &str) -> ConfigResult<&Value> {
        let entry = self
            .registry
            .find_named(name)
            .ok_or_else(|| ConfigError::UnknownOption {
                option: name.to_owned(),
            })?;
        entry.value().ok_or_else(|| ConfigError::NotSpecified {
            option: name.to_owned(),
        })
    }

    /// Typed convenience over [`Config::value`].
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8PathBuf;
    /// use flat_config::{Config, OptionDef};
    ///
    /// let mut config = Config::new([OptionDef::path("output,o", "destination")]);
    /// config.parse(["tool", "-o", "report/out.txt"], false)?;
    /// let output: Utf8PathBuf = config.get("output")?;
    /// assert_eq!(output, Utf8PathBuf::from("report/out.txt"));
    /// # Ok::<(), flat_config::ConfigError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Everything [`Config::value`] reports, plus
    /// [`ConfigError::WrongType`] when `T` is not the declared kind.
    pub fn get<T: FromValue>(&self, name: &str) -> ConfigResult<T> {
        let value = self.value(name)?;
        T::from_value(value).ok_or_else(|| ConfigError::WrongType {
            option: name.to_owned(),
            declared: value.kind(),
            requested: T::KIND,
        })
    }

    /// The positional tokens, in the order they were scanned.
    #[must_use]
    pub fn operands(&self) -> &[String] {
        self.registry.operands()
    }

    /// Renders the help table at the given total width.
    #[must_use]
    pub fn render_help(&self, total_width: usize) -> String {
        help::render(&self.registry, total_width)
    }
}

/// Renders the help table at the detected terminal width.
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_help(textwrap::termwidth()))
    }
}
