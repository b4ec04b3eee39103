//! A flat command-line option table: declare, parse, query.
//!
//! `flat_config` covers the common shape of small tools: a fixed set of
//! options declared up front, one pass over the argument vector, typed
//! queries afterwards. No subcommands, no derive macros, no hierarchy.
//!
//! # Declaring and parsing
//!
//! Options are declared as plain descriptors. A name like `"verbose,v"`
//! declares a long name and a short alias in one go; a single character
//! declares a short-only option. The parser understands `--name`,
//! `--name=value`, `-abc` clusters with the first valued option taking
//! the rest of the cluster (or the next slot) as its argument, and `--`
//! to end option scanning. Operands may interleave with options and come
//! back in scan order.
//!
//! ```
//! use flat_config::{Config, OptionDef};
//!
//! let mut config = Config::new([
//!     OptionDef::flag("verbose,v", "emit progress details"),
//!     OptionDef::with_default("threads,t", 4, "worker threads"),
//!     OptionDef::path("output,o", "destination file"),
//! ]);
//! config.parse(["pack", "-v", "--threads=8", "in.txt"], false)?;
//! assert!(config.has("verbose"));
//! assert_eq!(config.get::<i64>("threads")?, 8);
//! assert_eq!(config.operands(), ["in.txt"]);
//! # Ok::<(), flat_config::ConfigError>(())
//! ```
//!
//! # Values
//!
//! Valued options declare one of four kinds: integer, float, text or
//! UTF-8 path. Arguments are converted while parsing, so a bad token
//! fails the parse rather than a later query, and numeric values
//! re-render in canonical form. [`Config::get`] extracts the payload
//! type directly; [`Config::value`] hands back the [`Value`] variant for
//! exhaustive matching.
//!
//! # Help text
//!
//! Displaying a [`Config`] renders an aligned help table at the detected
//! terminal width; [`Config::render_help`] does the same at a caller
//! chosen width. Options declared [`OptionDef::hidden`] parse normally
//! but stay out of the table.

mod config;
mod error;
mod help;
mod option;
mod parser;
mod registry;
mod value;

pub use config::Config;
pub use error::ConfigError;
pub use option::{OptionDef, OptionEntry};
pub use parser::parse_args;
pub use registry::OptionRegistry;
pub use value::{FromValue, Value, ValueError, ValueKind};

/// Convenience alias for results carrying [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;
