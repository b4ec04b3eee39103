//! Error types shared by parsing and querying.
//!
//! Every failure carries the option name it concerns, so a caller can print
//! the error as-is and the user can see which token to fix.

use thiserror::Error;

use crate::value::{ValueError, ValueKind};

/// Errors raised while parsing an argument vector or querying the table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A token named an option absent from the registry.
    #[error("unknown option '{option}'")]
    UnknownOption {
        /// The long name or short alias as it appeared on the command line.
        option: String,
    },

    /// A flag was given an inline `=argument`.
    #[error("option '{option}' does not accept an argument")]
    DoesNotAcceptArgument {
        /// The flag the argument was attached to.
        option: String,
    },

    /// A valued option found no argument inline, in the cluster remainder
    /// or in the following slot.
    #[error("missing argument for option '{option}'")]
    MissingArgument {
        /// The option awaiting an argument.
        option: String,
    },

    /// A value was requested from an option that was never matched and
    /// declares no default.
    #[error("option '{option}' was not specified")]
    NotSpecified {
        /// The queried option name.
        option: String,
    },

    /// An argument token failed conversion into the option's declared kind.
    #[error("invalid argument '{argument}' for option '{option}'")]
    InvalidArgument {
        /// The option whose argument failed to convert.
        option: String,
        /// The offending token.
        argument: String,
        /// The underlying conversion failure.
        #[source]
        source: ValueError,
    },

    /// A typed getter asked for a kind other than the declared one.
    #[error("wrong type for option '{option}': declared {declared}, requested {requested}")]
    WrongType {
        /// The queried option name.
        option: String,
        /// The kind the option was declared with.
        declared: ValueKind,
        /// The kind the getter asked for.
        requested: ValueKind,
    },
}
