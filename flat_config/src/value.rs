//! The conversion layer between argument tokens and typed option values.
//!
//! Options declare one of four value kinds. Parsing an argument token
//! produces a [`Value`] of the matching variant, and queries extract the
//! typed payload back out through [`FromValue`]. The set of kinds is closed,
//! so callers can match on [`Value`] exhaustively.

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

use camino::Utf8PathBuf;
use thiserror::Error;

/// The kinds of value a valued option can declare.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueKind {
    /// A signed 64-bit integer.
    Int,
    /// A 64-bit floating-point number.
    Float,
    /// Free-form text, stored verbatim.
    Text,
    /// A UTF-8 filesystem path.
    Path,
}

impl ValueKind {
    /// Converts an argument token into a value of this kind.
    ///
    /// Text and path tokens are stored verbatim and never fail. Numeric
    /// tokens are parsed and re-render in canonical form, so `"+8080"` and
    /// `"007"` both come back as integers that render without the sign or
    /// the zero padding.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_config::{Value, ValueKind};
    ///
    /// let value = ValueKind::Int.parse_token("007")?;
    /// assert_eq!(value, Value::Int(7));
    /// assert_eq!(value.render(), "7");
    /// # Ok::<(), flat_config::ValueError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] when a numeric token does not parse.
    pub fn parse_token(self, token: &str) -> Result<Value, ValueError> {
        match self {
            Self::Int => Ok(Value::Int(token.parse()?)),
            Self::Float => Ok(Value::Float(token.parse()?)),
            Self::Text => Ok(Value::Text(token.to_owned())),
            Self::Path => Ok(Value::Path(Utf8PathBuf::from(token))),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Int => "integer",
            Self::Float => "floating-point",
            Self::Text => "text",
            Self::Path => "path",
        };
        f.write_str(label)
    }
}

/// A parsed option value.
///
/// The variants mirror [`ValueKind`] one to one. Values are produced by
/// [`ValueKind::parse_token`] or supplied as defaults via the `From`
/// conversions below.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A signed 64-bit integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// Free-form text.
    Text(String),
    /// A UTF-8 filesystem path.
    Path(Utf8PathBuf),
}

impl Value {
    /// The kind this value was parsed or declared as.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::Path(_) => ValueKind::Path,
        }
    }

    /// Renders the value as text, in the canonical form numeric values
    /// normalise to.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Int(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Text(value) => value.clone(),
            Self::Path(value) => value.as_str().to_owned(),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// Integer literals default to `i32`; accept them for default declarations.
impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<Utf8PathBuf> for Value {
    fn from(value: Utf8PathBuf) -> Self {
        Self::Path(value)
    }
}

/// Extracts a typed payload from a [`Value`].
///
/// Implemented for exactly the four payload types of the value kinds. The
/// typed getter on the configuration facade uses this to report which kind
/// was requested when the declaration disagrees.
pub trait FromValue: Sized {
    /// The kind this extraction expects.
    const KIND: ValueKind;

    /// Returns the payload when `value` holds the matching variant.
    #[must_use]
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for i64 {
    const KIND: ValueKind = ValueKind::Int;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(payload) => Some(*payload),
            _ => None,
        }
    }
}

impl FromValue for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(payload) => Some(*payload),
            _ => None,
        }
    }
}

impl FromValue for String {
    const KIND: ValueKind = ValueKind::Text;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(payload) => Some(payload.clone()),
            _ => None,
        }
    }
}

impl FromValue for Utf8PathBuf {
    const KIND: ValueKind = ValueKind::Path;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Path(payload) => Some(payload.clone()),
            _ => None,
        }
    }
}

/// Failure converting an argument token into a numeric value.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ValueError {
    /// The token did not parse as a signed 64-bit integer.
    #[error(transparent)]
    Int(#[from] ParseIntError),
    /// The token did not parse as a 64-bit float.
    #[error(transparent)]
    Float(#[from] ParseFloatError),
}
