//! The token scanner behind [`Config::parse`](crate::Config::parse).
//!
//! The scanner walks the argument vector once, in two states. While
//! scanning options it classifies each token as a long option, a short
//! cluster, the `--` separator or an operand; after the separator every
//! remaining token is an operand. Each token resolves to a `Result` and
//! the walk stops at the first error, leaving everything already matched
//! in place.

use tracing::debug;

use crate::error::ConfigError;
use crate::registry::OptionRegistry;

/// Parses an argument vector into a registry.
///
/// The first slot carries the program name and is skipped. With
/// `tolerate_unknown` set, tokens naming unregistered options are logged
/// and dropped instead of failing the parse.
///
/// # Errors
///
/// Returns the first [`ConfigError`] a token resolves to; remaining tokens
/// are left unscanned.
pub fn parse_args<I>(
    registry: &mut OptionRegistry,
    argv: I,
    tolerate_unknown: bool,
) -> Result<(), ConfigError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    TokenScanner {
        registry,
        rest: argv.into_iter().map(Into::into).skip(1),
        tolerate_unknown,
        state: ScanState::Options,
    }
    .run()
}

enum ScanState {
    Options,
    OperandsOnly,
}

struct TokenScanner<'reg, I> {
    registry: &'reg mut OptionRegistry,
    rest: I,
    tolerate_unknown: bool,
    state: ScanState,
}

impl<I: Iterator<Item = String>> TokenScanner<'_, I> {
    fn run(mut self) -> Result<(), ConfigError> {
        while let Some(token) = self.rest.next() {
            self.step(token)?;
        }
        Ok(())
    }

    fn step(&mut self, token: String) -> Result<(), ConfigError> {
        if matches!(self.state, ScanState::OperandsOnly) {
            self.registry.record_operand(token);
            return Ok(());
        }
        if token == "--" {
            self.state = ScanState::OperandsOnly;
            return Ok(());
        }
        if let Some(body) = token.strip_prefix("--") {
            return self.long_option(body);
        }
        if let Some(cluster) = token.strip_prefix('-') {
            return self.short_cluster(cluster);
        }
        self.registry.record_operand(token);
        Ok(())
    }

    /// Handles `--name`, `--name=argument` and `--name` plus a following
    /// argument slot.
    ///
    /// An empty inline argument (`--name=`) counts as no argument at all:
    /// a flag takes no offence and a valued option still consumes the next
    /// slot. Argument slots are consumed blindly, so `--port --verbose`
    /// stores `--verbose` as the port.
    fn long_option(&mut self, body: &str) -> Result<(), ConfigError> {
        let (name, inline) = match body.split_once('=') {
            Some((name, argument)) if !argument.is_empty() => (name, Some(argument)),
            Some((name, _)) => (name, None),
            None => (body, None),
        };
        let Some(entry) = self.registry.find_long_mut(name) else {
            if self.tolerate_unknown {
                debug!(option = %name, "ignoring unknown long option");
                return Ok(());
            }
            return Err(ConfigError::UnknownOption {
                option: name.to_owned(),
            });
        };
        if entry.is_flag() {
            if inline.is_some() {
                return Err(ConfigError::DoesNotAcceptArgument {
                    option: name.to_owned(),
                });
            }
            entry.note_seen();
            return Ok(());
        }
        entry.note_seen();
        let argument = match inline {
            Some(argument) => Some(argument.to_owned()),
            None => self.rest.next(),
        };
        match argument.filter(|argument| !argument.is_empty()) {
            Some(argument) => entry.set_value(&argument),
            None => Err(ConfigError::MissingArgument {
                option: name.to_owned(),
            }),
        }
    }

    /// Scans a `-abc` cluster character by character.
    ///
    /// The first valued option ends the scan: the rest of the cluster is
    /// its argument, or the next slot when the cluster is exhausted. The
    /// scan keeps going past unknown characters and keeps only the first
    /// error, so occurrence counts and the argument hand-off still happen
    /// behind a failed lookup.
    fn short_cluster(&mut self, cluster: &str) -> Result<(), ConfigError> {
        let mut flagged: Option<ConfigError> = None;
        let mut chars = cluster.chars();
        while let Some(alias) = chars.next() {
            let Some(entry) = self.registry.find_short_mut(alias) else {
                if self.tolerate_unknown {
                    debug!(option = %alias, "ignoring unknown short option");
                } else if flagged.is_none() {
                    flagged = Some(ConfigError::UnknownOption {
                        option: alias.to_string(),
                    });
                }
                continue;
            };
            entry.note_seen();
            if entry.is_flag() {
                continue;
            }
            // Resolved in place: the entry borrow must end with this iteration.
            let remainder = chars.as_str();
            let argument = if remainder.is_empty() {
                self.rest.next()
            } else {
                Some(remainder.to_owned())
            };
            let resolved = match argument.filter(|argument| !argument.is_empty()) {
                Some(argument) => entry.set_value(&argument),
                None => Err(ConfigError::MissingArgument {
                    option: entry.display_name(),
                }),
            };
            if flagged.is_none() {
                flagged = resolved.err();
            }
            break;
        }
        match flagged {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
