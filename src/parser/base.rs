use thiserror::Error;

use crate::constant::*;
use crate::registry::Registry;
use crate::value::ConversionError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Parse error: '{name}' requires a parameter.")]
    MissingParameter { name: String },

    #[error("Parse error: {source} (parameter '{name}').")]
    InvalidValue {
        name: String,
        source: ConversionError,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Action {
    /// Parsing ran to completion; positional tokens are in encounter order.
    Continue { positionals: Vec<String> },
    /// The help trigger was encountered; all subsequent tokens were dropped.
    PrintHelp,
}

/// Consume the token sequence in a single left-to-right pass, mutating matched registry
/// entries in place.
///
/// Tokens without the option-marker prefix are collected (never bound to declarations).
/// Marker-prefixed tokens that match no declaration are skipped on purpose.
pub(crate) fn consume(registry: &mut Registry, tokens: &[&str]) -> Result<Action, ParseError> {
    let help_long = format!("{OPTION_PREFIX}{OPTION_PREFIX}{HELP_NAME}");
    let help_short = format!("{OPTION_PREFIX}{HELP_SHORT}");
    let mut positionals: Vec<String> = Vec::default();
    let mut token_iter = tokens.iter();

    while let Some(&token) = token_iter.next() {
        if !token.starts_with(OPTION_PREFIX) {
            positionals.push(token.to_string());
            continue;
        }

        if token == help_long || token == help_short {
            return Ok(Action::PrintHelp);
        }

        match registry.lookup_mut(token) {
            Some(argument) if argument.is_flag() => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("matched flag '{token}'");
                }

                argument.assign_store();
            }
            Some(argument) => match token_iter.next() {
                Some(&value) => {
                    // Normalize before assigning, so a conversion failure leaves the
                    // argument at its prior value.
                    let canonical = argument.value_type().normalize(value).map_err(|source| {
                        ParseError::InvalidValue {
                            name: token.to_string(),
                            source,
                        }
                    })?;

                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("matched '{token}' with value '{canonical}'");
                    }

                    argument.assign(canonical);
                }
                None => {
                    return Err(ParseError::MissingParameter {
                        name: token.to_string(),
                    });
                }
            },
            None => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("skipping unrecognized option token '{token}'");
                }
            }
        }
    }

    Ok(Action::Continue { positionals })
}
