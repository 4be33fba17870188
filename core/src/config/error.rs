//! Configuration errors.
//!
//! Every variant is detected while the startup configuration is assembled
//! and is fatal: the configuration is static for the process lifetime, so
//! there is nothing to retry. Unbound actions at query time are a defined
//! always-false outcome, not an error; the resolver itself never fails.

use std::fmt;

use crate::input::Button;

/// Which backend family a selection error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    Video,
    Audio,
}

impl BackendKind {
    const fn label(self) -> &'static str {
        match self {
            BackendKind::Video => "video",
            BackendKind::Audio => "audio",
        }
    }
}

/// Errors raised while assembling the startup configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The requested backend is not among those compiled into the binary.
    UnsupportedBackend {
        kind: BackendKind,
        name: &'static str,
    },

    /// Two rows in one player's table bind the same abstract button.
    DuplicateBinding { player: usize, button: Button },

    /// A scalar parameter is outside its valid range.
    InvalidParameter {
        name: &'static str,
        value: String,
        constraint: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedBackend { kind, name } => {
                write!(
                    f,
                    "{} backend \"{name}\" is not compiled into this binary",
                    kind.label()
                )
            }
            Self::DuplicateBinding { player, button } => {
                write!(
                    f,
                    "player {} binds {} more than once",
                    player + 1,
                    button.name()
                )
            }
            Self::InvalidParameter {
                name,
                value,
                constraint,
            } => {
                write!(f, "parameter {name} = {value}: must be {constraint}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
