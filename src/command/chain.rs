//! Chain modes and the chain splitter

use std::fmt;

use serde::Serialize;

use crate::error::{WatchmanError, WatchmanResult};

/// How the command string is split into links and how failures propagate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainMode {
    /// The whole string is one command
    #[default]
    None,
    /// Split on `&&`; each link runs only if the previous one succeeded
    And,
    /// Split on `;`; each link runs regardless of the previous one
    Then,
}

impl ChainMode {
    /// Resolve the mode from the `--split-and` / `--split-then` flags.
    pub fn from_flags(split_and: bool, split_then: bool) -> WatchmanResult<Self> {
        match (split_and, split_then) {
            (true, true) => Err(WatchmanError::ConflictingChainModes),
            (true, false) => Ok(Self::And),
            (false, true) => Ok(Self::Then),
            (false, false) => Ok(Self::None),
        }
    }

    /// Operator text this mode splits on
    pub fn operator(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::And => Some("&&"),
            Self::Then => Some(";"),
        }
    }

    /// Whether links run one after another, waiting on each
    pub fn is_sequential(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Whether a failed link stops the rest of the chain
    pub fn stops_on_failure(self) -> bool {
        matches!(self, Self::And)
    }
}

impl fmt::Display for ChainMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::And => write!(f, "and (&&)"),
            Self::Then => write!(f, "then (;)"),
        }
    }
}

/// Split the raw command string into one substring per chain link.
///
/// With [`ChainMode::None`] the string is returned unchanged. Otherwise it is
/// split on the mode's operator and each link is trimmed.
pub fn split_chain(command: &str, mode: ChainMode) -> Vec<&str> {
    match mode.operator() {
        None => vec![command],
        Some(operator) => command.split(operator).map(str::trim).collect(),
    }
}
