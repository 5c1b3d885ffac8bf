//! Command builder

use std::ffi::OsString;
use std::fmt;
use std::sync::Arc;

use super::chain::{split_chain, ChainMode};
use super::tokenizer::tokenize;
use crate::error::{WatchmanError, WatchmanResult};

/// Environment captured once per build and shared by every link
pub type EnvSnapshot = Arc<[(OsString, OsString)]>;

/// One executable chain link: argv plus the environment it runs with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    argv: Vec<String>,
    env: EnvSnapshot,
}

impl CommandSpec {
    /// Program name (first argv entry)
    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    /// Arguments after the program name
    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub fn env(&self) -> &[(OsString, OsString)] {
        &self.env
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv.join(" "))
    }
}

/// Build one [`CommandSpec`] per chain link, using the current process
/// environment.
pub fn build_commands(command: &str, mode: ChainMode) -> WatchmanResult<Vec<CommandSpec>> {
    let env: EnvSnapshot = std::env::vars_os().collect();
    build_commands_with_env(command, mode, env)
}

/// Build one [`CommandSpec`] per chain link with an explicit environment.
///
/// Fails on the first link that cannot be tokenized or has no program; no
/// partial list is returned.
pub fn build_commands_with_env(
    command: &str,
    mode: ChainMode,
    env: EnvSnapshot,
) -> WatchmanResult<Vec<CommandSpec>> {
    split_chain(command, mode)
        .into_iter()
        .enumerate()
        .map(|(index, link)| {
            let argv = tokenize(link)?;
            if argv.first().map_or(true, |program| program.is_empty()) {
                return Err(WatchmanError::EmptyProgram {
                    index,
                    command: link.to_string(),
                });
            }
            Ok(CommandSpec {
                argv,
                env: Arc::clone(&env),
            })
        })
        .collect()
}
