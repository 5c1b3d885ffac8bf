//! Command string handling
//!
//! Turns the raw `--command` string into executable [`CommandSpec`]s:
//! - [`split_chain`] cuts the string into chain links by the active [`ChainMode`]
//! - [`tokenize`] splits one link into argv, keeping quoted regions whole
//! - [`build_commands`] runs both and snapshots the environment
//!
//! Splitting on `&&`/`;` is purely lexical: an operator inside quotes still
//! splits the link.

mod builder;
mod chain;
mod tokenizer;


pub use builder::{build_commands, build_commands_with_env, CommandSpec, EnvSnapshot};
pub use chain::{split_chain, ChainMode};
pub use tokenizer::tokenize;
