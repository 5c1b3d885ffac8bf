//! Common test utilities for Watchman CLI tests.
//!
//! This module provides:
//! - `run_watchman`: run the binary to completion (startup failures)
//! - `WatchProcess`: a running watcher whose stdout lines can be awaited
//! - `wait_until`: poll a condition with a deadline

#![allow(dead_code)]

pub mod env;

pub use env::*;
