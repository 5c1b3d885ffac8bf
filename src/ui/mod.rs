//! Rendering of watch events: human lines or NDJSON

pub mod json;
pub mod watch;
