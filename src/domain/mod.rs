//! Domain Layer
//!
//! Interfaces for the collaborators Watchman drives but does not own.
//!
//! ## Structure
//!
//! - `ports/` - Process execution and event reporting traits
//!
//! Infrastructure provides the concrete process runner; the binary provides
//! the event sinks.

pub mod ports;
