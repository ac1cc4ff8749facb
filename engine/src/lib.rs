//! Core engine for Specimen - the demo sequence and its collaborators.
//!
//! This crate owns the run orchestration without binary concerns: the
//! binary supplies a [`Console`] and [`RunSettings`], then calls
//! [`Runner::invoke`].

pub mod console;
pub mod fetch;
pub mod runner;
pub mod sequence;

pub use console::{Console, MemoryConsole, StdoutConsole, format_line, render};
pub use fetch::fake_api_call;
pub use runner::{DEFAULT_ARGS, MALFORMED_INPUT, RunReport, Runner, attempt_parse};
pub use sequence::{Squared, double_evens, split_head, squares, squares_by_member, unique};

// Re-export from crates for public API
pub use specimen_config::{APP_NAME, ConfigError, RunSettings, SpecimenConfig, VERSION};
pub use specimen_types::{
    Node, NodeFields, NodeList, NodeMut, ParseError, Response, State, append_node,
    parse_structured, reset_node,
};
