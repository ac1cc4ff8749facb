//! Core domain types for Specimen.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod node;
mod parse;
mod response;
mod state;

pub use node::{Iter, IterMut, Node, NodeFields, NodeList, NodeMut, append_node, reset_node};
pub use parse::{ParseError, parse_structured};
pub use response::Response;
pub use state::State;
