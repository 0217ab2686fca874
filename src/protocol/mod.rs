//! Referee protocol handling.
//!
//! Parsing of the per-turn text input into structured reports, and
//! formatting of the chosen actions back into command lines.

pub mod output;
pub mod parser;

pub use output::{format_action, write_actions};
pub use parser::{parse_entity, parse_header, parse_row, ProtocolError, TurnReader};
