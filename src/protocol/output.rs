//! Action output.
//!
//! Formats robot actions as referee command lines.

use std::io::{self, Write};

use crate::board::Action;

/// Formats a single action: `WAIT`, `MOVE x y`, `DIG x y`, or `REQUEST <item>`.
pub fn format_action(action: &Action) -> String {
    match action {
        Action::Wait => "WAIT".to_string(),
        Action::Move(pos) => format!("MOVE {}", pos),
        Action::Dig(pos) => format!("DIG {}", pos),
        Action::Request(item) => format!("REQUEST {}", item),
    }
}

/// Writes one line per action and flushes.
pub fn write_actions<W: Write>(out: &mut W, actions: &[Action]) -> io::Result<()> {
    for action in actions {
        writeln!(out, "{}", format_action(action))?;
    }
    out.flush()
}
