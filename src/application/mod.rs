// src/application/mod.rs
//
// Application Layer
//
// - Wires fetch -> parse -> map -> table -> prompt -> statistics
// - Owns the console boundary and the single top-level error handler

pub mod app;
pub mod console;
pub mod table;


pub use app::{App, PROMPT, INVALID_CHOICE};
pub use console::{Console, StdConsole};
#[cfg(test)]
pub use console::MemoryConsole;
pub use table::{planet_columns, print_table, render_table, Column};
