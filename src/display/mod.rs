//! Terminal display module
//!
//! Prints Markdown reports, styled on a TTY and plain otherwise.

mod formatter;
mod terminal;

pub use formatter::print_markdown;
