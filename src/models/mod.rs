//! Data models module
//!
//! Defines the font source model (Font, Master, Glyph, Layer, Path, Node)
//! and the ItalicReport produced by a build.

pub mod font;
pub mod outline;
pub mod report;

pub use font::{Font, Layer, Master};
pub use outline::{Node, NodeType, Path};
pub use report::{ItalicReport, Substitution};

#[cfg(test)]
pub use font::Glyph;
#[cfg(test)]
pub use outline::{Anchor, Component};
