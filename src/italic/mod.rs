//! Italic master synthesis
//!
//! The outline transform, alternate substitution, extrema, cleanup,
//! direction correction and grid snapping, driven by [`ItalicBuilder`].

mod alternates;
mod builder;
mod cleanup;
mod contour;
mod direction;
mod extrema;
mod grid;
mod transform;

pub use builder::{italic_name, ItalicBuilder};
pub use transform::{MAX_ANGLE, MIN_ANGLE};
