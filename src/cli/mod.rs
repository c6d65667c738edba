//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - config init: Initialize configuration file
//! - gen: Generate italic masters for one font source
//! - batch: Generate italics for a directory of font sources
//! - show presets / show masters: Inspect presets and fonts

pub mod batch;
pub mod config;
pub mod gen;
pub mod show;
