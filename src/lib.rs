//! confdoc - Generate configuration and CLI reference data for documentation sites
//!
//! Reads configuration-property and shell-command metadata, files every
//! property under a category, and writes the per-category CSV tables, YAML
//! description files and per-command YAML docs the documentation site is
//! built from. Every run rewrites all artifacts from the current metadata.

pub mod catalog;
pub mod category;
pub mod check;
pub mod cli;
pub mod command;
pub mod config;
pub mod escape;
pub mod generator;
pub mod property;
pub mod writer;
