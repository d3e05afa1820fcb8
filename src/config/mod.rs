//! Configuration module for scaffold-pages
//!
//! There is no configuration file. This module provides:
//! - Path resolution relative to the project root
//! - The page set for a run

pub mod paths;
pub mod settings;

pub use paths::ScaffoldPaths;
pub use settings::ScaffoldSettings;
