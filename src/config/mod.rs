//! Configuration module for Budget Boards
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BoardsPaths;
pub use settings::Settings;
