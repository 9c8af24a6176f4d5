//! Configuration module for pulpit
//!
//! This module provides configuration constants, default values, and configuration types
//! for the pulpit media console.

mod constants;
mod types;

// Re-export all constants and types
pub use constants::*;
pub use types::*;
