//! Core module - Contains the fundamental data structures
//!
//! This module provides:
//! - Unified result model (ResultItem)
//! - Rendering functions for different output formats

pub mod model;
pub mod render;
