//! Input/output operations and error handling
//!
//! This module contains the shell around the numerical core:
//! - Image decoding and mosaic export
//! - Tile library construction
//! - The command-line driver, its defaults, and progress reporting

/// Command-line interface and pipeline orchestration
pub mod cli;
/// Runtime configuration defaults and limits
pub mod configuration;
/// Error types for mosaic operations
pub mod error;
/// Image decoding and export
pub mod image;
/// Tile library construction
pub mod library;
/// Progress reporting for pipeline stages
pub mod progress;
