
//! Cluster variation identification library
//!
//! This library identifies symmetry-distinct clusters, correlation functions and
//! configuration matrices for crystalline alloys, and embeds the identified
//! clusters into periodic supercells.

pub mod config;
pub mod embedding;
pub mod error;
pub mod geometry;
pub mod identify;
pub mod parse;
pub mod pipeline;
pub mod symmetry;

pub use error::{CvmError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
