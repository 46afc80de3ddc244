//! Foundation types for the geometry reader.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`MeshId`], [`InterfaceId`], [`DomainId`] - Arena handles into the model
//! - [`Position`] - Line/column positions for scanner diagnostics
//! - [`LineIndex`] - Byte offset to line/column conversion
//! - Path helpers that resolve mesh paths against the geometry file
//! - Format constants (header literal, section keywords)
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod ids;
mod line_index;
pub mod paths;
mod position;

pub use ids::{DomainId, InterfaceId, MeshId};
pub use line_index::LineIndex;
pub use position::Position;

// Re-export text-size types for convenience
pub use text_size;
