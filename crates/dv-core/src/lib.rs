//! Core functionality for the chart view platform
//! 
//! This crate provides the shared vocabulary used by the view tree and the
//! data side: view identifiers, the data-transformation graph contract and
//! the logging bootstrap.

pub mod data;
pub mod ids;
pub mod logging;

// Re-export commonly used types
pub use data::{Data, GraphNode, Transform};
pub use ids::ViewId;
