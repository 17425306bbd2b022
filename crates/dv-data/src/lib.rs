//! Data-side helpers for the view tree
//!
//! The view tree only knows the [`GraphNode`](dv_core::GraphNode) contract.
//! This crate provides an in-memory implementation of it, a registry of named
//! nodes and the JSON configuration that builds them.

pub mod config;
pub mod memory;

use thiserror::Error;

// Re-exports
pub use config::{DataGraphConfig, DataNodeConfig};
pub use memory::{GraphNodeSet, MemoryGraphNode};

/// Errors that can occur in data operations
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    
    #[error("Invalid data node configuration: {0}")]
    InvalidConfig(String),
}

pub type DataResult<T> = Result<T, DataError>;
