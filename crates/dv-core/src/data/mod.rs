//! Data-transformation graph contract
//!
//! Views never own their data. They hold a reference to a node of a separate
//! transformation graph and ask it for the dataset and transform pipeline
//! whenever a consumer needs them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Dataset description reported by a graph node (inline values, a URL, a
/// named dataset, ...). Stored and returned verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Data(pub Value);

impl Data {
    pub fn new(value: Value) -> Self {
        Self(value)
    }
    
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// One step of a transform pipeline (filter, aggregate, bin, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transform(pub Value);

impl Transform {
    pub fn new(value: Value) -> Self {
        Self(value)
    }
    
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// Trait for nodes of the data-transformation graph
pub trait GraphNode: Send + Sync {
    /// Get the dataset this node currently produces, if any
    fn schema(&self) -> anyhow::Result<Option<Arc<Data>>>;
    
    /// Get the ordered transform pipeline of this node
    fn transform(&self) -> anyhow::Result<Vec<Transform>>;
    
    /// Get the node name (used for diagnostics)
    fn node_name(&self) -> &str;
}
