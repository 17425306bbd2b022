//! JSON configuration for data nodes

use std::path::Path;
use std::sync::Arc;

use dv_core::data::{Data, Transform};
use serde::{Deserialize, Serialize};

use crate::memory::{GraphNodeSet, MemoryGraphNode};
use crate::{DataError, DataResult};

/// Configuration for a single in-memory data node
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataNodeConfig {
    /// Name views use to refer to this node
    pub name: String,
    
    /// Dataset description
    #[serde(default)]
    pub data: Option<Data>,
    
    /// Transform pipeline, in order
    #[serde(default)]
    pub transform: Vec<Transform>,
}

impl DataNodeConfig {
    /// Check the configuration is usable
    pub fn validate(&self) -> DataResult<()> {
        if self.name.trim().is_empty() {
            return Err(DataError::InvalidConfig("data node name must not be empty".to_string()));
        }
        Ok(())
    }
    
    /// Build the node described by this configuration
    pub fn build(&self) -> DataResult<MemoryGraphNode> {
        self.validate()?;
        
        let mut node = MemoryGraphNode::new(self.name.clone())
            .with_transform(self.transform.clone());
        if let Some(data) = &self.data {
            node = node.with_data(data.clone());
        }
        Ok(node)
    }
}

/// Configuration for a set of named data nodes
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DataGraphConfig {
    #[serde(default)]
    pub nodes: Vec<DataNodeConfig>,
}

impl DataGraphConfig {
    /// Parse from a JSON string
    pub fn from_json_str(json: &str) -> DataResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
    
    /// Load from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> DataResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }
    
    /// Build every configured node into a named set
    pub fn build(&self) -> DataResult<GraphNodeSet> {
        let mut set = GraphNodeSet::new();
        
        for config in &self.nodes {
            if set.contains(&config.name) {
                return Err(DataError::InvalidConfig(format!(
                    "duplicate data node name '{}'",
                    config.name
                )));
            }
            set.insert(Arc::new(config.build()?));
        }
        
        tracing::debug!("Built {} data nodes", set.len());
        Ok(set)
    }
}
