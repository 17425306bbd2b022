//! In-memory graph nodes

use std::sync::Arc;

use ahash::AHashMap;
use dv_core::data::{Data, GraphNode, Transform};
use parking_lot::RwLock;

/// Mutable contents of a memory node
#[derive(Debug, Clone, Default)]
struct NodeState {
    data: Option<Arc<Data>>,
    transform: Vec<Transform>,
}

/// Graph node holding its dataset and transform pipeline in memory.
///
/// Clones share the same state, so a view bound to one clone observes
/// updates made through another.
#[derive(Debug, Clone)]
pub struct MemoryGraphNode {
    name: String,
    state: Arc<RwLock<NodeState>>,
}

impl MemoryGraphNode {
    /// Create an empty node
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Arc::new(RwLock::new(NodeState::default())),
        }
    }
    
    /// Set the initial dataset
    pub fn with_data(self, data: Data) -> Self {
        self.set_data(data);
        self
    }
    
    /// Set the initial transform pipeline
    pub fn with_transform(self, transform: Vec<Transform>) -> Self {
        self.set_transform(transform);
        self
    }
    
    /// Replace the dataset
    pub fn set_data(&self, data: Data) {
        self.state.write().data = Some(Arc::new(data));
    }
    
    /// Remove the dataset
    pub fn clear_data(&self) {
        self.state.write().data = None;
    }
    
    /// Replace the transform pipeline
    pub fn set_transform(&self, transform: Vec<Transform>) {
        self.state.write().transform = transform;
    }
    
    /// Append a step to the transform pipeline
    pub fn push_transform(&self, step: Transform) {
        self.state.write().transform.push(step);
    }
    
    /// Node name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl GraphNode for MemoryGraphNode {
    fn schema(&self) -> anyhow::Result<Option<Arc<Data>>> {
        Ok(self.state.read().data.clone())
    }
    
    fn transform(&self) -> anyhow::Result<Vec<Transform>> {
        Ok(self.state.read().transform.clone())
    }
    
    fn node_name(&self) -> &str {
        &self.name
    }
}

/// Named graph nodes that views can be bound to
#[derive(Default)]
pub struct GraphNodeSet {
    nodes: AHashMap<String, Arc<dyn GraphNode>>,
}

impl GraphNodeSet {
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Register a node under its own name, replacing any previous node with
    /// that name
    pub fn insert(&mut self, node: Arc<dyn GraphNode>) -> Option<Arc<dyn GraphNode>> {
        let name = node.node_name().to_string();
        if self.nodes.contains_key(&name) {
            tracing::warn!("Replacing data node '{}'", name);
        }
        self.nodes.insert(name, node)
    }
    
    /// Look a node up by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn GraphNode>> {
        self.nodes.get(name).cloned()
    }
    
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }
    
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    
    /// Registered node names, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }
}
