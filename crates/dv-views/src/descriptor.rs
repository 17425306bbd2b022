//! Declarative view tree configuration
//!
//! A [`ViewDescriptor`] describes a view and its children in JSON. Building it
//! produces a tree with consistent parent links, with data nodes resolved by
//! name against a [`GraphNodeSet`].

use std::collections::BTreeMap;
use std::path::Path;

use dv_data::{DataGraphConfig, GraphNodeSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::encoding::MarkEncoding;
use crate::options::{Bounds, ChartConfig, Datasets, LayoutType, Projection};
use crate::view_node::View;
use crate::{ViewError, ViewResult};

/// Configuration for a single view and its subtree
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewDescriptor {
    pub description: String,
    pub layout: LayoutType,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub bounds: Option<Bounds>,
    pub config: Option<ChartConfig>,
    pub projection: Option<Projection>,
    pub datasets: Option<Datasets>,

    /// Channel bindings
    pub encodings: BTreeMap<MarkEncoding, Value>,

    /// Channel overrides, kept apart from `encodings`
    pub overwritten_encodings: BTreeMap<MarkEncoding, Value>,

    /// Name of the data node this view is bound to
    pub data_node: Option<String>,

    pub children: Vec<ViewDescriptor>,
}

impl ViewDescriptor {
    /// Build the described tree, resolving data nodes against `nodes`
    pub fn build(&self, nodes: &GraphNodeSet) -> ViewResult<View> {
        let view = View::new(Vec::new(), self.layout, None);

        view.with_node_mut(|node| {
            node.description = self.description.clone();
            node.width = self.width;
            node.height = self.height;
            node.bounds = self.bounds.clone();
            node.config = self.config.clone();
            node.projection = self.projection.clone();
            node.datasets = self.datasets.clone();

            for (channel, value) in &self.encodings {
                node.encodings_mut().set(*channel, value.clone());
            }
            for (channel, value) in &self.overwritten_encodings {
                node.overwritten_encodings_mut().set(*channel, value.clone());
            }
        });

        if let Some(name) = &self.data_node {
            let node = nodes
                .get(name)
                .ok_or_else(|| ViewError::UnknownDataNode(name.clone()))?;
            view.set_data_transformation_node(Some(node));
        }

        for child in &self.children {
            view.push_child(child.build(nodes)?);
        }

        Ok(view)
    }
}

/// A view tree together with the data nodes it refers to
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ViewTreeConfig {
    #[serde(default)]
    pub data: DataGraphConfig,

    pub view: ViewDescriptor,
}

impl ViewTreeConfig {
    /// Parse from a JSON string
    pub fn from_json_str(json: &str) -> ViewResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> ViewResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Build the data nodes, then the view tree bound to them
    pub fn build(&self) -> ViewResult<(View, GraphNodeSet)> {
        let nodes = self.data.build()?;
        let root = self.view.build(&nodes)?;

        tracing::debug!(
            "Built view tree {} with {} views over {} data nodes",
            root.id(),
            root.flat_hierarchy().len(),
            nodes.len()
        );
        Ok((root, nodes))
    }
}
