//! View tree for composing chart specifications
//!
//! A chart is a tree of views. Each view arranges its children with a
//! [`LayoutType`], binds visual channels through two encoding stores and may
//! be bound to a node of the data-transformation graph, which supplies its
//! dataset and transform pipeline on demand.

mod descriptor;
mod encoding;
mod options;
mod view_node;

pub use descriptor::{ViewDescriptor, ViewTreeConfig};
pub use encoding::{EncodingChannels, MarkEncoding};
pub use options::{Bounds, ChartConfig, Datasets, LayoutType, Projection};
pub use view_node::{View, ViewNode, WeakView};

pub use dv_core::data::{Data, GraphNode, Transform};
pub use dv_core::ViewId;

use dv_data::DataError;
use thiserror::Error;

/// Errors raised while building view trees from configuration
#[derive(Error, Debug)]
pub enum ViewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    
    #[error("Data error: {0}")]
    Data(#[from] DataError),
    
    #[error("Unknown data node '{0}'")]
    UnknownDataNode(String),
}

pub type ViewResult<T> = Result<T, ViewError>;
