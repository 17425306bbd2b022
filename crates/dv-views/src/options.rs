//! Pass-through chart options
//!
//! These are carried by views for the chart-spec writer and never inspected
//! here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How the children of a view are arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutType {
    /// Children placed next to each other, wrapping as needed
    #[default]
    Concatenate,
    HorizontalConcatenate,
    VerticalConcatenate,
    /// Children drawn on top of each other in a shared coordinate space
    Overlay,
    /// One child repeated per field
    Repeat,
    /// One child repeated per data partition
    Facet,
}

macro_rules! opaque_option {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $name(pub Value);
            
            impl From<Value> for $name {
                fn from(value: Value) -> Self {
                    Self(value)
                }
            }
        )*
    }
}

opaque_option!(
    /// Screen-space bounds of a view
    Bounds,
    /// Chart-wide configuration (axis, legend and mark defaults)
    ChartConfig,
    /// Cartographic projection for geographic views
    Projection,
    /// Named inline datasets shared by the tree
    Datasets,
);
