//! Mark encoding channels and their value stores

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Visual channel a value or field can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkEncoding {
    X,
    Y,
    X2,
    Y2,
    XOffset,
    YOffset,
    Theta,
    Theta2,
    Radius,
    Radius2,
    Latitude,
    Longitude,
    Latitude2,
    Longitude2,
    Color,
    Fill,
    Stroke,
    Opacity,
    FillOpacity,
    StrokeOpacity,
    StrokeWidth,
    StrokeDash,
    Size,
    Angle,
    Shape,
    Text,
    Tooltip,
    Href,
    Url,
    Description,
    Detail,
    Key,
    Order,
    Facet,
    Row,
    Column,
}

impl MarkEncoding {
    /// Every channel, in declaration order
    pub const ALL: [MarkEncoding; 36] = [
        MarkEncoding::X,
        MarkEncoding::Y,
        MarkEncoding::X2,
        MarkEncoding::Y2,
        MarkEncoding::XOffset,
        MarkEncoding::YOffset,
        MarkEncoding::Theta,
        MarkEncoding::Theta2,
        MarkEncoding::Radius,
        MarkEncoding::Radius2,
        MarkEncoding::Latitude,
        MarkEncoding::Longitude,
        MarkEncoding::Latitude2,
        MarkEncoding::Longitude2,
        MarkEncoding::Color,
        MarkEncoding::Fill,
        MarkEncoding::Stroke,
        MarkEncoding::Opacity,
        MarkEncoding::FillOpacity,
        MarkEncoding::StrokeOpacity,
        MarkEncoding::StrokeWidth,
        MarkEncoding::StrokeDash,
        MarkEncoding::Size,
        MarkEncoding::Angle,
        MarkEncoding::Shape,
        MarkEncoding::Text,
        MarkEncoding::Tooltip,
        MarkEncoding::Href,
        MarkEncoding::Url,
        MarkEncoding::Description,
        MarkEncoding::Detail,
        MarkEncoding::Key,
        MarkEncoding::Order,
        MarkEncoding::Facet,
        MarkEncoding::Row,
        MarkEncoding::Column,
    ];
    
    /// Channel name as used in chart specifications
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkEncoding::X => "x",
            MarkEncoding::Y => "y",
            MarkEncoding::X2 => "x2",
            MarkEncoding::Y2 => "y2",
            MarkEncoding::XOffset => "xOffset",
            MarkEncoding::YOffset => "yOffset",
            MarkEncoding::Theta => "theta",
            MarkEncoding::Theta2 => "theta2",
            MarkEncoding::Radius => "radius",
            MarkEncoding::Radius2 => "radius2",
            MarkEncoding::Latitude => "latitude",
            MarkEncoding::Longitude => "longitude",
            MarkEncoding::Latitude2 => "latitude2",
            MarkEncoding::Longitude2 => "longitude2",
            MarkEncoding::Color => "color",
            MarkEncoding::Fill => "fill",
            MarkEncoding::Stroke => "stroke",
            MarkEncoding::Opacity => "opacity",
            MarkEncoding::FillOpacity => "fillOpacity",
            MarkEncoding::StrokeOpacity => "strokeOpacity",
            MarkEncoding::StrokeWidth => "strokeWidth",
            MarkEncoding::StrokeDash => "strokeDash",
            MarkEncoding::Size => "size",
            MarkEncoding::Angle => "angle",
            MarkEncoding::Shape => "shape",
            MarkEncoding::Text => "text",
            MarkEncoding::Tooltip => "tooltip",
            MarkEncoding::Href => "href",
            MarkEncoding::Url => "url",
            MarkEncoding::Description => "description",
            MarkEncoding::Detail => "detail",
            MarkEncoding::Key => "key",
            MarkEncoding::Order => "order",
            MarkEncoding::Facet => "facet",
            MarkEncoding::Row => "row",
            MarkEncoding::Column => "column",
        }
    }
}

impl std::fmt::Display for MarkEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Channel to value bindings of a view.
///
/// Values are opaque: a field definition, a literal, a condition. No check is
/// made that a value suits its channel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncodingChannels {
    values: AHashMap<MarkEncoding, Value>,
}

impl EncodingChannels {
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Bind a value, replacing any previous binding of the channel
    pub fn set(&mut self, channel: MarkEncoding, value: Value) -> Option<Value> {
        self.values.insert(channel, value)
    }
    
    pub fn get(&self, channel: MarkEncoding) -> Option<&Value> {
        self.values.get(&channel)
    }
    
    /// Unbind a channel; unbound channels are left alone
    pub fn delete(&mut self, channel: MarkEncoding) -> Option<Value> {
        self.values.remove(&channel)
    }
    
    pub fn contains(&self, channel: MarkEncoding) -> bool {
        self.values.contains_key(&channel)
    }
    
    pub fn len(&self) -> usize {
        self.values.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    
    pub fn clear(&mut self) {
        self.values.clear();
    }
    
    /// Bindings in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (MarkEncoding, &Value)> {
        self.values.iter().map(|(channel, value)| (*channel, value))
    }
}

impl FromIterator<(MarkEncoding, Value)> for EncodingChannels {
    fn from_iter<I: IntoIterator<Item = (MarkEncoding, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
