use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in sketch coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectProfile {
    /// Center of the rectangle.
    pub center: [f64; 2],
    /// Extent along the sketch X axis.
    pub width: f64,
    /// Extent along the sketch Y axis.
    pub height: f64,
}

/// A regular polygon described by its inscribed circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonProfile {
    /// Center of the polygon.
    pub center: [f64; 2],
    /// Corner count.
    pub sides: i32,
    /// Radius of the largest circle fitting inside the polygon.
    pub inscribed_radius: f64,
}

/// One closed shape inside a slot profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SlotShape {
    Rect(RectProfile),
    Polygon(PolygonProfile),
}

/// A 2D profile consumed by a cut extrusion. An empty shape list means
/// the variant produces no cut at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotProfile {
    pub shapes: Vec<SlotShape>,
}

impl SlotProfile {
    pub fn empty() -> Self {
        Self { shapes: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
