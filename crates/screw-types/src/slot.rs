use serde::{Deserialize, Serialize};

/// The screwdriver slot cut into the hat, selected at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SlotStyle {
    /// No slot is cut.
    WithoutHole,
    /// A single rectangular slot.
    Flathead,
    /// Two perpendicular rectangular slots forming a cross.
    Crosshead,
    /// An N-sided regular polygon recess.
    Polygon { sides: i32 },
}
