use fastener_ops::OpError;
use screw_types::{PolygonProfile, RectProfile, SlotProfile, SlotShape, SlotStyle};

/// Divisor turning the hat diameter into the slot's inscribed-circle
/// radius. The constant is inherited as-is; its derivation is not
/// documented and the numeric behavior must not drift.
pub const INSCRIBED_RADIUS_DIVISOR: f64 = 1.800001;

/// Allowed corner counts for the polygon recess.
pub const MIN_POLYGON_SIDES: i32 = 3;
pub const MAX_POLYGON_SIDES: i32 = 12;

/// Radius of the largest circle fitting inside the slot footprint.
pub fn inscribed_circle_radius(hat_diameter: f64) -> f64 {
    hat_diameter / INSCRIBED_RADIUS_DIVISOR
}

/// Build the 2D profile for a slot variant.
///
/// `WithoutHole` yields an empty profile; the rectangle variants span
/// twice the inscribed-circle radius and are `slot_width` wide; the
/// polygon variant refuses side counts outside [3, 12] rather than
/// clamping, regardless of radius.
pub fn slot_profile(
    style: SlotStyle,
    hat_diameter: f64,
    slot_width: f64,
) -> Result<SlotProfile, OpError> {
    match style {
        SlotStyle::WithoutHole => Ok(SlotProfile::empty()),

        SlotStyle::Flathead => {
            let radius = checked_radius(hat_diameter)?;
            let width = checked_width(slot_width)?;
            Ok(SlotProfile {
                shapes: vec![SlotShape::Rect(RectProfile {
                    center: [0.0, 0.0],
                    width: 2.0 * radius,
                    height: width,
                })],
            })
        }

        SlotStyle::Crosshead => {
            let radius = checked_radius(hat_diameter)?;
            let width = checked_width(slot_width)?;
            Ok(SlotProfile {
                shapes: vec![
                    SlotShape::Rect(RectProfile {
                        center: [0.0, 0.0],
                        width: 2.0 * radius,
                        height: width,
                    }),
                    SlotShape::Rect(RectProfile {
                        center: [0.0, 0.0],
                        width,
                        height: 2.0 * radius,
                    }),
                ],
            })
        }

        SlotStyle::Polygon { sides } => {
            if !(MIN_POLYGON_SIDES..=MAX_POLYGON_SIDES).contains(&sides) {
                return Err(OpError::InvalidArgument {
                    reason: format!(
                        "polygon slot needs {} to {} sides, got {}",
                        MIN_POLYGON_SIDES, MAX_POLYGON_SIDES, sides
                    ),
                });
            }
            let radius = checked_radius(hat_diameter)?;
            Ok(SlotProfile {
                shapes: vec![SlotShape::Polygon(PolygonProfile {
                    center: [0.0, 0.0],
                    sides,
                    inscribed_radius: radius,
                })],
            })
        }
    }
}

fn checked_radius(hat_diameter: f64) -> Result<f64, OpError> {
    let radius = inscribed_circle_radius(hat_diameter);
    if !radius.is_finite() || radius <= 0.0 {
        return Err(OpError::InvalidArgument {
            reason: "slot radius must be a positive number".to_string(),
        });
    }
    Ok(radius)
}

fn checked_width(slot_width: f64) -> Result<f64, OpError> {
    if !slot_width.is_finite() || slot_width <= 0.0 {
        return Err(OpError::InvalidArgument {
            reason: "slot width must be a positive number".to_string(),
        });
    }
    Ok(slot_width)
}
