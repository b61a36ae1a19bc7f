use geom_engine::{Direction, FeatureHandle, FeatureKind, GeomEngine, PartHandle, SketchHandle};
use tracing::debug;

use crate::types::OpError;

/// Parameters for one extrusion attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrusionSpec {
    pub kind: FeatureKind,
    pub sketch: Option<SketchHandle>,
    pub direction: Direction,
    pub depth: f64,
}

/// Execute a base or cut extrusion of a sketch profile.
///
/// `MiddlePlane` and `Both` are rejected regardless of kind or depth:
/// the engine may support them, this system does not. Likewise only the
/// two extrusion kinds are accepted from a sketch source.
pub fn execute_extrusion(
    engine: &mut dyn GeomEngine,
    part: PartHandle,
    spec: &ExtrusionSpec,
) -> Result<FeatureHandle, OpError> {
    match spec.direction {
        Direction::Normal | Direction::Reverse => {}
        direction => return Err(OpError::DirectionNotSupported { direction }),
    }

    let cut = match spec.kind {
        FeatureKind::BaseExtrusion => false,
        FeatureKind::CutExtrusion => true,
        kind => return Err(OpError::KindNotSupported { kind }),
    };

    let sketch = spec.sketch.ok_or(OpError::MissingArgument { what: "sketch" })?;

    if !spec.depth.is_finite() || spec.depth <= 0.0 {
        return Err(OpError::BadValue {
            what: "extrusion depth",
        });
    }

    debug!(kind = ?spec.kind, direction = ?spec.direction, depth = spec.depth, "extruding");
    Ok(engine.extrude(part, sketch, cut, spec.direction, spec.depth)?)
}
