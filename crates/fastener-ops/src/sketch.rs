use geom_engine::{DatumKind, GeomEngine, PartHandle, SketchHandle, SketchPlane};
use tracing::debug;

use crate::types::OpError;

/// Create a sketch on a datum plane or an existing face.
///
/// Only the three canonical orthogonal planes can host a sketch; any
/// other datum kind is rejected before the engine is consulted.
pub fn create_sketch(
    engine: &mut dyn GeomEngine,
    part: PartHandle,
    plane: SketchPlane,
) -> Result<SketchHandle, OpError> {
    if let SketchPlane::Datum(kind) = plane {
        match kind {
            DatumKind::PlaneXoy | DatumKind::PlaneXoz | DatumKind::PlaneYoz => {}
            other => {
                return Err(OpError::InvalidArgument {
                    reason: format!("datum {:?} cannot host a sketch", other),
                });
            }
        }
    }
    debug!(?plane, "creating sketch");
    Ok(engine.new_sketch(part, plane)?)
}

/// Run a drawing closure inside a scoped sketch edit.
///
/// The edit is ended on every exit path, including a failing closure;
/// leaving the engine in an open edit state would lock the document.
pub fn edit_sketch<T>(
    engine: &mut dyn GeomEngine,
    sketch: SketchHandle,
    draw: impl FnOnce(&mut dyn GeomEngine, SketchHandle) -> Result<T, OpError>,
) -> Result<T, OpError> {
    engine.begin_edit(sketch)?;
    let outcome = draw(engine, sketch);
    engine.end_edit(sketch);
    outcome
}
