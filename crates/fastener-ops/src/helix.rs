use geom_engine::{FaceHandle, FeatureHandle, GeomEngine, HelixSpec, PartHandle};
use tracing::debug;

use crate::types::OpError;

/// Parameters for one thread sweep attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreadSpec {
    /// Face the helix starts on (the smooth/thread boundary).
    pub start_face: Option<FaceHandle>,
    /// Face that bounds the helix height (the shank end).
    pub end_face: Option<FaceHandle>,
    /// Helix axis location on the start face.
    pub location: [f64; 2],
    /// Thread diameter.
    pub diameter: f64,
    /// Requested axial advance per turn.
    pub step: f64,
}

/// A created thread. `step` is the engine-resolved pitch; read it from
/// here, not from the request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreadSweep {
    pub feature: FeatureHandle,
    pub step: f64,
}

/// Cut a helical thread between two faces.
///
/// Build direction and sweep mode are fixed policy: a single outward
/// clockwise helix. They are not inputs.
pub fn execute_thread_sweep(
    engine: &mut dyn GeomEngine,
    part: PartHandle,
    spec: &ThreadSpec,
) -> Result<ThreadSweep, OpError> {
    let start_face = spec.start_face.ok_or(OpError::MissingArgument {
        what: "thread start face",
    })?;
    let end_face = spec.end_face.ok_or(OpError::MissingArgument {
        what: "thread end face",
    })?;
    if spec.diameter == 0.0 || !spec.diameter.is_finite() {
        return Err(OpError::MissingArgument {
            what: "thread diameter",
        });
    }
    if spec.step == 0.0 || !spec.step.is_finite() {
        return Err(OpError::MissingArgument { what: "thread step" });
    }
    if spec.diameter <= 0.0 || !spec.location[0].is_finite() || !spec.location[1].is_finite() {
        return Err(OpError::BadValue {
            what: "thread sweep parameters",
        });
    }

    let helix = HelixSpec {
        start_face,
        end_face,
        location: spec.location,
        diameter: spec.diameter,
        step: spec.step,
        outward: true,
        clockwise: true,
    };
    let sweep = engine.sweep_helix(part, &helix)?;
    debug!(requested = spec.step, resolved = sweep.step, "thread swept");
    Ok(ThreadSweep {
        feature: sweep.feature,
        step: sweep.step,
    })
}
