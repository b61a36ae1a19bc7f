use serde::{Deserialize, Serialize};
use uuid::Uuid;

use screw_types::ErrorCode;

/// Opaque handle to a part document in the engine.
/// Never persisted; valid only for the current engine session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PartHandle(pub(crate) u64);

/// Opaque handle to a 2D sketch feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SketchHandle(pub(crate) u64);

/// Opaque handle to a solid feature (extrusion, cut, sweep).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureHandle(pub(crate) u64);

/// Opaque handle to a face of a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceHandle(pub(crate) u64);

/// Kinds of default datum entities a part exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DatumKind {
    PlaneXoy,
    PlaneXoz,
    PlaneYoz,
    AxisOx,
    AxisOy,
    AxisOz,
    Origin,
}

/// Where a new sketch lives: a default datum entity or an existing face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchPlane {
    Datum(DatumKind),
    Face(FaceHandle),
}

/// Extrusion direction relative to the sketch plane normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Direction {
    Normal,
    Reverse,
    MiddlePlane,
    Both,
}

/// Feature kinds an engine can build from a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeatureKind {
    BaseExtrusion,
    CutExtrusion,
    BaseRotation,
    CutRotation,
}

/// Configuration for a new part document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Document name shown by the engine.
    pub name: String,
    /// Correlation id for the session that owns the part.
    pub session_id: Uuid,
}

/// Full description of a helical sweep.
///
/// `outward` and `clockwise` mirror the engine's diameter-type and
/// turn-direction switches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixSpec {
    /// Face the helix starts on.
    pub start_face: FaceHandle,
    /// Face that bounds the helix height.
    pub end_face: FaceHandle,
    /// Helix axis location on the start face.
    pub location: [f64; 2],
    /// Helix diameter.
    pub diameter: f64,
    /// Axial advance per turn.
    pub step: f64,
    pub outward: bool,
    pub clockwise: bool,
}

/// A created helical sweep. `step` is the engine-resolved value, which
/// may differ infinitesimally from the requested one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixSweep {
    pub feature: FeatureHandle,
    pub step: f64,
}

/// The two cap faces of a feature, named by the side of the sketch
/// plane they ended up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapFaces {
    pub positive: FaceHandle,
    pub negative: FaceHandle,
}

/// Errors reported by the engine itself.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
    /// The engine cannot be reached at all. The hard fault channel,
    /// distinct from ordinary construction failure.
    #[error("geometry engine unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("entity argument was null or stale: {what}")]
    NullEntity { what: &'static str },

    #[error("entity creation failed: {what}")]
    CreateFailed { what: &'static str },

    #[error("feature definition is missing")]
    DefinitionMissing,
}

impl EngineError {
    /// The caller-visible error code this engine fault surfaces as.
    pub fn code(&self) -> ErrorCode {
        match self {
            EngineError::Unavailable { .. } => ErrorCode::EntityCreateError,
            EngineError::NullEntity { .. } => ErrorCode::ArgumentNull,
            EngineError::CreateFailed { .. } => ErrorCode::EntityCreateError,
            EngineError::DefinitionMissing => ErrorCode::EntityDefinitionMissing,
        }
    }
}
