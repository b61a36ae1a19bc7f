use screw_types::{PolygonProfile, RectProfile};

use crate::types::*;

/// The geometry-engine capability surface the build core consumes.
///
/// Implemented by MockEngine (deterministic test double); a production
/// implementation adapts a real CAD automation API. Calls block until
/// the engine responds; the surface is not safe for concurrent builds
/// against one part.
pub trait GeomEngine {
    /// Create a new part document.
    fn create_part(&mut self, config: &SessionConfig) -> Result<PartHandle, EngineError>;

    /// Create a sketch feature on a datum plane or an existing face.
    fn new_sketch(
        &mut self,
        part: PartHandle,
        plane: SketchPlane,
    ) -> Result<SketchHandle, EngineError>;

    /// Open the sketch's 2D surface for drawing.
    /// Every successful begin must be followed by exactly one end.
    fn begin_edit(&mut self, sketch: SketchHandle) -> Result<(), EngineError>;

    /// Commit the sketch edit. Safe to call with the handle of a sketch
    /// whose begin succeeded; anything drawn becomes part of the profile.
    fn end_edit(&mut self, sketch: SketchHandle);

    /// Draw a circle into an open sketch edit.
    fn draw_circle(
        &mut self,
        sketch: SketchHandle,
        center: [f64; 2],
        radius: f64,
    ) -> Result<(), EngineError>;

    /// Draw a rectangle into an open sketch edit.
    fn draw_rectangle(
        &mut self,
        sketch: SketchHandle,
        rect: &RectProfile,
    ) -> Result<(), EngineError>;

    /// Draw a regular polygon into an open sketch edit.
    fn draw_polygon(
        &mut self,
        sketch: SketchHandle,
        polygon: &PolygonProfile,
    ) -> Result<(), EngineError>;

    /// Extrude a sketch profile. `cut` subtracts from the body the
    /// sketch sits on; otherwise material is added.
    fn extrude(
        &mut self,
        part: PartHandle,
        sketch: SketchHandle,
        cut: bool,
        direction: Direction,
        depth: f64,
    ) -> Result<FeatureHandle, EngineError>;

    /// Cut a helical sweep. The returned step is the engine-resolved
    /// value and is authoritative over the requested one.
    fn sweep_helix(
        &mut self,
        part: PartHandle,
        spec: &HelixSpec,
    ) -> Result<HelixSweep, EngineError>;

    /// The two cap faces of a feature.
    fn end_caps(&self, feature: FeatureHandle) -> Result<CapFaces, EngineError>;
}
