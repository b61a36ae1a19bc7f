//! MockEngine: deterministic test double implementing GeomEngine.
//!
//! Tracks parts, sketches, features and faces with predictable handle
//! allocation, counts begin/end edit cycles per sketch, and supports
//! one-shot failure injection so pipeline halt paths can be exercised.

use std::collections::HashMap;

use screw_types::{PolygonProfile, RectProfile, SlotShape};

use crate::traits::GeomEngine;
use crate::types::*;

/// A recorded 2D shape inside a mock sketch.
#[derive(Debug, Clone, PartialEq)]
enum MockShape {
    Circle { center: [f64; 2], radius: f64 },
    Rect(RectProfile),
    Polygon(PolygonProfile),
}

#[derive(Debug, Clone)]
struct MockPart {
    name: String,
    sketches: Vec<u64>,
    features: Vec<u64>,
}

#[derive(Debug, Clone)]
struct MockSketch {
    part: u64,
    plane: SketchPlane,
    editing: bool,
    begins: usize,
    ends: usize,
    shapes: Vec<MockShape>,
}

#[derive(Debug, Clone)]
enum MockFeatureKind {
    Extrusion { cut: bool },
    Helix { step: f64 },
}

#[derive(Debug, Clone)]
struct MockFeature {
    kind: MockFeatureKind,
    caps: (u64, u64),
}

/// Which call the next injected failure fires on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectedFailure {
    NewSketch,
    Extrude,
    SweepHelix,
}

/// Structural summary of a part, for equivalence assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartSummary {
    pub sketches: usize,
    pub base_extrusions: usize,
    pub cut_extrusions: usize,
    pub helixes: usize,
}

/// Deterministic test double for the geometry engine.
pub struct MockEngine {
    next_handle: u64,
    parts: HashMap<u64, MockPart>,
    sketches: HashMap<u64, MockSketch>,
    features: HashMap<u64, MockFeature>,
    faces: HashMap<u64, u64>,
    fail_next: Option<InjectedFailure>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            parts: HashMap::new(),
            sketches: HashMap::new(),
            features: HashMap::new(),
            faces: HashMap::new(),
            fail_next: None,
        }
    }

    /// Arm a one-shot failure: the next matching call returns
    /// CreateFailed instead of creating anything.
    pub fn fail_next(&mut self, op: InjectedFailure) {
        self.fail_next = Some(op);
    }

    fn take_injected(&mut self, op: InjectedFailure) -> bool {
        if self.fail_next == Some(op) {
            self.fail_next = None;
            return true;
        }
        false
    }

    fn alloc(&mut self) -> u64 {
        let id = self.next_handle;
        self.next_handle += 1;
        id
    }

    fn alloc_feature(&mut self, part: u64, kind: MockFeatureKind) -> FeatureHandle {
        let id = self.alloc();
        let positive = self.alloc();
        let negative = self.alloc();
        self.faces.insert(positive, id);
        self.faces.insert(negative, id);
        self.features.insert(
            id,
            MockFeature {
                kind,
                caps: (positive, negative),
            },
        );
        if let Some(p) = self.parts.get_mut(&part) {
            p.features.push(id);
        }
        FeatureHandle(id)
    }

    // ── Introspection for tests ────────────────────────────────────────

    /// (begins, ends) recorded for a sketch.
    pub fn edit_cycles(&self, sketch: SketchHandle) -> Option<(usize, usize)> {
        self.sketches.get(&sketch.0).map(|s| (s.begins, s.ends))
    }

    /// Sketches currently left in an open edit.
    pub fn open_edit_count(&self) -> usize {
        self.sketches.values().filter(|s| s.editing).count()
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn part_name(&self, part: PartHandle) -> Option<&str> {
        self.parts.get(&part.0).map(|p| p.name.as_str())
    }

    /// Part handles in creation order.
    pub fn parts(&self) -> Vec<PartHandle> {
        let mut ids: Vec<u64> = self.parts.keys().copied().collect();
        ids.sort_unstable();
        ids.into_iter().map(PartHandle).collect()
    }

    pub fn sketch_count(&self, part: PartHandle) -> usize {
        self.parts.get(&part.0).map_or(0, |p| p.sketches.len())
    }

    pub fn shape_count(&self, sketch: SketchHandle) -> usize {
        self.sketches.get(&sketch.0).map_or(0, |s| s.shapes.len())
    }

    /// The plane a sketch was created on.
    pub fn sketch_plane(&self, sketch: SketchHandle) -> Option<SketchPlane> {
        self.sketches.get(&sketch.0).map(|s| s.plane)
    }

    /// Circles drawn into a sketch, as (center, radius), in draw order.
    pub fn circles(&self, sketch: SketchHandle) -> Vec<([f64; 2], f64)> {
        self.sketches.get(&sketch.0).map_or_else(Vec::new, |s| {
            s.shapes
                .iter()
                .filter_map(|shape| match shape {
                    MockShape::Circle { center, radius } => Some((*center, *radius)),
                    _ => None,
                })
                .collect()
        })
    }

    /// Slot shapes drawn into a sketch, in draw order.
    pub fn drawn_slot_shapes(&self, sketch: SketchHandle) -> Vec<SlotShape> {
        self.sketches.get(&sketch.0).map_or_else(Vec::new, |s| {
            s.shapes
                .iter()
                .filter_map(|shape| match shape {
                    MockShape::Rect(rect) => Some(SlotShape::Rect(*rect)),
                    MockShape::Polygon(polygon) => Some(SlotShape::Polygon(*polygon)),
                    MockShape::Circle { .. } => None,
                })
                .collect()
        })
    }

    /// Resolved steps of the helix features of a part, in creation order.
    pub fn helix_steps(&self, part: PartHandle) -> Vec<f64> {
        self.parts.get(&part.0).map_or_else(Vec::new, |p| {
            p.features
                .iter()
                .filter_map(|id| match self.features.get(id).map(|f| &f.kind) {
                    Some(MockFeatureKind::Helix { step }) => Some(*step),
                    _ => None,
                })
                .collect()
        })
    }

    /// Sketch handles of a part, in creation order.
    pub fn part_sketches(&self, part: PartHandle) -> Vec<SketchHandle> {
        self.parts
            .get(&part.0)
            .map_or_else(Vec::new, |p| p.sketches.iter().map(|&s| SketchHandle(s)).collect())
    }

    /// Structural summary used by idempotence tests.
    pub fn summarize(&self, part: PartHandle) -> PartSummary {
        let mut summary = PartSummary {
            sketches: self.sketch_count(part),
            base_extrusions: 0,
            cut_extrusions: 0,
            helixes: 0,
        };
        if let Some(p) = self.parts.get(&part.0) {
            for id in &p.features {
                match self.features.get(id).map(|f| &f.kind) {
                    Some(MockFeatureKind::Extrusion { cut: false }) => {
                        summary.base_extrusions += 1
                    }
                    Some(MockFeatureKind::Extrusion { cut: true }) => summary.cut_extrusions += 1,
                    Some(MockFeatureKind::Helix { .. }) => summary.helixes += 1,
                    None => {}
                }
            }
        }
        summary
    }

    fn open_sketch(&mut self, sketch: SketchHandle) -> Result<&mut MockSketch, EngineError> {
        match self.sketches.get_mut(&sketch.0) {
            Some(s) if s.editing => Ok(s),
            Some(_) => Err(EngineError::DefinitionMissing),
            None => Err(EngineError::DefinitionMissing),
        }
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GeomEngine for MockEngine {
    fn create_part(&mut self, config: &SessionConfig) -> Result<PartHandle, EngineError> {
        let id = self.alloc();
        self.parts.insert(
            id,
            MockPart {
                name: config.name.clone(),
                sketches: Vec::new(),
                features: Vec::new(),
            },
        );
        Ok(PartHandle(id))
    }

    fn new_sketch(
        &mut self,
        part: PartHandle,
        plane: SketchPlane,
    ) -> Result<SketchHandle, EngineError> {
        if self.take_injected(InjectedFailure::NewSketch) {
            return Err(EngineError::CreateFailed { what: "sketch" });
        }
        if !self.parts.contains_key(&part.0) {
            return Err(EngineError::NullEntity { what: "part" });
        }
        if let SketchPlane::Face(face) = plane {
            if !self.faces.contains_key(&face.0) {
                return Err(EngineError::NullEntity { what: "plane face" });
            }
        }
        let id = self.alloc();
        self.sketches.insert(
            id,
            MockSketch {
                part: part.0,
                plane,
                editing: false,
                begins: 0,
                ends: 0,
                shapes: Vec::new(),
            },
        );
        if let Some(p) = self.parts.get_mut(&part.0) {
            p.sketches.push(id);
        }
        Ok(SketchHandle(id))
    }

    fn begin_edit(&mut self, sketch: SketchHandle) -> Result<(), EngineError> {
        match self.sketches.get_mut(&sketch.0) {
            Some(s) => {
                s.editing = true;
                s.begins += 1;
                Ok(())
            }
            None => Err(EngineError::DefinitionMissing),
        }
    }

    fn end_edit(&mut self, sketch: SketchHandle) {
        if let Some(s) = self.sketches.get_mut(&sketch.0) {
            s.editing = false;
            s.ends += 1;
        }
    }

    fn draw_circle(
        &mut self,
        sketch: SketchHandle,
        center: [f64; 2],
        radius: f64,
    ) -> Result<(), EngineError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(EngineError::CreateFailed { what: "circle" });
        }
        let s = self.open_sketch(sketch)?;
        s.shapes.push(MockShape::Circle { center, radius });
        Ok(())
    }

    fn draw_rectangle(
        &mut self,
        sketch: SketchHandle,
        rect: &RectProfile,
    ) -> Result<(), EngineError> {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return Err(EngineError::CreateFailed { what: "rectangle" });
        }
        let s = self.open_sketch(sketch)?;
        s.shapes.push(MockShape::Rect(*rect));
        Ok(())
    }

    fn draw_polygon(
        &mut self,
        sketch: SketchHandle,
        polygon: &PolygonProfile,
    ) -> Result<(), EngineError> {
        if polygon.sides < 3 || !polygon.inscribed_radius.is_finite()
            || polygon.inscribed_radius <= 0.0
        {
            return Err(EngineError::CreateFailed { what: "polygon" });
        }
        let s = self.open_sketch(sketch)?;
        s.shapes.push(MockShape::Polygon(*polygon));
        Ok(())
    }

    fn extrude(
        &mut self,
        part: PartHandle,
        sketch: SketchHandle,
        cut: bool,
        _direction: Direction,
        depth: f64,
    ) -> Result<FeatureHandle, EngineError> {
        if self.take_injected(InjectedFailure::Extrude) {
            return Err(EngineError::CreateFailed { what: "extrusion" });
        }
        if !self.parts.contains_key(&part.0) {
            return Err(EngineError::NullEntity { what: "part" });
        }
        let profile_drawn = match self.sketches.get(&sketch.0) {
            Some(s) if s.part == part.0 => !s.shapes.is_empty(),
            _ => return Err(EngineError::NullEntity { what: "sketch" }),
        };
        if !profile_drawn || !depth.is_finite() || depth <= 0.0 {
            return Err(EngineError::CreateFailed { what: "extrusion" });
        }
        Ok(self.alloc_feature(part.0, MockFeatureKind::Extrusion { cut }))
    }

    fn sweep_helix(
        &mut self,
        part: PartHandle,
        spec: &HelixSpec,
    ) -> Result<HelixSweep, EngineError> {
        if self.take_injected(InjectedFailure::SweepHelix) {
            return Err(EngineError::CreateFailed { what: "helix" });
        }
        if !self.parts.contains_key(&part.0) {
            return Err(EngineError::NullEntity { what: "part" });
        }
        if !self.faces.contains_key(&spec.start_face.0) {
            return Err(EngineError::NullEntity { what: "start face" });
        }
        if !self.faces.contains_key(&spec.end_face.0) {
            return Err(EngineError::NullEntity { what: "end face" });
        }
        if !spec.diameter.is_finite() || spec.diameter <= 0.0 {
            return Err(EngineError::CreateFailed { what: "helix diameter" });
        }
        if !spec.step.is_finite() || spec.step <= 0.0 {
            return Err(EngineError::CreateFailed { what: "helix step" });
        }
        // The engine snaps the step to its internal grid; callers read
        // the resolved value back instead of assuming equality.
        let resolved = (spec.step * 1_048_576.0).round() / 1_048_576.0;
        let feature = self.alloc_feature(part.0, MockFeatureKind::Helix { step: resolved });
        Ok(HelixSweep { feature, step: resolved })
    }

    fn end_caps(&self, feature: FeatureHandle) -> Result<CapFaces, EngineError> {
        match self.features.get(&feature.0) {
            Some(f) => Ok(CapFaces {
                positive: FaceHandle(f.caps.0),
                negative: FaceHandle(f.caps.1),
            }),
            None => Err(EngineError::NullEntity { what: "feature" }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn config() -> SessionConfig {
        SessionConfig {
            name: "test".to_string(),
            session_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn edit_cycles_are_counted() {
        let mut engine = MockEngine::new();
        let part = engine.create_part(&config()).unwrap();
        let sketch = engine
            .new_sketch(part, SketchPlane::Datum(DatumKind::PlaneXoy))
            .unwrap();

        engine.begin_edit(sketch).unwrap();
        engine.draw_circle(sketch, [0.0, 0.0], 5.0).unwrap();
        engine.end_edit(sketch);

        assert_eq!(engine.edit_cycles(sketch), Some((1, 1)));
        assert_eq!(engine.open_edit_count(), 0);
    }

    #[test]
    fn drawing_outside_an_edit_is_rejected() {
        let mut engine = MockEngine::new();
        let part = engine.create_part(&config()).unwrap();
        let sketch = engine
            .new_sketch(part, SketchPlane::Datum(DatumKind::PlaneXoy))
            .unwrap();

        let result = engine.draw_circle(sketch, [0.0, 0.0], 5.0);
        assert!(matches!(result, Err(EngineError::DefinitionMissing)));
    }

    #[test]
    fn extruding_an_empty_sketch_fails() {
        let mut engine = MockEngine::new();
        let part = engine.create_part(&config()).unwrap();
        let sketch = engine
            .new_sketch(part, SketchPlane::Datum(DatumKind::PlaneXoy))
            .unwrap();

        let result = engine.extrude(part, sketch, false, Direction::Normal, 10.0);
        assert!(matches!(
            result,
            Err(EngineError::CreateFailed { what: "extrusion" })
        ));
    }

    #[test]
    fn extrusion_exposes_two_cap_faces() {
        let mut engine = MockEngine::new();
        let part = engine.create_part(&config()).unwrap();
        let sketch = engine
            .new_sketch(part, SketchPlane::Datum(DatumKind::PlaneXoy))
            .unwrap();
        engine.begin_edit(sketch).unwrap();
        engine.draw_circle(sketch, [0.0, 0.0], 5.0).unwrap();
        engine.end_edit(sketch);

        let feature = engine
            .extrude(part, sketch, false, Direction::Normal, 10.0)
            .unwrap();
        let caps = engine.end_caps(feature).unwrap();
        assert_ne!(caps.positive, caps.negative);

        // Caps are usable as sketch planes.
        let on_cap = engine.new_sketch(part, SketchPlane::Face(caps.positive));
        assert!(on_cap.is_ok());
    }

    #[test]
    fn injected_failure_fires_once() {
        let mut engine = MockEngine::new();
        let part = engine.create_part(&config()).unwrap();
        engine.fail_next(InjectedFailure::NewSketch);

        let first = engine.new_sketch(part, SketchPlane::Datum(DatumKind::PlaneXoy));
        assert!(first.is_err());
        let second = engine.new_sketch(part, SketchPlane::Datum(DatumKind::PlaneXoy));
        assert!(second.is_ok());
    }

    #[test]
    fn helix_step_is_echoed_back() {
        let mut engine = MockEngine::new();
        let part = engine.create_part(&config()).unwrap();
        let sketch = engine
            .new_sketch(part, SketchPlane::Datum(DatumKind::PlaneXoy))
            .unwrap();
        engine.begin_edit(sketch).unwrap();
        engine.draw_circle(sketch, [0.0, 0.0], 5.0).unwrap();
        engine.end_edit(sketch);
        let feature = engine
            .extrude(part, sketch, false, Direction::Normal, 10.0)
            .unwrap();
        let caps = engine.end_caps(feature).unwrap();

        let spec = HelixSpec {
            start_face: caps.negative,
            end_face: caps.positive,
            location: [0.0, 0.0],
            diameter: 12.0,
            step: 2.5,
            outward: true,
            clockwise: true,
        };
        let sweep = engine.sweep_helix(part, &spec).unwrap();
        assert!((sweep.step - 2.5).abs() < 1e-6);
    }
}
