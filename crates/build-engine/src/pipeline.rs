use tracing::{info, warn};
use uuid::Uuid;

use fastener_ops::{
    create_sketch, edit_sketch, execute_extrusion, execute_thread_sweep, ExtrusionSpec, OpError,
    ThreadSpec,
};
use geom_engine::{
    DatumKind, Direction, FaceHandle, FeatureHandle, FeatureKind, GeomEngine, PartHandle,
    SessionConfig, SketchHandle, SketchPlane,
};
use screw_types::{Dimensions, ErrorCode, SlotShape, SlotStyle};

use crate::slot::slot_profile;

/// Shank diameter as a fraction of the hat diameter.
pub const SHANK_DIAMETER_DIVISOR: f64 = 2.0;

/// Requested thread pitch. The engine-resolved value is read back from
/// the sweep result.
pub const THREAD_STEP: f64 = 2.5;

/// Pipeline states, in strict forward order. No backward transitions,
/// no retries; any step failure lands in `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStage {
    Idle,
    ParametersValidated,
    BaseSketchCreated,
    HatExtruded,
    SlotCut,
    ShankExtruded,
    ThreadSwept,
    Done,
    Failed,
}

/// What one build attempt produced.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub success: bool,
    /// The last error code of the attempt; `Ok` on success.
    pub code: ErrorCode,
    /// The stage the session ended in (`Done` or `Failed`).
    pub stage: BuildStage,
    /// Top-level feature of the finished solid.
    pub entity: Option<FeatureHandle>,
    /// Validator violations, verbatim and in rule order. Empty unless
    /// validation rejected the dimensions.
    pub violations: Vec<String>,
}

/// Transient orchestration state for one build attempt. Created at the
/// start of a build call and discarded at its end; never persisted.
struct BuildSession {
    id: Uuid,
    dims: Dimensions,
    stage: BuildStage,
    part: Option<PartHandle>,
    base_sketch: Option<SketchHandle>,
    hat: Option<FeatureHandle>,
    thread_spiral: Option<FeatureHandle>,
    last_error: ErrorCode,
}

impl BuildSession {
    fn new(dims: Dimensions) -> Self {
        Self {
            id: Uuid::new_v4(),
            dims,
            stage: BuildStage::Idle,
            part: None,
            base_sketch: None,
            hat: None,
            thread_spiral: None,
            last_error: ErrorCode::Ok,
        }
    }

    fn advance(&mut self, stage: BuildStage) {
        self.stage = stage;
        info!(session = %self.id, stage = ?self.stage, "build stage reached");
    }
}

/// Run the whole feature-construction pipeline for one screw.
///
/// Validates the six dimensions, then drives the engine through
/// sketch, hat extrusion, slot cut, shank extrusion and thread sweep.
/// Fail-fast: the first failing step halts the pipeline and its error
/// code becomes the outcome. Repeated calls with the same dimensions
/// against fresh parts produce structurally equivalent geometry.
pub fn build_screw(
    engine: &mut dyn GeomEngine,
    values: &[f64],
    slot: SlotStyle,
) -> BuildOutcome {
    let report = param_check::validate(values);
    if !report.accepted() {
        let code = if !report.code.is_ok() {
            report.code
        } else {
            ErrorCode::DoubleValueValidationError
        };
        warn!(?code, violations = report.violations.len(), "dimensions rejected");
        return BuildOutcome {
            success: false,
            code,
            stage: BuildStage::Failed,
            entity: None,
            violations: report.violations,
        };
    }

    let dims = match Dimensions::from_slice(values) {
        Some(dims) => dims,
        None => {
            return BuildOutcome {
                success: false,
                code: ErrorCode::ArgumentInvalid,
                stage: BuildStage::Failed,
                entity: None,
                violations: Vec::new(),
            }
        }
    };

    let mut session = BuildSession::new(dims);
    session.advance(BuildStage::ParametersValidated);

    match run_construction(engine, &mut session, slot) {
        Ok(()) => {
            session.advance(BuildStage::Done);
            info!(
                session = %session.id,
                part = ?session.part,
                sketch = ?session.base_sketch,
                hat = ?session.hat,
                spiral = ?session.thread_spiral,
                "screw completed, session discarded"
            );
            BuildOutcome {
                success: true,
                code: ErrorCode::Ok,
                stage: session.stage,
                entity: session.hat,
                violations: Vec::new(),
            }
        }
        Err(err) => {
            session.last_error = err.code();
            session.stage = BuildStage::Failed;
            warn!(session = %session.id, code = ?session.last_error, %err, "build failed");
            BuildOutcome {
                success: false,
                code: session.last_error,
                stage: session.stage,
                entity: None,
                violations: Vec::new(),
            }
        }
    }
}

/// The construction stages after validation. Each `?` is a pipeline
/// halt; the session's stage records the last one reached.
fn run_construction(
    engine: &mut dyn GeomEngine,
    session: &mut BuildSession,
    slot: SlotStyle,
) -> Result<(), OpError> {
    let dims = session.dims;

    let part = engine.create_part(&SessionConfig {
        name: "screw".to_string(),
        session_id: session.id,
    })?;
    session.part = Some(part);

    // Hat circle on the primary reference plane.
    let base_sketch = create_sketch(engine, part, SketchPlane::Datum(DatumKind::PlaneXoy))?;
    edit_sketch(engine, base_sketch, |eng, sk| {
        Ok(eng.draw_circle(sk, [0.0, 0.0], dims.hat_diameter / 2.0)?)
    })?;
    session.base_sketch = Some(base_sketch);
    session.advance(BuildStage::BaseSketchCreated);

    let hat = execute_extrusion(
        engine,
        part,
        &ExtrusionSpec {
            kind: FeatureKind::BaseExtrusion,
            sketch: Some(base_sketch),
            direction: Direction::Normal,
            depth: dims.hat_height,
        },
    )?;
    session.hat = Some(hat);
    session.advance(BuildStage::HatExtruded);

    let hat_caps = engine.end_caps(hat)?;
    cut_slot(engine, part, hat_caps.positive, &dims, slot)?;
    session.advance(BuildStage::SlotCut);

    let shank_radius = dims.hat_diameter / SHANK_DIAMETER_DIVISOR / 2.0;
    let smooth = extrude_section(engine, part, hat_caps.negative, shank_radius, dims.smooth_length)?;
    let smooth_caps = engine.end_caps(smooth)?;
    let threaded = extrude_section(
        engine,
        part,
        smooth_caps.positive,
        shank_radius,
        dims.thread_length,
    )?;
    session.advance(BuildStage::ShankExtruded);

    // The threaded section's near cap is the smooth/thread boundary,
    // its far cap the shank end.
    let thread_caps = engine.end_caps(threaded)?;
    let sweep = execute_thread_sweep(
        engine,
        part,
        &ThreadSpec {
            start_face: Some(thread_caps.negative),
            end_face: Some(thread_caps.positive),
            location: [0.0, 0.0],
            diameter: 2.0 * shank_radius,
            step: THREAD_STEP,
        },
    )?;
    info!(session = %session.id, step = sweep.step, "thread pitch resolved");
    session.thread_spiral = Some(sweep.feature);
    session.advance(BuildStage::ThreadSwept);

    Ok(())
}

/// Cut the screwdriver slot into the hat's top face. `WithoutHole`
/// trivially satisfies the transition: no sketch, no cut.
fn cut_slot(
    engine: &mut dyn GeomEngine,
    part: PartHandle,
    top_face: FaceHandle,
    dims: &Dimensions,
    slot: SlotStyle,
) -> Result<(), OpError> {
    if slot == SlotStyle::WithoutHole {
        return Ok(());
    }

    let sketch = create_sketch(engine, part, SketchPlane::Face(top_face))?;
    // Profile generation happens inside the edit scope; the edit is
    // closed even when generation refuses the variant's parameters.
    edit_sketch(engine, sketch, |eng, sk| {
        let profile = slot_profile(slot, dims.hat_diameter, dims.slot_width)?;
        for shape in &profile.shapes {
            match shape {
                SlotShape::Rect(rect) => eng.draw_rectangle(sk, rect)?,
                SlotShape::Polygon(polygon) => eng.draw_polygon(sk, polygon)?,
            }
        }
        Ok(())
    })?;

    execute_extrusion(
        engine,
        part,
        &ExtrusionSpec {
            kind: FeatureKind::CutExtrusion,
            sketch: Some(sketch),
            direction: Direction::Normal,
            depth: dims.slot_depth,
        },
    )?;
    Ok(())
}

/// Sketch a circle on a face and base-extrude it away from the body.
fn extrude_section(
    engine: &mut dyn GeomEngine,
    part: PartHandle,
    face: FaceHandle,
    radius: f64,
    length: f64,
) -> Result<FeatureHandle, OpError> {
    let sketch = create_sketch(engine, part, SketchPlane::Face(face))?;
    edit_sketch(engine, sketch, |eng, sk| {
        Ok(eng.draw_circle(sk, [0.0, 0.0], radius)?)
    })?;
    execute_extrusion(
        engine,
        part,
        &ExtrusionSpec {
            kind: FeatureKind::BaseExtrusion,
            sketch: Some(sketch),
            direction: Direction::Normal,
            depth: length,
        },
    )
}
