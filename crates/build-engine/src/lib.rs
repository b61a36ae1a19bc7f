pub mod pipeline;
pub mod request;
pub mod slot;

pub use pipeline::{
    build_screw, BuildOutcome, BuildStage, SHANK_DIAMETER_DIVISOR, THREAD_STEP,
};
pub use request::{BuildRequest, RequestError};
pub use slot::{
    inscribed_circle_radius, slot_profile, INSCRIBED_RADIUS_DIVISOR, MAX_POLYGON_SIDES,
    MIN_POLYGON_SIDES,
};

use param_check::ValidationReport;

/// Validate a six-value dimension set without touching the engine.
pub fn validate_dimensions(values: &[f64]) -> ValidationReport {
    param_check::validate(values)
}
