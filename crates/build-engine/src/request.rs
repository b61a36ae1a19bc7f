use serde::{Deserialize, Serialize};

use geom_engine::GeomEngine;
use screw_types::SlotStyle;

use crate::pipeline::{build_screw, BuildOutcome};

/// A data-driven build request, for batch regeneration from JSON.
///
/// The dimension count is deliberately unchecked here; the validator
/// owns that rule and reports `ArgumentInvalid` for malformed sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildRequest {
    pub dimensions: Vec<f64>,
    pub slot: SlotStyle,
}

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("malformed build request: {0}")]
    Parse(#[from] serde_json::Error),
}

impl BuildRequest {
    pub fn from_json(text: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, RequestError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Run this request against an engine.
    pub fn run(&self, engine: &mut dyn GeomEngine) -> BuildOutcome {
        build_screw(engine, &self.dimensions, self.slot)
    }
}
