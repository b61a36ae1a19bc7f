use serde::{Deserialize, Serialize};

/// Enumerated outcome of any construction step.
///
/// Every component reports the code of its last attempt; a code is set
/// exactly once per attempt and never overwritten by a later unrelated
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ErrorCode {
    /// The attempt succeeded.
    Ok,
    /// A required argument was absent or stale.
    ArgumentNull,
    /// An argument had an unusable value (wrong count, bad datum kind,
    /// polygon sides out of range).
    ArgumentInvalid,
    /// A numeric value failed domain validation.
    DoubleValueValidationError,
    /// The engine refused to create the requested entity.
    EntityCreateError,
    /// The entity exists but its feature definition does not.
    EntityDefinitionMissing,
    /// The extrusion direction is deliberately unsupported.
    DirectionNotSupported,
    /// The requested feature kind is deliberately unsupported.
    OperationNotSupported,
}

impl ErrorCode {
    pub fn is_ok(self) -> bool {
        self == ErrorCode::Ok
    }
}
