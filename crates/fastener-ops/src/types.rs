use geom_engine::{Direction, EngineError, FeatureKind};
use screw_types::ErrorCode;

/// Errors from geometry primitives.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OpError {
    #[error("missing required argument: {what}")]
    MissingArgument { what: &'static str },

    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("numeric value rejected: {what}")]
    BadValue { what: &'static str },

    #[error("extrusion direction {direction:?} is not supported")]
    DirectionNotSupported { direction: Direction },

    #[error("feature kind {kind:?} is not supported for extrusion")]
    KindNotSupported { kind: FeatureKind },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl OpError {
    /// The caller-visible error code of this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            OpError::MissingArgument { .. } => ErrorCode::ArgumentNull,
            OpError::InvalidArgument { .. } => ErrorCode::ArgumentInvalid,
            OpError::BadValue { .. } => ErrorCode::DoubleValueValidationError,
            OpError::DirectionNotSupported { .. } => ErrorCode::DirectionNotSupported,
            OpError::KindNotSupported { .. } => ErrorCode::OperationNotSupported,
            OpError::Engine(e) => e.code(),
        }
    }
}
