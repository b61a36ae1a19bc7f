use screw_types::ErrorCode;

/// Outcome of one validation attempt.
///
/// Created fresh per attempt and immutable once returned. Violation
/// order is rule evaluation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Human-readable violation messages, in evaluation order.
    pub violations: Vec<String>,
    /// Structural error code. `Ok` unless the input shape itself was
    /// unusable (wrong value count); numeric violations live in
    /// `violations` only.
    pub code: ErrorCode,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
            code: ErrorCode::Ok,
        }
    }

    /// Accepted iff no rule was violated and the input shape was sound.
    pub fn accepted(&self) -> bool {
        self.code.is_ok() && self.violations.is_empty()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}
