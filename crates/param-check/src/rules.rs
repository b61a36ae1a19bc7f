use screw_types::{Dimensions, ErrorCode, DIMENSION_COUNT};

use crate::report::ValidationReport;

/// Validate a six-value dimension set.
///
/// Pure and deterministic: no side effects, safe to call repeatedly or
/// concurrently on independent inputs. Rejects any other value count as
/// `ArgumentInvalid` without running numeric rules. Numeric sanity is
/// checked per value first; a non-positive or non-finite value aborts
/// the attempt before cross-field reasoning. Cross-field rules are then
/// all evaluated and every violation is collected.
pub fn validate(values: &[f64]) -> ValidationReport {
    let mut report = ValidationReport::new();

    if values.len() != DIMENSION_COUNT {
        report.code = ErrorCode::ArgumentInvalid;
        return report;
    }

    if !check_values(values, &mut report.violations) {
        return report;
    }

    let dims = match Dimensions::from_slice(values) {
        Some(dims) => dims,
        None => {
            report.code = ErrorCode::ArgumentInvalid;
            return report;
        }
    };
    check_relations(&dims, &mut report.violations);

    report
}

/// Per-value numeric gating, in rule order. Returns false when a value
/// of an aborting class (non-positive, non-finite) was seen; the
/// remaining rules for that call are skipped.
fn check_values(values: &[f64], violations: &mut Vec<String>) -> bool {
    for value in values {
        if *value <= 0.0 {
            violations.push("parameter must be greater than zero".to_string());
            return false;
        }
        if *value < 0.1 {
            violations.push("parameter must be at least 0.1".to_string());
            continue;
        }
        if *value >= 1000.0 {
            violations.push("parameter must be less than 1000".to_string());
        }
        if !value.is_finite() {
            violations.push("parameter is not a valid number".to_string());
            return false;
        }
    }
    true
}

/// Cross-field rules. All are evaluated; nothing short-circuits.
fn check_relations(dims: &Dimensions, violations: &mut Vec<String>) {
    let shank_length = dims.smooth_length + dims.thread_length;

    if dims.slot_depth >= dims.hat_height {
        violations.push("slot depth (m) must be less than hat height (H)".to_string());
    }
    if shank_length <= dims.hat_height {
        violations.push(
            "smooth part (l) plus thread part (b) must be greater than hat height (H)".to_string(),
        );
    }
    if dims.smooth_length > dims.thread_length {
        violations.push("smooth part (l) must not be greater than thread part (b)".to_string());
    }
    if dims.hat_diameter < 15.0 {
        violations.push("hat diameter (D) must be at least 15".to_string());
    }
    if dims.hat_diameter > 45.0 {
        violations.push("hat diameter (D) must be at most 45".to_string());
    }
    if dims.slot_depth < 4.0 {
        violations.push("slot depth (m) must be at least 4".to_string());
    }
    if dims.slot_depth > 8.0 {
        violations.push("slot depth (m) must be at most 8".to_string());
    }
    if dims.smooth_length < 5.0 {
        violations.push("smooth part (l) must be at least 5".to_string());
    }
    if dims.smooth_length > 35.0 {
        violations.push("smooth part (l) must be at most 35".to_string());
    }
    if dims.thread_length < 5.0 {
        violations.push("thread part (b) must be at least 5".to_string());
    }
    if dims.thread_length > 80.0 {
        violations.push("thread part (b) must be at most 80".to_string());
    }
    if dims.hat_height < 6.0 {
        violations.push("hat height (H) must be at least 6".to_string());
    }
    if dims.hat_height > 20.0 {
        violations.push("hat height (H) must be at most 20".to_string());
    }
    if dims.slot_width < 2.0 {
        violations.push("slot width (n) must be at least 2".to_string());
    }
    let slot_width_limit = dims.hat_diameter / 5.0;
    if dims.slot_width > slot_width_limit {
        violations.push(format!(
            "slot width (n) must be at most {}",
            slot_width_limit
        ));
    }
}
