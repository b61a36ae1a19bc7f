use param_check::validate;
use proptest::prelude::*;
use screw_types::{Dimensions, ErrorCode};

const DEFAULTS: [f64; 6] = [27.0, 5.0, 15.0, 64.0, 10.0, 5.4];

// ── Structural gating ──────────────────────────────────────────────────────

#[test]
fn default_dimensions_are_accepted() {
    let report = validate(&DEFAULTS);
    assert!(report.accepted(), "violations: {:?}", report.violations);
    assert_eq!(report.code, ErrorCode::Ok);
}

#[test]
fn default_struct_matches_default_slice() {
    assert_eq!(Dimensions::default().as_array(), DEFAULTS);
}

#[test]
fn wrong_value_count_is_argument_invalid() {
    for values in [&[27.0, 5.0][..], &[][..], &[1.0; 7][..]] {
        let report = validate(values);
        assert_eq!(report.code, ErrorCode::ArgumentInvalid);
        assert!(!report.accepted());
        assert!(
            report.violations.is_empty(),
            "no numeric rules may run on a malformed set"
        );
    }
}

// ── Per-value numeric gating ───────────────────────────────────────────────

#[test]
fn non_positive_value_aborts_before_cross_field_rules() {
    // hat_diameter of zero also violates the >= 15 bound, but the abort
    // must keep that message out.
    let report = validate(&[0.0, 5.0, 15.0, 64.0, 10.0, 5.4]);
    assert_eq!(
        report.violations,
        vec!["parameter must be greater than zero".to_string()]
    );
}

#[test]
fn nan_aborts_with_a_single_message() {
    let report = validate(&[27.0, f64::NAN, 15.0, 64.0, 10.0, 5.4]);
    assert_eq!(
        report.violations,
        vec!["parameter is not a valid number".to_string()]
    );
}

#[test]
fn positive_infinity_reports_magnitude_then_aborts() {
    // +inf trips the < 1000 bound first, then the finiteness abort.
    let report = validate(&[f64::INFINITY, 5.0, 15.0, 64.0, 10.0, 5.4]);
    assert_eq!(
        report.violations,
        vec![
            "parameter must be less than 1000".to_string(),
            "parameter is not a valid number".to_string(),
        ]
    );
}

#[test]
fn negative_infinity_aborts_as_non_positive() {
    let report = validate(&[27.0, 5.0, f64::NEG_INFINITY, 64.0, 10.0, 5.4]);
    assert_eq!(
        report.violations,
        vec!["parameter must be greater than zero".to_string()]
    );
}

#[test]
fn tiny_value_is_reported_but_does_not_abort() {
    // 0.05 is > 0, so cross-field rules still run and add their own
    // violations for the same field.
    let report = validate(&[27.0, 0.05, 15.0, 64.0, 10.0, 5.4]);
    assert!(report
        .violations
        .contains(&"parameter must be at least 0.1".to_string()));
    assert!(report
        .violations
        .contains(&"slot depth (m) must be at least 4".to_string()));
}

#[test]
fn huge_value_is_reported_but_does_not_abort() {
    let report = validate(&[27.0, 5.0, 15.0, 1000.0, 10.0, 5.4]);
    assert!(report
        .violations
        .contains(&"parameter must be less than 1000".to_string()));
    assert!(report
        .violations
        .contains(&"thread part (b) must be at most 80".to_string()));
}

// ── Cross-field rules ──────────────────────────────────────────────────────

#[test]
fn cross_field_rules_do_not_short_circuit() {
    // Slot depth reaches through the hat AND smooth > thread; the ranges
    // of every individual field are respected.
    let report = validate(&[27.0, 7.0, 30.0, 20.0, 7.0, 5.0]);
    assert!(!report.accepted());
    assert!(report
        .violations
        .contains(&"slot depth (m) must be less than hat height (H)".to_string()));
    assert!(report
        .violations
        .contains(&"smooth part (l) must not be greater than thread part (b)".to_string()));
    assert_eq!(report.violations.len(), 2);
}

#[test]
fn slot_depth_equal_to_hat_height_is_rejected() {
    let report = validate(&[27.0, 8.0, 15.0, 64.0, 8.0, 5.4]);
    assert!(report
        .violations
        .contains(&"slot depth (m) must be less than hat height (H)".to_string()));
}

#[test]
fn shank_must_be_longer_than_hat() {
    let report = validate(&[27.0, 5.0, 5.0, 8.0, 13.0, 5.4]);
    assert!(report
        .violations
        .contains(&"smooth part (l) plus thread part (b) must be greater than hat height (H)".to_string()));
}

#[test]
fn slot_width_bound_depends_on_hat_diameter() {
    // 5.4 is exactly 27 / 5; widening the slot breaks rule 9 only.
    let accepted = validate(&[27.0, 5.0, 15.0, 64.0, 10.0, 5.4]);
    assert!(accepted.accepted());

    let rejected = validate(&[27.0, 5.0, 15.0, 64.0, 10.0, 5.5]);
    assert_eq!(
        rejected.violations,
        vec!["slot width (n) must be at most 5.4".to_string()]
    );
}

#[test]
fn out_of_every_bound_set_is_rejected() {
    let report = validate(&[100500.0, 33375.0, 128325.0, 37135.0, 52340.0, 60.0]);
    assert!(!report.accepted());
    assert!(!report.violations.is_empty());
}

#[test]
fn violation_order_follows_rule_order() {
    // All four range violations present, in rule evaluation order.
    let report = validate(&[46.0, 3.0, 36.0, 64.0, 21.0, 5.0]);
    let expected = vec![
        "hat diameter (D) must be at most 45".to_string(),
        "slot depth (m) must be at least 4".to_string(),
        "smooth part (l) must be at most 35".to_string(),
        "hat height (H) must be at most 20".to_string(),
    ];
    assert_eq!(report.violations, expected);
}

#[test]
fn report_is_fresh_per_attempt() {
    let first = validate(&[0.0, 5.0, 15.0, 64.0, 10.0, 5.4]);
    let second = validate(&DEFAULTS);
    assert_eq!(first.violations.len(), 1);
    assert!(second.accepted());
}

// ── Property tests ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn any_non_positive_value_rejects(index in 0usize..6, value in -1.0e6..=0.0f64) {
        let mut values = DEFAULTS;
        values[index] = value;
        let report = validate(&values);
        prop_assert!(!report.accepted());
        prop_assert!(!report.violations.is_empty());
    }

    #[test]
    fn any_non_finite_value_rejects(index in 0usize..6, choice in 0usize..3) {
        let mut values = DEFAULTS;
        values[index] = [f64::NAN, f64::INFINITY, f64::NEG_INFINITY][choice];
        let report = validate(&values);
        prop_assert!(!report.accepted());
        prop_assert!(!report.violations.is_empty());
    }

    #[test]
    fn validation_is_deterministic(
        a in 0.0001f64..2000.0,
        b in 0.0001f64..2000.0,
        c in 0.0001f64..2000.0,
        d in 0.0001f64..2000.0,
        e in 0.0001f64..2000.0,
        f in 0.0001f64..2000.0,
    ) {
        let values = [a, b, c, d, e, f];
        prop_assert_eq!(validate(&values), validate(&values));
    }
}
