use approx::assert_abs_diff_eq;
use valuemap_rs::FilterError;
use valuemap_rs::core::{FieldBounds, LogSliderScale, SLIDER_MAX, SLIDER_MIN};

#[test]
fn position_value_round_trip_stays_within_one_currency_unit() {
    let scale = LogSliderScale::new(50_000.0, 2_000_000.0).expect("valid scale");

    for value in [50_000.0, 120_000.0, 300_000.0, 987_654.0, 2_000_000.0] {
        let position = scale.value_to_position(value);
        assert!((SLIDER_MIN..=SLIDER_MAX).contains(&position));
        let back = scale.position_to_value(position);
        assert_abs_diff_eq!(back, value, epsilon = 1.0);
    }
}

#[test]
fn equal_position_deltas_move_value_further_near_the_high_end() {
    let scale = LogSliderScale::new(10_000.0, 10_000_000.0).expect("valid scale");

    let low_step = scale.position_to_value(10.0) - scale.position_to_value(0.0);
    let high_step = scale.position_to_value(100.0) - scale.position_to_value(90.0);
    assert!(high_step > low_step * 10.0);
}

#[test]
fn degenerate_domain_pins_both_directions() {
    let scale = LogSliderScale::new(750_000.0, 750_000.0).expect("valid scale");
    assert!(scale.is_degenerate());

    for position in [SLIDER_MIN, 37.5, SLIDER_MAX] {
        assert_eq!(scale.position_to_value(position), 750_000.0);
    }
    for value in [0.0, 750_000.0, 9_999_999.0] {
        assert_eq!(scale.value_to_position(value), SLIDER_MAX);
    }
}

#[test]
fn zero_domain_endpoint_is_remapped_to_one_before_the_logarithm() {
    let scale = LogSliderScale::new(0.0, 1_000_000.0).expect("valid scale");

    assert_eq!(scale.position_to_value(SLIDER_MIN), 1.0);
    assert_eq!(scale.position_to_value(SLIDER_MAX), 1_000_000.0);
}

#[test]
fn zero_log_span_returns_the_domain_minimum_instead_of_dividing() {
    // min = 0 remaps to 1, so [0, 1] collapses to a zero log span without
    // being a degenerate value domain.
    let scale = LogSliderScale::new(0.0, 1.0).expect("valid scale");
    assert!(!scale.is_degenerate());

    assert_eq!(scale.value_to_position(0.5), SLIDER_MIN);
    assert_eq!(scale.position_to_value(42.0), 1.0);
}

#[test]
fn positions_outside_the_domain_are_clamped() {
    let bounds = FieldBounds::new(100.0, 10_000.0).expect("valid bounds");
    let scale = LogSliderScale::from_bounds(bounds).expect("valid scale");

    assert_eq!(
        scale.position_to_value(-25.0),
        scale.position_to_value(SLIDER_MIN)
    );
    assert_eq!(
        scale.position_to_value(250.0),
        scale.position_to_value(SLIDER_MAX)
    );
}

#[test]
fn invalid_domains_are_rejected() {
    assert!(matches!(
        LogSliderScale::new(-1.0, 10.0),
        Err(FilterError::InvalidData(_))
    ));
    assert!(matches!(
        LogSliderScale::new(f64::NAN, 10.0),
        Err(FilterError::InvalidData(_))
    ));
    assert!(matches!(
        LogSliderScale::new(500.0, 100.0),
        Err(FilterError::InvalidRange { .. })
    ));
}
