use super::*;

#[test]
fn test_ratio_zero_denominator_is_undefined() {
    assert_eq!(MetricValue::ratio(0, 0), MetricValue::Undefined);
    assert_eq!(MetricValue::ratio(3, 0), MetricValue::Undefined);
}

#[test]
fn test_ratio_defined() {
    assert_eq!(MetricValue::ratio(1, 2), MetricValue::Defined(0.5));
    assert_eq!(MetricValue::ratio(0, 4), MetricValue::Defined(0.0));
}

#[test]
fn test_zero_division_convention() {
    assert_eq!(MetricValue::Undefined.value_or(0.0), 0.0);
    assert_eq!(MetricValue::Defined(0.75).value_or(0.0), 0.75);
    assert!(!MetricValue::Undefined.is_defined());
}

#[test]
fn test_display_and_json() {
    assert_eq!(MetricValue::Defined(0.5).to_string(), "0.500000");
    assert_eq!(MetricValue::Undefined.to_string(), "undefined");
    assert_eq!(
        serde_json::to_string(&MetricValue::Undefined).unwrap(),
        "null"
    );
    assert_eq!(
        serde_json::to_string(&MetricValue::Defined(0.25)).unwrap(),
        "0.25"
    );
}
