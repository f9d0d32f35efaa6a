use meterscale::{
    MeterRange, MeterTick, RangeError,
    mapping::{px_to_value, value_to_px},
    prettify, tick_labels,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_reference_layout_labels() {
    init_logger();

    let parts = 9;
    let labels: Vec<f64> = (0..=parts)
        .map(|i| {
            let px = 10.0 + (210.0 - 10.0) / parts as f64 * i as f64;
            prettify(px_to_value(px, -70.0, 0.0, 10.0, 210.0))
        })
        .collect();

    assert_eq!(
        labels,
        vec![-70.0, -43.0, -27.0, -16.0, -10.0, -6.0, -3.0, -2.0, -1.0, 0.0]
    );

    let from_iter: Vec<f64> = tick_labels(-70.0, 0.0, 10.0, 210.0, parts)
        .map(|t| t.value)
        .collect();
    assert_eq!(from_iter, labels);
}

#[test]
fn test_round_trip_over_track() {
    init_logger();

    let range = MeterRange::<f64>::default();
    for i in 0..=200 {
        let px = 10.0 + i as f64;
        let back = value_to_px(px_to_value(px, -70.0, 0.0, 10.0, 210.0), -70.0, 0.0, 10.0, 210.0);
        assert!((back - px).abs() < 1e-9, "{px} -> {back}");
        assert!((range.value_to_px(range.px_to_value(px)) - px).abs() < 1e-9);
    }
}

#[test]
fn test_labels_are_stable() {
    for tick in MeterRange::<f64>::default().ticks(40) {
        assert_eq!(prettify(tick.value), tick.value);
    }
}

#[test]
fn test_positive_range() {
    // Gain knob style range: 0 dB to +24 dB
    let range = MeterRange::try_new(0.0, 24.0, 0.0, 120.0).unwrap();
    let ticks: Vec<MeterTick> = range.ticks(4).collect();

    assert_eq!(ticks.first().map(|t| t.value), Some(0.0));
    assert_eq!(ticks.last().map(|t| t.value), Some(24.0));
    assert!(ticks.windows(2).all(|w| w[1].value >= w[0].value));
}

#[test]
fn test_config_from_json() {
    let json = r#"{"value_min": -60.0, "value_max": 6.0, "px_min": 400.0, "px_max": 0.0}"#;
    let range: MeterRange = serde_json::from_str(json).unwrap();

    assert_eq!(range, MeterRange::new(-60.0, 6.0, 400.0, 0.0));
    assert!(range.validate().is_ok());
    assert!((range.value_to_px(6.0)).abs() < 1e-9);
}

#[test]
fn test_config_round_trip_through_json() {
    let range = MeterRange::<f64>::default();
    let json = serde_json::to_string(&range).unwrap();
    let back: MeterRange = serde_json::from_str(&json).unwrap();

    assert_eq!(back, range);
}

#[test]
fn test_invalid_config_is_rejected() {
    let json = r#"{"value_min": -6.0, "value_max": -6.0, "px_min": 10.0, "px_max": 210.0}"#;
    let range: MeterRange = serde_json::from_str(json).unwrap();

    assert_eq!(range.validate(), Err(RangeError::EmptyValueSpan));
    assert_eq!(
        RangeError::EmptyValueSpan.to_string(),
        "value range is empty in signed-log space"
    );
}
