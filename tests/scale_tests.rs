mod common;

use common::approx;
use plot1d::data_types::DomainNotice;
use plot1d::scales::compute_domain;
use plot1d::{Axis, ChartScale, PlotError, Sample, SampleSet, ScaleKind};
use rand::Rng;

#[test]
fn test_linear_round_trip_random() {
    let mut rng = rand::rng();
    let scale = ChartScale::new_linear((-50.0, 250.0), (0.0, 360.0));
    for _ in 0..1000 {
        let v: f64 = rng.random_range(-50.0..250.0);
        assert!(approx(scale.inverse(scale.forward(v)), v), "value {v}");
    }
}

#[test]
fn test_log_round_trip_random() {
    let mut rng = rand::rng();
    let scale = ChartScale::new_log(Axis::Y, (1e-3, 1e4), (244.0, 0.0)).unwrap();
    for _ in 0..1000 {
        let v: f64 = 10f64.powf(rng.random_range(-3.0..4.0));
        let back = scale.inverse(scale.forward(v));
        assert!((back - v).abs() / v < 1e-9, "value {v} came back as {back}");
    }
}

#[test]
fn test_log_maps_decades_evenly() {
    let scale = ChartScale::new_log(Axis::X, (1.0, 1000.0), (0.0, 300.0)).unwrap();
    assert!(approx(scale.forward(10.0), 100.0));
    assert!(approx(scale.forward(100.0), 200.0));
}

#[test]
fn test_log_rejects_non_positive_domain() {
    let err = ChartScale::new_log(Axis::X, (0.0, 10.0), (0.0, 360.0)).unwrap_err();
    assert_eq!(
        err,
        PlotError::InvalidDomain {
            axis: Axis::X,
            min: 0.0,
            max: 10.0
        }
    );
}

#[test]
fn test_constant_y_is_widened() {
    let samples = SampleSet::new(vec![Sample::new(1.0, 5.0), Sample::new(2.0, 5.0)], false);
    let domain = compute_domain(&samples, Axis::Y, ScaleKind::Linear).unwrap();
    assert_eq!(domain.bounds(), (4.0, 6.0));
    assert_eq!(domain.notice, Some(DomainNotice::Widened { value: 5.0 }));
}

#[test]
fn test_constant_x_is_not_widened() {
    let samples = SampleSet::new(vec![Sample::new(3.0, 1.0), Sample::new(3.0, 2.0)], false);
    let domain = compute_domain(&samples, Axis::X, ScaleKind::Linear).unwrap();
    assert_eq!(domain.bounds(), (3.0, 3.0));
    assert!(domain.notice.is_none());

    // Zero-span scale still yields finite pixels.
    let scale = ChartScale::new_linear(domain.bounds(), (0.0, 360.0));
    assert_eq!(scale.forward(3.0), 0.0);
}

#[test]
fn test_log_y_filters_but_log_x_rejects() {
    let raw = vec![
        Sample::new(0.0, -1.0),
        Sample::new(1.0, 0.0),
        Sample::new(2.0, 4.0),
        Sample::new(3.0, 8.0),
    ];

    let filtered = SampleSet::new(raw.clone(), true);
    assert_eq!(filtered.len(), 2);
    let y = compute_domain(&filtered, Axis::Y, ScaleKind::Log).unwrap();
    assert_eq!(y.bounds(), (4.0, 8.0));

    let unfiltered = SampleSet::new(raw, false);
    let err = compute_domain(&unfiltered, Axis::X, ScaleKind::Log).unwrap_err();
    assert!(matches!(err, PlotError::InvalidDomain { axis: Axis::X, .. }));
}

#[test]
fn test_empty_samples() {
    let empty = SampleSet::default();
    assert_eq!(
        compute_domain(&empty, Axis::X, ScaleKind::Linear).unwrap_err(),
        PlotError::EmptyData
    );
}

#[test]
fn test_ticks_stay_inside_domain() {
    let scale = ChartScale::new_linear((0.0, 100.0), (0.0, 360.0));
    assert_eq!(scale.ticks(5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);

    let log = ChartScale::new_log(Axis::Y, (1.0, 1e6), (244.0, 0.0)).unwrap();
    assert_eq!(log.ticks(4), vec![1.0, 10.0, 100.0, 1e3, 1e4, 1e5, 1e6]);
}
