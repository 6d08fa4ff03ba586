use approx::assert_relative_eq;
use profile_charts::ChartError;
use profile_charts::core::{
    IndexScale, LinearScale, Margins, PlotArea, ValueScale, ValueScaleTuning, Viewport,
};

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(10.0, 110.0, 0.0, 1000.0).expect("valid scale");

    let original = 42.5;
    let px = scale.domain_to_pixel(original);
    let recovered = scale.pixel_to_domain(px);
    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn linear_scale_rejects_zero_span() {
    assert!(LinearScale::new(5.0, 5.0, 0.0, 100.0).is_err());
    assert!(LinearScale::new(f64::NAN, 5.0, 0.0, 100.0).is_err());
}

#[test]
fn index_scale_spreads_points_across_plot() {
    let scale = IndexScale::new(2, 10.0, 90.0).expect("index scale");
    assert_eq!(scale.index_to_pixel(0), 10.0);
    assert_eq!(scale.index_to_pixel(1), 50.0);
    assert_eq!(scale.index_to_pixel(2), 90.0);
}

#[test]
fn single_point_maps_to_left_margin() {
    let area = PlotArea::new(Viewport::new(900, 280), Margins::new(20.0, 5.0, 20.0, 5.0))
        .expect("plot area");
    let scale = IndexScale::for_plot(1, area).expect("index scale");
    assert_eq!(scale.max_index(), 0);
    assert_eq!(scale.index_to_pixel(0), 5.0);
}

#[test]
fn value_scale_pads_and_inverts() {
    let tuning = ValueScaleTuning {
        floor: None,
        ..ValueScaleTuning::default()
    };
    let scale = ValueScale::from_values([100.0, 200.0], tuning, 260.0, 20.0).expect("scale");

    let (min, max) = scale.display_range();
    assert_relative_eq!(min, 95.0);
    assert_relative_eq!(max, 205.0);
    assert_relative_eq!(scale.value_to_pixel(95.0), 260.0);
    assert_relative_eq!(scale.value_to_pixel(205.0), 20.0);
    assert!(scale.value_to_pixel(200.0) < scale.value_to_pixel(100.0));
}

#[test]
fn value_scale_floor_clamps_lower_bound() {
    let scale = ValueScale::from_values([0.0, 100.0], ValueScaleTuning::default(), 260.0, 20.0)
        .expect("scale");
    assert_eq!(scale.display_range(), (0.0, 105.0));
    assert_relative_eq!(scale.value_to_pixel(0.0), 260.0);
}

#[test]
fn flat_series_uses_fallback_span() {
    let scale = ValueScale::from_values([42.0, 42.0, 42.0], ValueScaleTuning::default(), 260.0, 20.0)
        .expect("scale");
    assert!(scale.is_flat());
    assert_eq!(scale.display_range(), (41.0, 43.0));
    assert_relative_eq!(scale.value_to_pixel(42.0), 140.0);

    let zero = ValueScale::from_values([0.0, 0.0], ValueScaleTuning::default(), 260.0, 20.0)
        .expect("scale");
    assert_eq!(zero.display_range(), (0.0, 1.0));
    assert!(zero.value_to_pixel(0.0).is_finite());
}

#[test]
fn floor_is_ignored_for_flat_negative_series() {
    let scale = ValueScale::from_values([-5.0, -5.0], ValueScaleTuning::default(), 100.0, 0.0)
        .expect("scale");
    assert_eq!(scale.display_range(), (-6.0, -4.0));
}

#[test]
fn mixed_sign_values_stay_inside_the_plot() {
    let area = PlotArea::new(Viewport::new(900, 280), Margins::new(20.0, 5.0, 20.0, 5.0))
        .expect("plot area");
    let values = [100.0, -50.0, -200.0, 25.0];
    let scale =
        ValueScale::for_plot(values, ValueScaleTuning::default(), area).expect("value scale");

    let (min, max) = scale.display_range();
    assert_relative_eq!(min, -215.0);
    assert_relative_eq!(max, 115.0);
    for value in values {
        let y = scale.value_to_pixel(value);
        assert!(
            (area.top..=area.bottom).contains(&y),
            "value {value} mapped to y={y} outside the plot"
        );
    }
}

#[test]
fn empty_values_still_map() {
    let scale =
        ValueScale::from_values(std::iter::empty(), ValueScaleTuning::default(), 100.0, 0.0)
            .expect("scale");
    assert_eq!(scale.display_range(), (0.0, 1.0));
    assert_eq!(scale.value_to_pixel(0.0), 100.0);
}

#[test]
fn invalid_tuning_is_rejected() {
    let tuning = ValueScaleTuning {
        padding_ratio: -0.1,
        ..ValueScaleTuning::default()
    };
    let result = ValueScale::from_values([1.0, 2.0], tuning, 100.0, 0.0);
    assert!(matches!(result, Err(ChartError::InvalidConfig(_))));
}

#[test]
fn margins_must_leave_a_plot_area() {
    let viewport = Viewport::new(100, 100);
    assert!(PlotArea::new(viewport, Margins::new(10.0, 60.0, 10.0, 40.0)).is_err());
    assert!(PlotArea::new(Viewport::new(0, 100), Margins::new(0.0, 0.0, 0.0, 0.0)).is_err());

    let area = PlotArea::new(viewport, Margins::new(10.0, 20.0, 30.0, 40.0)).expect("area");
    assert_eq!(area.width(), 40.0);
    assert_eq!(area.height(), 60.0);
}
