use profile_charts::core::{IndexScale, LinearScale, ValueScale, ValueScaleTuning};
use proptest::prelude::*;

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = LinearScale::new(domain_start, domain_end, 2048.0, 0.0).expect("valid scale");
        let px = scale.domain_to_pixel(value);
        let recovered = scale.pixel_to_domain(px);

        prop_assert!((recovered - value).abs() <= 1e-6);
    }

    #[test]
    fn value_scale_is_finite_and_monotonic(
        values in prop::collection::vec(-1_000_000.0f64..1_000_000.0, 0..100),
        floor in prop::option::of(-10.0f64..10.0)
    ) {
        let tuning = ValueScaleTuning { floor, ..ValueScaleTuning::default() };
        let scale = ValueScale::from_values(values.iter().copied(), tuning, 260.0, 20.0)
            .expect("value scale");

        let (display_min, display_max) = scale.display_range();
        prop_assert!(display_min < display_max);
        for value in &values {
            let y = scale.value_to_pixel(*value);
            prop_assert!(y.is_finite());
            prop_assert!((20.0..=260.0).contains(&y));
        }
        prop_assert!(scale.value_to_pixel(display_max) <= scale.value_to_pixel(display_min));
    }

    #[test]
    fn flat_values_map_to_a_single_finite_pixel(value in -1_000.0f64..1_000.0, count in 1usize..20) {
        let scale = ValueScale::from_values(
            std::iter::repeat_n(value, count),
            ValueScaleTuning::default(),
            260.0,
            20.0,
        )
        .expect("value scale");
        prop_assert!(scale.value_to_pixel(value).is_finite());
    }

    #[test]
    fn index_scale_is_monotonic(max_index in 0usize..10_000, start in 0.0f64..100.0, width in 1.0f64..2_000.0) {
        let scale = IndexScale::new(max_index, start, start + width).expect("index scale");
        prop_assert_eq!(scale.index_to_pixel(0), start);
        if max_index > 0 {
            prop_assert!(scale.index_to_pixel(max_index / 2) <= scale.index_to_pixel(max_index));
            prop_assert!((scale.index_to_pixel(max_index) - (start + width)).abs() <= 1e-9);
        }
    }
}
