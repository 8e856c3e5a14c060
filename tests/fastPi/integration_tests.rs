#![allow(non_snake_case)]
use approx::assert_abs_diff_eq;
use fastPi::algorithms::midpoint::integrate_interval;
use fastPi::algorithms::partition::{covered_steps, partition, step_size};
use fastPi::engine::aggregate::aggregate;
use fastPi::math::integrand::integrand;
use fastPi::prelude::*;
use proptest::prelude::*;
use std::f64::consts::PI;

#[test]
fn test_integrand_values() {
    assert_eq!(integrand(0.0_f64), 4.0);
    assert_eq!(integrand(1.0_f64), 2.0);
    assert_abs_diff_eq!(integrand(0.5_f64), 3.2, epsilon = 1e-15);
}

#[test]
fn test_zero_length_interval_is_exactly_zero() {
    let h = step_size::<f64>(1_000);
    let interval = Interval::from_steps(500, 0, h);

    assert_eq!(interval.start, interval.end);
    assert!(interval.is_empty());
    assert_eq!(integrate_interval(&interval, h), 0.0);
}

#[test]
fn test_single_interval_matches_closed_form_midpoint_sum() {
    // Two rectangles on [0, 1]: midpoints 0.25 and 0.75.
    let h = step_size::<f64>(2);
    let interval = Interval::from_steps(0, 2, h);
    let expected = (integrand(0.25) + integrand(0.75)) * 0.5;

    assert_abs_diff_eq!(integrate_interval(&interval, h), expected, epsilon = 1e-15);
}

#[test]
fn test_partition_tiles_unit_interval() {
    let total = 1_200;
    let workers = 8;
    let h = step_size::<f64>(total);
    let intervals = partition(total, workers, h, RemainderPolicy::AssignToLast).unwrap();

    assert_eq!(intervals.len(), workers);
    assert_eq!(covered_steps(&intervals), total);
    assert_eq!(intervals[0].start, 0.0);
    assert_abs_diff_eq!(intervals[workers - 1].end, 1.0, epsilon = 1e-12);

    for pair in intervals.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
        assert_eq!(pair[0].end_step(), pair[1].first_step);
        assert_eq!(pair[0].step_count, 150);
    }
}

#[test]
fn test_partition_assigns_remainder_to_last_worker() {
    let h = step_size::<f64>(10);
    let intervals = partition(10, 3, h, RemainderPolicy::AssignToLast).unwrap();

    let counts: Vec<u64> = intervals.iter().map(|i| i.step_count).collect();
    assert_eq!(counts, vec![3, 3, 4]);
    assert_eq!(covered_steps(&intervals), 10);
    assert_abs_diff_eq!(intervals[2].end, 1.0, epsilon = 1e-12);
}

#[test]
fn test_partition_truncate_drops_remainder() {
    let h = step_size::<f64>(10);
    let intervals = partition(10, 3, h, RemainderPolicy::Truncate).unwrap();

    let counts: Vec<u64> = intervals.iter().map(|i| i.step_count).collect();
    assert_eq!(counts, vec![3, 3, 3]);
    assert_eq!(covered_steps(&intervals), 9);
    assert_abs_diff_eq!(intervals[2].end, 0.9, epsilon = 1e-12);
}

#[test]
fn test_partition_more_workers_than_steps() {
    let h = step_size::<f64>(3);
    let intervals = partition(3, 5, h, RemainderPolicy::AssignToLast).unwrap();

    assert_eq!(intervals.len(), 5);
    assert!(intervals[..4].iter().all(|i| i.is_empty()));
    assert_eq!(intervals[4].step_count, 3);
}

#[test]
fn test_partition_rejects_invalid_configuration() {
    let h = step_size::<f64>(100);

    match partition(100, 0, h, RemainderPolicy::AssignToLast) {
        Err(PiError::InvalidConfiguration { field, .. }) => assert_eq!(field, "workers"),
        other => panic!("Expected InvalidConfiguration, got {:?}", other),
    }
    match partition::<f64>(0, 4, 1.0, RemainderPolicy::AssignToLast) {
        Err(PiError::InvalidConfiguration { field, .. }) => assert_eq!(field, "total_steps"),
        other => panic!("Expected InvalidConfiguration, got {:?}", other),
    }
}

#[test]
fn test_zero_workers_rejected_by_builder() {
    let err = Pi::new().steps(1_000).workers(0).build().unwrap_err();

    assert!(err.is_configuration_error());
    assert!(matches!(err, PiError::InvalidConfiguration { field: "workers", .. }));
}

#[test]
fn test_zero_steps_rejected_by_builder() {
    let err = Pi::new().steps(0).workers(2).build().unwrap_err();
    assert!(matches!(err, PiError::InvalidConfiguration { field: "total_steps", .. }));
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_unallocatable_worker_count_is_resource_exhaustion() {
    let workers = 1usize << 40;

    let err = Pi::new()
        .steps(1)
        .workers(workers)
        .parallel(false)
        .build()
        .unwrap()
        .estimate()
        .unwrap_err();
    match err {
        PiError::ResourceExhaustion { workers: reported, .. } => assert_eq!(reported, workers),
        other => panic!("Expected ResourceExhaustion, got {:?}", other),
    }

    let h = step_size::<f64>(1);
    assert!(matches!(
        partition(1, workers, h, RemainderPolicy::Truncate),
        Err(PiError::ResourceExhaustion { .. })
    ));
}

#[test]
fn test_run_configuration_from_signed() {
    let config = RunConfiguration::from_signed(1_000, 4).unwrap();
    assert_eq!(config.total_steps(), 1_000);
    assert_eq!(config.workers(), 4);

    assert!(RunConfiguration::from_signed(1_000, -1).is_err());
    assert!(RunConfiguration::from_signed(-5, 2).is_err());
    assert!(RunConfiguration::from_signed(10, 0).is_err());
}

#[test]
fn test_convergence_one_million_steps_four_workers() {
    let estimate = Pi::new()
        .steps(1_000_000)
        .workers(4)
        .build()
        .unwrap()
        .estimate()
        .unwrap();

    assert_abs_diff_eq!(estimate.pi, PI, epsilon = 1e-5);
    assert_eq!(estimate.partials.len(), 4);
    assert_eq!(estimate.steps_integrated, 1_000_000);
}

#[test]
fn test_error_shrinks_as_steps_grow() {
    let errors: Vec<f64> = [10_u64, 100, 1_000, 10_000]
        .iter()
        .map(|&steps| {
            Pi::new()
                .steps(steps)
                .workers(2)
                .parallel(false)
                .build()
                .unwrap()
                .estimate()
                .unwrap()
                .abs_error()
        })
        .collect();

    for pair in errors.windows(2) {
        assert!(pair[1] < pair[0], "error did not shrink: {:?}", errors);
    }
}

#[test]
fn test_estimate_is_sum_of_partials() {
    let estimate = Pi::new()
        .steps(9_999)
        .workers(7)
        .parallel(false)
        .build()
        .unwrap()
        .estimate()
        .unwrap();

    assert_eq!(estimate.pi, aggregate(&estimate.partials));
    // Every interval of [0, 1] contributes between f(1)·width and f(0)·width.
    assert!(estimate.partials.iter().all(|&p| p > 0.0));
}

#[test]
fn test_truncation_loses_accuracy() {
    let fixed = Pi::new()
        .steps(1_000)
        .workers(7)
        .parallel(false)
        .build()
        .unwrap()
        .estimate()
        .unwrap();

    let truncated = Pi::new()
        .steps(1_000)
        .workers(7)
        .parallel(false)
        .remainder_policy(RemainderPolicy::Truncate)
        .build()
        .unwrap()
        .estimate()
        .unwrap();

    assert_eq!(fixed.steps_integrated, 1_000);
    assert_eq!(truncated.steps_integrated, 994);
    assert!(truncated.abs_error() > fixed.abs_error());
    assert!(truncated.pi < fixed.pi);
}

#[test]
fn test_single_precision() {
    let estimate = Pi::new()
        .steps(10_000)
        .workers(4)
        .parallel(false)
        .precision::<f32>()
        .build()
        .unwrap()
        .estimate()
        .unwrap();

    assert_abs_diff_eq!(estimate.pi, std::f32::consts::PI, epsilon = 1e-3);
}

#[test]
fn test_elapsed_is_reported() {
    let estimate = Pi::new()
        .steps(1_000)
        .workers(1)
        .build()
        .unwrap()
        .estimate()
        .unwrap();

    assert!(estimate.elapsed_seconds() >= 0.0);
}

proptest! {
    #[test]
    fn prop_partition_covers_all_steps(total in 1_u64..200_000, workers in 1_usize..64) {
        let h = step_size::<f64>(total);
        let intervals = partition(total, workers, h, RemainderPolicy::AssignToLast).unwrap();

        prop_assert_eq!(intervals.len(), workers);
        prop_assert_eq!(covered_steps(&intervals), total);
        prop_assert_eq!(intervals[0].first_step, 0);
        prop_assert_eq!(intervals[workers - 1].end_step(), total);
        prop_assert!((intervals[workers - 1].end - 1.0).abs() < 1e-12);
        for pair in intervals.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn prop_truncate_covers_multiple_of_workers(total in 1_u64..200_000, workers in 1_usize..64) {
        let h = step_size::<f64>(total);
        let intervals = partition(total, workers, h, RemainderPolicy::Truncate).unwrap();

        let covered = covered_steps(&intervals);
        prop_assert_eq!(covered, (total / workers as u64) * workers as u64);
        prop_assert!(total - covered < workers as u64);
    }
}
