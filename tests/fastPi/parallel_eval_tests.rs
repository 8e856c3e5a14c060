#![cfg(feature = "cpu")]
#![allow(non_snake_case)]
use approx::assert_abs_diff_eq;
use fastPi::algorithms::partition::{partition, step_size};
use fastPi::engine::executor::{execute_parallel, execute_sequential};
use fastPi::prelude::*;
use std::f64::consts::PI;

#[test]
fn test_worker_count_invariance() {
    // One worker vs eight on the same step count must agree to 6+ significant digits.
    let single = Pi::new()
        .steps(10_000_000)
        .workers(1)
        .build()
        .unwrap()
        .estimate()
        .unwrap();

    let eight = Pi::new()
        .steps(10_000_000)
        .workers(8)
        .build()
        .unwrap()
        .estimate()
        .unwrap();

    assert_abs_diff_eq!(single.pi, eight.pi, epsilon = 1e-6);
    assert_abs_diff_eq!(eight.pi, PI, epsilon = 1e-8);
}

#[test]
fn test_parallel_matches_sequential_bitwise() {
    // Same partition, same per-interval kernel, same summation order.
    for workers in [1, 3, 4, 16] {
        let seq = Pi::new()
            .steps(123_457)
            .workers(workers)
            .parallel(false)
            .build()
            .unwrap()
            .estimate()
            .unwrap();

        let par = Pi::new()
            .steps(123_457)
            .workers(workers)
            .parallel(true)
            .build()
            .unwrap()
            .estimate()
            .unwrap();

        assert_eq!(seq.partials, par.partials);
        assert_eq!(seq.pi, par.pi);
    }
}

#[test]
fn test_parallel_partials_keep_interval_order() {
    let total = 40_000;
    let h = step_size::<f64>(total);
    let intervals = partition(total, 10, h, RemainderPolicy::AssignToLast).unwrap();

    let par = execute_parallel(&intervals, h).unwrap();
    let seq = execute_sequential(&intervals, h).unwrap();

    assert_eq!(par.len(), intervals.len());
    assert_eq!(par, seq);
    // f is decreasing on [0, 1], so equal-width intervals give decreasing partials.
    for pair in par.windows(2) {
        assert!(pair[0] > pair[1]);
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let integrator = Pi::new().steps(500_000).workers(6).build().unwrap();

    let first = integrator.estimate().unwrap();
    for _ in 0..5 {
        let again = integrator.estimate().unwrap();
        assert_eq!(again.pi, first.pi);
    }
}

#[test]
fn test_more_workers_than_cores() {
    let estimate = Pi::new()
        .steps(100_000)
        .workers(64)
        .build()
        .unwrap()
        .estimate()
        .unwrap();

    assert_eq!(estimate.partials.len(), 64);
    assert_abs_diff_eq!(estimate.pi, PI, epsilon = 1e-8);
}

#[test]
fn test_more_workers_than_steps() {
    let estimate = Pi::new()
        .steps(5)
        .workers(12)
        .build()
        .unwrap()
        .estimate()
        .unwrap();

    // Eleven empty intervals, the last one carries all five steps.
    assert_eq!(estimate.partials.iter().filter(|&&p| p == 0.0).count(), 11);
    assert_eq!(estimate.steps_integrated, 5);
    assert_abs_diff_eq!(estimate.pi, PI, epsilon = 1e-2);
}

#[test]
fn test_empty_interval_list() {
    let out: Vec<f64> = execute_parallel(&[], 0.5).unwrap();
    assert!(out.is_empty());
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_parallel_run_reports_unallocatable_worker_count() {
    let err = Pi::new()
        .steps(1)
        .workers(1usize << 40)
        .build()
        .unwrap()
        .estimate()
        .unwrap_err();

    assert!(matches!(err, PiError::ResourceExhaustion { .. }));
    assert!(!err.is_configuration_error());
}
