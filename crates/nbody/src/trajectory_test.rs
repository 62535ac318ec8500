use nalgebra::Point2;

use crate::trajectory::{quantize_age, Trajectory};

fn p(x: f64) -> Point2<f64> {
    Point2::new(x, 0.0)
}

#[test]
fn test_quantize_truncates() {
    assert_eq!(quantize_age(0.0, 1), 0);
    assert_eq!(quantize_age(0.09, 1), 0);
    assert_eq!(quantize_age(0.1, 1), 1);
    assert_eq!(quantize_age(2.999, 2), 299);
    assert_eq!(quantize_age(-0.35, 1), -3);
}

#[test]
fn test_new_trajectory_starts_at_origin() {
    let trail = Trajectory::new(p(7.0), 4);
    assert_eq!(trail.capacity(), 4);
    assert_eq!(trail.cursor(), 0);
    assert!(!trail.has_wrapped());
    assert_eq!(trail.sample_count(), 1);
    assert!(trail.points().iter().all(|q| *q == p(7.0)));
}

#[test]
fn test_zero_capacity_keeps_one_slot() {
    let mut trail = Trajectory::new(p(0.0), 0);
    assert_eq!(trail.capacity(), 1);

    trail.record(p(1.0), 0.5, 1);
    assert_eq!(trail.cursor(), 0);
    assert!(trail.has_wrapped());
    assert_eq!(trail.latest(), p(1.0));
}

#[test]
fn test_same_quantum_overwrites_current_slot() {
    let mut trail = Trajectory::new(p(0.0), 4);
    trail.record(p(1.0), 0.01, 1);
    trail.record(p(2.0), 0.05, 1);
    trail.record(p(3.0), 0.09, 1);

    assert_eq!(trail.cursor(), 0);
    assert_eq!(trail.latest(), p(3.0));
}

#[test]
fn test_new_quantum_advances_cursor() {
    let mut trail = Trajectory::new(p(0.0), 4);
    trail.record(p(1.0), 0.1, 1);
    trail.record(p(2.0), 0.2, 1);

    assert_eq!(trail.cursor(), 2);
    assert_eq!(trail.sample_count(), 3);
    let ordered: Vec<_> = trail.iter_ordered().copied().collect();
    assert_eq!(ordered, vec![p(0.0), p(1.0), p(2.0)]);
}

#[test]
fn test_wraps_and_orders_oldest_first() {
    let mut trail = Trajectory::new(p(0.0), 3);
    for (i, age) in [0.1, 0.2, 0.3, 0.4].into_iter().enumerate() {
        trail.record(p((i + 1) as f64), age, 1);
    }

    // Slots: [3, 4, 2], newest at index 1
    assert!(trail.has_wrapped());
    assert_eq!(trail.cursor(), 1);
    assert_eq!(trail.sample_count(), 3);
    let ordered: Vec<_> = trail.iter_ordered().copied().collect();
    assert_eq!(ordered, vec![p(2.0), p(3.0), p(4.0)]);
}

#[test]
fn test_age_skipping_quanta_advances_once() {
    let mut trail = Trajectory::new(p(0.0), 8);
    trail.record(p(1.0), 5.0, 1);
    assert_eq!(trail.cursor(), 1);

    // Going back in age never claims a slot
    trail.record(p(2.0), 4.0, 1);
    assert_eq!(trail.cursor(), 1);
    assert_eq!(trail.latest(), p(2.0));
}
