//! Timing domain: unit tests for busy locks and task queues.

use super::{BusyLock, TaskQueue};

// -----------------------------------------------------------------------------
// BusyLock tests
// -----------------------------------------------------------------------------

#[test]
fn test_busy_lock_expires_after_duration() {
    let mut busy = BusyLock::default();
    assert!(!busy.is_busy());

    busy.hold_for(0.25);
    assert!(busy.is_busy());

    busy.tick(0.125);
    assert!(busy.is_busy());

    busy.tick(0.125);
    assert!(!busy.is_busy());
}

#[test]
fn test_busy_lock_overlap_keeps_later_end() {
    let mut busy = BusyLock::default();
    busy.hold_for(0.5);
    busy.tick(0.25);

    // Shorter second hold must not pull the release earlier
    busy.hold_for(0.125);
    busy.tick(0.125);
    assert!(busy.is_busy());

    busy.tick(0.125);
    assert!(!busy.is_busy());
}

#[test]
fn test_busy_lock_overlap_extends_to_second_end() {
    let mut busy = BusyLock::default();
    busy.hold_for(0.25);
    busy.tick(0.125);
    busy.hold_for(0.5);

    busy.tick(0.25);
    assert!(busy.is_busy(), "first hold would have ended here");

    busy.tick(0.25);
    assert!(!busy.is_busy());
}

#[test]
fn test_busy_lock_clear() {
    let mut busy = BusyLock::default();
    busy.hold_for(1.0);
    busy.clear();
    assert!(!busy.is_busy());
    assert_eq!(busy.remaining(), 0.0);
}

// -----------------------------------------------------------------------------
// TaskQueue tests
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
enum Probe {
    Restore,
    Blink,
}

#[test]
fn test_one_shot_task_fires_once() {
    let mut queue = TaskQueue::new();
    queue.schedule(0.5, Probe::Restore);

    assert!(queue.tick(0.25).is_empty());
    assert_eq!(queue.tick(0.25), vec![Probe::Restore]);
    assert!(queue.is_empty());
    assert!(queue.tick(1.0).is_empty());
}

#[test]
fn test_repeating_task_fires_every_interval() {
    let mut queue = TaskQueue::new();
    queue.schedule_repeating(0.0, 0.25, Probe::Blink);

    assert_eq!(queue.tick(0.0), vec![Probe::Blink]);
    assert!(queue.tick(0.125).is_empty());
    assert_eq!(queue.tick(0.125), vec![Probe::Blink]);
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_cancel_single_task() {
    let mut queue = TaskQueue::new();
    let restore = queue.schedule(0.5, Probe::Restore);
    queue.schedule_repeating(0.0, 0.25, Probe::Blink);

    assert!(queue.cancel(restore));
    assert!(!queue.cancel(restore));

    let fired = queue.tick(1.0);
    assert!(!fired.contains(&Probe::Restore));
}

#[test]
fn test_cancel_all_drops_pending_work() {
    let mut queue = TaskQueue::new();
    queue.schedule(0.5, Probe::Restore);
    queue.schedule_repeating(0.0, 0.25, Probe::Blink);

    queue.cancel_all();
    assert!(queue.is_empty());
    assert!(queue.tick(10.0).is_empty());
}

#[test]
fn test_cancel_where_filters_by_task() {
    let mut queue = TaskQueue::new();
    queue.schedule(0.5, Probe::Restore);
    queue.schedule_repeating(0.0, 0.25, Probe::Blink);

    queue.cancel_where(|t| *t == Probe::Blink);
    assert_eq!(queue.tick(0.5), vec![Probe::Restore]);
}
