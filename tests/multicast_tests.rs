mod common;

use common::{collect, recording_sink, TestSource};
use pulse_stream::{from_iter, multicast, start_with, take, Disposer};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_single_upstream_subscription_is_shared() {
    let source = TestSource::new();
    let warm = multicast(source.stream());
    let first = warm.subscribe(|_: i32| {});
    let second = warm.subscribe(|_: i32| {});
    let third = warm.subscribe(|_: i32| {});
    assert_eq!(source.subscriptions(), 1);
    assert_eq!(source.active(), 1);
    first.dispose();
    second.dispose();
    // One subscriber left: the upstream run stays alive.
    assert_eq!(source.active(), 1);
    third.dispose();
    assert_eq!(source.active(), 0);
    assert_eq!(source.disposals(), 1);
}

#[test]
fn test_broadcast_reaches_every_subscriber() {
    let source = TestSource::new();
    let warm = multicast(source.stream());
    let (out_a, sink_a) = recording_sink();
    let (out_b, sink_b) = recording_sink();
    let a = warm.subscribe(sink_a);
    let b = warm.subscribe(sink_b);
    source.emit(1);
    source.emit(2);
    assert_eq!(*out_a.borrow(), vec![1, 2]);
    assert_eq!(*out_b.borrow(), vec![1, 2]);
    a.dispose();
    source.emit(3);
    assert_eq!(*out_a.borrow(), vec![1, 2]);
    assert_eq!(*out_b.borrow(), vec![1, 2, 3]);
    b.dispose();
}

#[test]
fn test_resubscription_after_teardown_restarts_fresh() {
    let source = TestSource::new();
    let warm = multicast(source.stream());
    warm.subscribe(|_: i32| {}).dispose();
    assert_eq!(source.subscriptions(), 1);
    assert_eq!(source.disposals(), 1);
    warm.subscribe(|_: i32| {}).dispose();
    assert_eq!(source.subscriptions(), 2);
    assert_eq!(source.disposals(), 2);
}

#[test]
fn test_sink_removed_mid_broadcast_is_skipped() {
    let source = TestSource::new();
    let warm = multicast(source.stream());
    let victim_handle: Rc<RefCell<Option<Disposer>>> = Rc::new(RefCell::new(None));
    let disposing_handle = Rc::clone(&victim_handle);
    let first = warm.subscribe(move |_: i32| {
        let victim = disposing_handle.borrow_mut().take();
        if let Some(d) = victim {
            d.dispose();
        }
    });
    let (out, sink) = recording_sink();
    let victim = warm.subscribe(sink);
    *victim_handle.borrow_mut() = Some(victim);
    source.emit(1);
    // The first sink detached the second during the same broadcast pass; the
    // second must not see the value.
    assert_eq!(*out.borrow(), Vec::<i32>::new());
    first.dispose();
    assert_eq!(source.active(), 0);
}

#[test]
fn test_sole_subscriber_finishing_during_subscribe_releases_upstream() {
    // take(1) completes while the multicast upstream is still inside its
    // synchronous subscribe-time emission; the shared run must still be
    // released, and a later subscriber gets a fresh run.
    let warm = multicast(from_iter(vec![1, 2, 3]));
    assert_eq!(collect(&take(warm.clone(), 1)), vec![1]);
    assert_eq!(collect(&warm), vec![1, 2, 3]);
}

#[test]
fn test_start_with_composed_with_multicast() {
    let source = TestSource::new();
    let warm = multicast(source.stream());
    let (out_a, sink_a) = recording_sink();
    let (out_b, sink_b) = recording_sink();
    let a = start_with(warm.clone(), 0).subscribe(sink_a);
    source.emit(1);
    let b = start_with(warm, 0).subscribe(sink_b);
    source.emit(2);
    assert_eq!(*out_a.borrow(), vec![0, 1, 2]);
    // The late subscriber gets the prefix value but not the missed emission.
    assert_eq!(*out_b.borrow(), vec![0, 2]);
    a.dispose();
    b.dispose();
    assert_eq!(source.active(), 0);
}
