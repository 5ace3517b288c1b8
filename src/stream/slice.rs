//! Slicing operators: the `take` and `skip` families.
//!
//! These hold per-subscription mutable state and must survive re-entrant
//! disposal: emission is synchronous, so a sink can end up tearing down its
//! own subscription while still inside the emission call. The `take` side
//! owns an early-unsubscribe policy; the `skip` side never unsubscribes on
//! its own and simply forwards disposal upstream.
//!
//! A shared wrinkle for the `take` side: the upstream disposer only exists
//! once subscribe returns, but a synchronous upstream can finish the slice
//! before that. Each operator therefore keeps the disposer in a late-filled
//! slot and re-checks its cutoff after subscribing, disposing the
//! just-returned disposer when the slice already completed.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::core::{Disposer, Stream};

/// Forward at most `n` values, then dispose the upstream subscription.
///
/// `take(stream, 0)` forwards nothing and releases the upstream immediately.
///
/// # Examples
///
/// ```
/// use pulse_stream::{from_iter, take};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink_seen = Rc::clone(&seen);
/// take(from_iter(vec![1, 2, 3, 4, 5]), 2).subscribe(move |x| sink_seen.borrow_mut().push(x));
/// assert_eq!(*seen.borrow(), vec![1, 2]);
/// ```
pub fn take<T: 'static>(stream: Stream<T>, n: usize) -> Stream<T> {
    Stream::new(move |sink| {
        let seen = Rc::new(Cell::new(0usize));
        let upstream: Rc<RefCell<Option<Disposer>>> = Rc::new(RefCell::new(None));
        let disposer = {
            let seen = Rc::clone(&seen);
            let upstream = Rc::clone(&upstream);
            stream.subscribe(move |x| {
                let count = seen.get() + 1;
                seen.set(count);
                if count <= n {
                    sink.emit(x);
                }
                if count >= n {
                    let held = upstream.borrow_mut().take();
                    if let Some(d) = held {
                        d.dispose();
                    }
                }
            })
        };
        if seen.get() >= n {
            // The cutoff was reached while the slot was still empty.
            disposer.dispose();
        } else {
            *upstream.borrow_mut() = Some(disposer.clone());
        }
        disposer
    })
}

/// Forward values while the predicate holds; the first falsifying value is
/// dropped and the upstream subscription disposed.
pub fn take_while<T, P>(stream: Stream<T>, predicate: P) -> Stream<T>
where
    T: 'static,
    P: Fn(&T) -> bool + Clone + 'static,
{
    Stream::new(move |sink| {
        let completed = Rc::new(Cell::new(false));
        let upstream: Rc<RefCell<Option<Disposer>>> = Rc::new(RefCell::new(None));
        let disposer = {
            let predicate = predicate.clone();
            let completed = Rc::clone(&completed);
            let upstream = Rc::clone(&upstream);
            stream.subscribe(move |x| {
                if completed.get() {
                    return;
                }
                if predicate(&x) {
                    sink.emit(x);
                } else {
                    completed.set(true);
                    let held = upstream.borrow_mut().take();
                    if let Some(d) = held {
                        d.dispose();
                    }
                }
            })
        };
        if completed.get() {
            disposer.dispose();
        } else {
            *upstream.borrow_mut() = Some(disposer.clone());
        }
        disposer
    })
}

/// Forward the source until the trigger stream emits anything, then dispose
/// both subscriptions.
///
/// Disposing the returned disposer also tears down both sides. The trigger
/// may fire during its own subscribe call, before either disposer exists; the
/// post-subscribe check below handles that by disposing the just-returned
/// handles directly.
pub fn take_until<T, S>(stream: Stream<T>, trigger: Stream<S>) -> Stream<T>
where
    T: 'static,
    S: 'static,
{
    Stream::new(move |sink| {
        let done = Rc::new(Cell::new(false));
        let source_slot: Rc<RefCell<Option<Disposer>>> = Rc::new(RefCell::new(None));
        let trigger_slot: Rc<RefCell<Option<Disposer>>> = Rc::new(RefCell::new(None));
        let stop = {
            let done = Rc::clone(&done);
            let source_slot = Rc::clone(&source_slot);
            let trigger_slot = Rc::clone(&trigger_slot);
            move || {
                done.set(true);
                let source = source_slot.borrow_mut().take();
                if let Some(d) = source {
                    d.dispose();
                }
                let trig = trigger_slot.borrow_mut().take();
                if let Some(d) = trig {
                    d.dispose();
                }
            }
        };
        let trigger_disposer = {
            let stop = stop.clone();
            trigger.subscribe(move |_| stop())
        };
        let source_disposer = {
            let done = Rc::clone(&done);
            stream.subscribe(move |x| {
                if !done.get() {
                    sink.emit(x);
                }
            })
        };
        if done.get() {
            trigger_disposer.dispose();
            source_disposer.dispose();
        } else {
            *trigger_slot.borrow_mut() = Some(trigger_disposer);
            *source_slot.borrow_mut() = Some(source_disposer);
        }
        Disposer::new(stop)
    })
}

/// Drop the first `n` values, forwarding everything after. Disposal forwards
/// to the upstream unchanged.
pub fn skip<T: 'static>(stream: Stream<T>, n: usize) -> Stream<T> {
    Stream::new(move |sink| {
        let seen = Cell::new(0usize);
        stream.subscribe(move |x| {
            let count = seen.get() + 1;
            seen.set(count);
            if count > n {
                sink.emit(x);
            }
        })
    })
}

/// Drop values while the predicate holds; once a value fails it, that value
/// and everything after is forwarded regardless of the predicate.
pub fn skip_while<T, P>(stream: Stream<T>, predicate: P) -> Stream<T>
where
    T: 'static,
    P: Fn(&T) -> bool + Clone + 'static,
{
    Stream::new(move |sink| {
        let passed = Cell::new(false);
        let predicate = predicate.clone();
        stream.subscribe(move |x| {
            if passed.get() {
                sink.emit(x);
            } else if !predicate(&x) {
                passed.set(true);
                sink.emit(x);
            }
        })
    })
}

/// Suppress consecutive values the comparator reports as equal.
///
/// The first value always passes; afterwards a value is forwarded only when
/// `comparator(previous_forwarded, current)` is false, and the retained value
/// is updated on every forward.
///
/// # Examples
///
/// ```
/// use pulse_stream::{from_iter, skip_duplicates};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let distinct = skip_duplicates(from_iter(vec![1, 1, 2, 2, 3]), |a, b| a == b);
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink_seen = Rc::clone(&seen);
/// distinct.subscribe(move |x| sink_seen.borrow_mut().push(x));
/// assert_eq!(*seen.borrow(), vec![1, 2, 3]);
/// ```
pub fn skip_duplicates<T, F>(stream: Stream<T>, comparator: F) -> Stream<T>
where
    T: Clone + 'static,
    F: Fn(&T, &T) -> bool + Clone + 'static,
{
    Stream::new(move |sink| {
        let last: RefCell<Option<T>> = RefCell::new(None);
        let comparator = comparator.clone();
        stream.subscribe(move |x| {
            // Clone the retained value out so no borrow is live while the
            // comparator or sink runs.
            let previous = last.borrow().clone();
            let duplicate = match previous {
                Some(ref p) => comparator(p, &x),
                None => false,
            };
            if !duplicate {
                *last.borrow_mut() = Some(x.clone());
                sink.emit(x);
            }
        })
    })
}
