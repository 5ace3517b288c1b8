//! Per-value transformers: `map`, `filter`, `scan`.
//!
//! Each relays 1-to-(0 or 1) values per upstream event and forwards disposal
//! unchanged. Panics raised by user closures are never caught — they unwind
//! through whichever subscription triggered the emission.
//!
//! User closures are `Clone` and cloned once per subscription, since a stream
//! value can be subscribed any number of times.

use std::cell::RefCell;

use super::core::Stream;

/// Transform every value of a stream with a function.
///
/// # Examples
///
/// ```
/// use pulse_stream::{from_iter, map};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let doubled = map(from_iter(vec![1, 2, 3]), |x| x * 2);
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink_seen = Rc::clone(&seen);
/// doubled.subscribe(move |x| sink_seen.borrow_mut().push(x));
/// assert_eq!(*seen.borrow(), vec![2, 4, 6]);
/// ```
pub fn map<T, U, F>(stream: Stream<T>, f: F) -> Stream<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + Clone + 'static,
{
    Stream::new(move |sink| {
        let f = f.clone();
        stream.subscribe(move |x| sink.emit(f(x)))
    })
}

/// Forward only the values for which the predicate holds. Relative order is
/// preserved.
pub fn filter<T, P>(stream: Stream<T>, predicate: P) -> Stream<T>
where
    T: 'static,
    P: Fn(&T) -> bool + Clone + 'static,
{
    Stream::new(move |sink| {
        let predicate = predicate.clone();
        stream.subscribe(move |x| {
            if predicate(&x) {
                sink.emit(x);
            }
        })
    })
}

/// Fold a stream into its running accumulation.
///
/// The seed is delivered first, before the upstream subscription even starts,
/// so it is always the first value a subscriber sees — including over a
/// stream that emits nothing.
///
/// # Examples
///
/// ```
/// use pulse_stream::{from_iter, scan};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let sums = scan(from_iter(vec![1, 2, 3]), |acc, x| acc + x, 0);
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink_seen = Rc::clone(&seen);
/// sums.subscribe(move |x| sink_seen.borrow_mut().push(x));
/// assert_eq!(*seen.borrow(), vec![0, 1, 3, 6]);
/// ```
pub fn scan<T, U, F>(stream: Stream<T>, reducer: F, seed: U) -> Stream<U>
where
    T: 'static,
    U: Clone + 'static,
    F: Fn(U, T) -> U + Clone + 'static,
{
    Stream::new(move |sink| {
        sink.emit(seed.clone());
        let state = RefCell::new(seed.clone());
        let reducer = reducer.clone();
        stream.subscribe(move |x| {
            // No RefCell borrow may be live while the reducer or sink runs.
            let current = state.borrow().clone();
            let next = reducer(current, x);
            *state.borrow_mut() = next.clone();
            sink.emit(next);
        })
    })
}
