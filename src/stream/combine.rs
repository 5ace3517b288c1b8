//! Combinators over multiple streams: `chain`, `chain_latest`, `merge`,
//! `ap`, `map2`, `map3`, `combine_array`, `combine_object`.
//!
//! These manage several concurrent subscriptions behind one disposer.
//! "Concurrent" here means logically simultaneous within one call stack —
//! output interleaving follows exactly the order in which the constituent
//! streams emit, with no reordering or de-duplication.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::constructors::{from_iter, just};
use super::core::{Disposer, Stream};
use super::transform::map;

/// For each upstream value, spawn `f(value)` and forward everything it emits.
///
/// Spawned streams may overlap in time; every spawned disposer is
/// accumulated, and disposing the result tears down all spawned
/// subscriptions and then the main one.
pub fn chain<T, U, F>(stream: Stream<T>, f: F) -> Stream<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> Stream<U> + Clone + 'static,
{
    Stream::new(move |sink| {
        let spawned: Rc<RefCell<Vec<Disposer>>> = Rc::new(RefCell::new(Vec::new()));
        let main = {
            let f = f.clone();
            let spawned = Rc::clone(&spawned);
            stream.subscribe(move |x| {
                let child = f(x).subscribe_sink(sink.clone());
                spawned.borrow_mut().push(child);
            })
        };
        Disposer::new(move || {
            let children = std::mem::take(&mut *spawned.borrow_mut());
            for child in children {
                child.dispose();
            }
            main.dispose();
        })
    })
}

/// Like [`chain`], but glitch-free: each upstream value disposes the previous
/// spawned subscription before subscribing to the new one, so at most one
/// spawned stream is ever live.
pub fn chain_latest<T, U, F>(stream: Stream<T>, f: F) -> Stream<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> Stream<U> + Clone + 'static,
{
    Stream::new(move |sink| {
        let current: Rc<RefCell<Option<Disposer>>> = Rc::new(RefCell::new(None));
        let main = {
            let f = f.clone();
            let current = Rc::clone(&current);
            stream.subscribe(move |x| {
                let previous = current.borrow_mut().take();
                if let Some(d) = previous {
                    d.dispose();
                }
                let child = f(x).subscribe_sink(sink.clone());
                *current.borrow_mut() = Some(child);
            })
        };
        Disposer::new(move || {
            let child = current.borrow_mut().take();
            if let Some(d) = child {
                d.dispose();
            }
            main.dispose();
        })
    })
}

/// Subscribe to every stream in sequence order and forward all emissions.
/// Disposal cancels every member subscription.
pub fn merge<T: 'static>(streams: Vec<Stream<T>>) -> Stream<T> {
    chain(from_iter(streams), |s| s)
}

/// Applicative apply: combine a stream of functions with a stream of values.
///
/// Tracks the latest function and the latest value; emits `f(v)` once both
/// have been observed, and again on every later update to either side.
/// Disposal unsubscribes from both inputs.
pub fn ap<A, B, F>(functions: Stream<F>, values: Stream<A>) -> Stream<B>
where
    A: Clone + 'static,
    B: 'static,
    F: Fn(A) -> B + Clone + 'static,
{
    Stream::new(move |sink| {
        let latest_fn: Rc<RefCell<Option<F>>> = Rc::new(RefCell::new(None));
        let latest_val: Rc<RefCell<Option<A>>> = Rc::new(RefCell::new(None));
        let emit = {
            let latest_fn = Rc::clone(&latest_fn);
            let latest_val = Rc::clone(&latest_val);
            move || {
                // Clone both slots out; no borrow may be live while the
                // function or sink runs.
                let f = latest_fn.borrow().clone();
                let v = latest_val.borrow().clone();
                if let (Some(f), Some(v)) = (f, v) {
                    sink.emit(f(v));
                }
            }
        };
        let fn_disposer = {
            let latest_fn = Rc::clone(&latest_fn);
            let emit = emit.clone();
            functions.subscribe(move |f| {
                *latest_fn.borrow_mut() = Some(f);
                emit();
            })
        };
        let val_disposer = {
            let latest_val = Rc::clone(&latest_val);
            values.subscribe(move |v| {
                *latest_val.borrow_mut() = Some(v);
                emit();
            })
        };
        Disposer::new(move || {
            fn_disposer.dispose();
            val_disposer.dispose();
        })
    })
}

/// Combine the latest values of two streams with a binary function.
///
/// Derived from [`map`] and [`ap`] by currying left-to-right, so nothing is
/// emitted until both inputs have produced at least one value.
///
/// # Examples
///
/// ```
/// use pulse_stream::{just, map2};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let sums = map2(|a, b| a + b, just(1), just(2));
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink_seen = Rc::clone(&seen);
/// sums.subscribe(move |x| sink_seen.borrow_mut().push(x));
/// assert_eq!(*seen.borrow(), vec![3]);
/// ```
pub fn map2<A, B, C, F>(f: F, left: Stream<A>, right: Stream<B>) -> Stream<C>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    F: Fn(A, B) -> C + Clone + 'static,
{
    let curried = map(left, move |a: A| {
        let f = f.clone();
        move |b: B| f(a.clone(), b)
    });
    ap(curried, right)
}

/// Combine the latest values of three streams with a ternary function,
/// applying arguments left-to-right through [`map2`] and [`ap`].
pub fn map3<A, B, C, D, F>(
    f: F,
    first: Stream<A>,
    second: Stream<B>,
    third: Stream<C>,
) -> Stream<D>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    D: 'static,
    F: Fn(A, B, C) -> D + Clone + 'static,
{
    let curried = map2(
        move |a: A, b: B| {
            let f = f.clone();
            move |c: C| f(a.clone(), b.clone(), c)
        },
        first,
        second,
    );
    ap(curried, third)
}

/// Combine a sequence of streams into a stream of arrays.
///
/// A right-fold of [`map2`] over the sequence, seeded with a stream emitting
/// the empty array: the result emits a fresh full array whenever any
/// constituent updates, but only after every constituent has emitted at
/// least once. `combine_array(vec![])` emits one empty array.
pub fn combine_array<T>(streams: Vec<Stream<T>>) -> Stream<Vec<T>>
where
    T: Clone + 'static,
{
    let mut combined = just(Vec::new());
    for stream in streams.into_iter().rev() {
        combined = map2(
            |head: T, tail: Vec<T>| {
                let mut array = Vec::with_capacity(tail.len() + 1);
                array.push(head);
                array.extend(tail);
                array
            },
            stream,
            combined,
        );
    }
    combined
}

/// Combine named streams into a stream of maps.
///
/// Each entry becomes a stream of key-value pairs, the pair streams are fed
/// through [`combine_array`], and every emitted array is folded back into a
/// map. Keys are expected to be unique; were one repeated, the last pair for
/// it would win.
///
/// # Examples
///
/// ```
/// use pulse_stream::{combine_object, just};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let combined = combine_object(vec![
///     ("a".to_string(), just(1)),
///     ("b".to_string(), just(2)),
/// ]);
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink_seen = Rc::clone(&seen);
/// combined.subscribe(move |m| sink_seen.borrow_mut().push(m));
/// assert_eq!(seen.borrow().len(), 1);
/// assert_eq!(seen.borrow()[0]["a"], 1);
/// assert_eq!(seen.borrow()[0]["b"], 2);
/// ```
pub fn combine_object<T>(entries: Vec<(String, Stream<T>)>) -> Stream<HashMap<String, T>>
where
    T: Clone + 'static,
{
    let keyed: Vec<Stream<(String, T)>> = entries
        .into_iter()
        .map(|(key, stream)| map(stream, move |value| (key.clone(), value)))
        .collect();
    map(combine_array(keyed), |pairs| pairs.into_iter().collect())
}
