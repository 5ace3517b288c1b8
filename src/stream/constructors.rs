//! Stream constructors: `empty`, `just`, `from_iter`.
//!
//! These are the ground truth for "synchronous, finite producer" semantics:
//! everything they emit is delivered during the subscribe call itself, and
//! every combinator in the crate preserves that timing.

use std::rc::Rc;

use super::core::{Disposer, Stream};

/// A stream that emits nothing and completes immediately.
pub fn empty<T: 'static>() -> Stream<T> {
    Stream::new(|_sink| Disposer::noop())
}

/// Emit a single value exactly once, synchronously, during subscribe.
///
/// By the time the caller receives the disposer the value has already been
/// delivered.
///
/// # Examples
///
/// ```
/// use pulse_stream::just;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let seen = Rc::new(Cell::new(0));
/// let sink_seen = Rc::clone(&seen);
/// just(42).subscribe(move |x| sink_seen.set(x));
/// assert_eq!(seen.get(), 42);
/// ```
pub fn just<T>(value: T) -> Stream<T>
where
    T: Clone + 'static,
{
    Stream::new(move |sink| {
        sink.emit(value.clone());
        Disposer::noop()
    })
}

/// Emit each element of a collection in order, synchronously, during
/// subscribe.
///
/// The collection is gathered once; every subscription replays it from the
/// start.
pub fn from_iter<T, I>(items: I) -> Stream<T>
where
    T: Clone + 'static,
    I: IntoIterator<Item = T>,
{
    let items: Rc<[T]> = items.into_iter().collect();
    Stream::new(move |sink| {
        for item in items.iter() {
            sink.emit(item.clone());
        }
        Disposer::noop()
    })
}
