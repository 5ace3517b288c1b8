//! Core stream contract: `Stream`, `Sink`, `Disposer`.
//!
//! A `Stream<T>` is a reusable subscription recipe: calling [`Stream::subscribe`]
//! with a sink starts an independent run of the producer and hands back a
//! [`Disposer`] that ends it. Delivery is fully synchronous — a sink fires
//! within the dynamic extent of whatever triggered the emission upstream, and
//! nothing is ever buffered, deferred, or reordered.

use std::cell::Cell;
use std::rc::Rc;

/// A value-receiving callback used to observe a stream.
///
/// Sinks are invoked zero or more times, always synchronously. No return
/// value is consumed. Cloning a sink shares the underlying callback.
pub struct Sink<T: 'static> {
    deliver: Rc<dyn Fn(T)>,
}

impl<T: 'static> Sink<T> {
    /// Wrap a callback as a sink.
    pub fn new<F>(deliver: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        Sink {
            deliver: Rc::new(deliver),
        }
    }

    /// Deliver one value, synchronously.
    pub fn emit(&self, value: T) {
        (*self.deliver)(value);
    }
}

impl<T: 'static> Clone for Sink<T> {
    fn clone(&self) -> Self {
        Sink {
            deliver: Rc::clone(&self.deliver),
        }
    }
}

/// The handle returned on subscription, used to release every resource the
/// subscription chain holds.
///
/// Disposal is idempotent by construction: the teardown callback sits in a
/// take-once cell shared by all clones, so a second `dispose` call (direct or
/// through a clone) is a no-op.
pub struct Disposer {
    guard: Rc<Cell<Option<Box<dyn FnOnce()>>>>,
}

impl Disposer {
    /// Wrap a teardown callback in an idempotence guard.
    pub fn new<F>(teardown: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Disposer {
            guard: Rc::new(Cell::new(Some(Box::new(teardown)))),
        }
    }

    /// A disposer with nothing to release, for producers that finish
    /// synchronously during subscribe.
    pub fn noop() -> Self {
        Disposer {
            guard: Rc::new(Cell::new(None)),
        }
    }

    /// Synchronously release the subscription. Safe to call any number of
    /// times; only the first call has effect.
    pub fn dispose(&self) {
        if let Some(teardown) = self.guard.take() {
            teardown();
        }
    }
}

impl Clone for Disposer {
    fn clone(&self) -> Self {
        Disposer {
            guard: Rc::clone(&self.guard),
        }
    }
}

/// A push-based producer of discrete events.
///
/// A stream value is stateless and cheap to clone; every `subscribe` call is
/// an independent run of the producing logic unless the stream was wrapped by
/// [`multicast`](crate::stream::multicast::multicast). Streams are
/// single-threaded (`!Send`) — all "concurrency" in this library is logical
/// simultaneity of subscriptions within one call stack.
///
/// Invariant: subscribing always yields a disposer, even when the producer
/// completed synchronously before `subscribe` returned.
///
/// # Examples
///
/// ```
/// use pulse_stream::from_iter;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let stream = from_iter(vec![1, 2, 3]);
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink_seen = Rc::clone(&seen);
/// let disposer = stream.subscribe(move |x| sink_seen.borrow_mut().push(x));
/// disposer.dispose();
/// assert_eq!(*seen.borrow(), vec![1, 2, 3]);
/// ```
pub struct Stream<T: 'static> {
    subscribe_fn: Rc<dyn Fn(Sink<T>) -> Disposer>,
}

impl<T: 'static> Stream<T> {
    /// Build a stream from its subscription function.
    ///
    /// The function is invoked once per subscriber and must return a disposer
    /// that synchronously releases everything that run acquired.
    pub fn new<F>(subscribe: F) -> Self
    where
        F: Fn(Sink<T>) -> Disposer + 'static,
    {
        Stream {
            subscribe_fn: Rc::new(subscribe),
        }
    }

    /// Start a subscription, delivering every emission to `sink`.
    pub fn subscribe<F>(&self, sink: F) -> Disposer
    where
        F: Fn(T) + 'static,
    {
        (*self.subscribe_fn)(Sink::new(sink))
    }

    /// Start a subscription with an existing sink handle.
    ///
    /// Combinators that relay to a downstream sink use this to avoid stacking
    /// an extra closure per hop.
    pub fn subscribe_sink(&self, sink: Sink<T>) -> Disposer {
        (*self.subscribe_fn)(sink)
    }
}

impl<T: 'static> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Stream {
            subscribe_fn: Rc::clone(&self.subscribe_fn),
        }
    }
}
