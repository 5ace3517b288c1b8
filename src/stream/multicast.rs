//! Multicast adapter: share one upstream run among many subscribers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::core::{Disposer, Sink, Stream};

/// Convert a cold stream into a warm one: all current subscribers share
/// exactly one underlying subscription.
///
/// The first subscriber starts the upstream run; later subscribers just join
/// the registry. Every upstream emission is broadcast to a snapshot of the
/// registry, skipping sinks that removed themselves earlier in the same
/// broadcast pass. When the last subscriber detaches, the upstream
/// subscription is disposed and the retained disposer cleared, so the next
/// subscriber restarts the producer fresh.
///
/// # Examples
///
/// ```
/// use pulse_stream::{multicast, Stream, Disposer, Sink};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let runs = Rc::new(Cell::new(0));
/// let producer_runs = Rc::clone(&runs);
/// let cold = Stream::new(move |_sink: Sink<i32>| {
///     producer_runs.set(producer_runs.get() + 1);
///     Disposer::noop()
/// });
/// let warm = multicast(cold);
/// let a = warm.subscribe(|_| {});
/// let b = warm.subscribe(|_| {});
/// assert_eq!(runs.get(), 1);
/// a.dispose();
/// b.dispose();
/// warm.subscribe(|_| {}).dispose();
/// assert_eq!(runs.get(), 2);
/// ```
pub fn multicast<T>(stream: Stream<T>) -> Stream<T>
where
    T: Clone + 'static,
{
    let sinks: Rc<RefCell<Vec<(u64, Sink<T>)>>> = Rc::new(RefCell::new(Vec::new()));
    let next_id = Rc::new(Cell::new(0u64));
    let upstream: Rc<RefCell<Option<Disposer>>> = Rc::new(RefCell::new(None));
    Stream::new(move |sink| {
        let id = next_id.get();
        next_id.set(id + 1);
        sinks.borrow_mut().push((id, sink));
        log::trace!("multicast: subscriber {} attached", id);
        if sinks.borrow().len() == 1 {
            log::debug!("multicast: starting shared upstream run");
            let registry = Rc::clone(&sinks);
            let disposer = stream.subscribe(move |value: T| {
                // Snapshot, then re-check membership per sink: a sink that
                // disposed itself mid-broadcast must not be revisited.
                let snapshot: Vec<(u64, Sink<T>)> = registry.borrow().clone();
                for (sink_id, sink) in snapshot {
                    let attached = registry.borrow().iter().any(|(i, _)| *i == sink_id);
                    if attached {
                        sink.emit(value.clone());
                    }
                }
            });
            if sinks.borrow().is_empty() {
                // The sole subscriber detached during a synchronous
                // subscribe-time emission, before the disposer existed.
                disposer.dispose();
            } else {
                *upstream.borrow_mut() = Some(disposer);
            }
        }
        let registry = Rc::clone(&sinks);
        let upstream = Rc::clone(&upstream);
        Disposer::new(move || {
            registry.borrow_mut().retain(|(sink_id, _)| *sink_id != id);
            log::trace!("multicast: subscriber {} detached", id);
            if registry.borrow().is_empty() {
                log::debug!("multicast: last subscriber gone, disposing shared upstream run");
                let held = upstream.borrow_mut().take();
                if let Some(d) = held {
                    d.dispose();
                }
            }
        })
    })
}

/// Emit `value` synchronously to each new subscriber before forwarding the
/// wrapped stream. Independent of [`multicast`], but often composed with it.
pub fn start_with<T>(stream: Stream<T>, value: T) -> Stream<T>
where
    T: Clone + 'static,
{
    Stream::new(move |sink| {
        sink.emit(value.clone());
        stream.subscribe_sink(sink)
    })
}
