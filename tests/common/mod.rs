//! Shared helpers for the integration tests.

#![allow(dead_code)]

use pulse_stream::{Disposer, Sink, Stream};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Subscribe, gather everything delivered synchronously, dispose, return.
pub fn collect<T: Clone + 'static>(stream: &Stream<T>) -> Vec<T> {
    let out = Rc::new(RefCell::new(Vec::new()));
    let sink_out = Rc::clone(&out);
    let disposer = stream.subscribe(move |x| sink_out.borrow_mut().push(x));
    disposer.dispose();
    let collected = out.borrow().clone();
    collected
}

/// A sink that records into a shared vector, for tests that keep emitting
/// after subscribe returns.
pub fn recording_sink<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, impl Fn(T) + 'static) {
    let out = Rc::new(RefCell::new(Vec::new()));
    let sink_out = Rc::clone(&out);
    (out, move |x: T| sink_out.borrow_mut().push(x))
}

/// A hand-driven push source that counts its subscriptions and disposals.
///
/// `stream()` hands out a cold stream backed by this source: each
/// subscription registers a sink that `emit` broadcasts to until the
/// subscription's disposer runs.
#[derive(Clone)]
pub struct TestSource<T: 'static> {
    sinks: Rc<RefCell<Vec<(u64, Sink<T>)>>>,
    next_id: Rc<Cell<u64>>,
    subscriptions: Rc<Cell<usize>>,
    disposals: Rc<Cell<usize>>,
}

impl<T: Clone + 'static> TestSource<T> {
    pub fn new() -> Self {
        TestSource {
            sinks: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
            subscriptions: Rc::new(Cell::new(0)),
            disposals: Rc::new(Cell::new(0)),
        }
    }

    pub fn stream(&self) -> Stream<T> {
        let source = self.clone();
        Stream::new(move |sink| {
            source.subscriptions.set(source.subscriptions.get() + 1);
            let id = source.next_id.get();
            source.next_id.set(id + 1);
            source.sinks.borrow_mut().push((id, sink));
            let sinks = Rc::clone(&source.sinks);
            let disposals = Rc::clone(&source.disposals);
            Disposer::new(move || {
                sinks.borrow_mut().retain(|(sink_id, _)| *sink_id != id);
                disposals.set(disposals.get() + 1);
            })
        })
    }

    /// Push a value to every currently subscribed sink.
    pub fn emit(&self, value: T) {
        let snapshot: Vec<(u64, Sink<T>)> = self.sinks.borrow().clone();
        for (_, sink) in snapshot {
            sink.emit(value.clone());
        }
    }

    /// Number of subscriptions currently live.
    pub fn active(&self) -> usize {
        self.sinks.borrow().len()
    }

    /// Total subscribe calls seen.
    pub fn subscriptions(&self) -> usize {
        self.subscriptions.get()
    }

    /// Total disposer invocations that had effect.
    pub fn disposals(&self) -> usize {
        self.disposals.get()
    }
}
