//! Bridge from the external reducer/transducer protocol to the stream
//! contract.
//!
//! A [`Transducer`] is a composable transformation of reducers, defined by
//! host code rather than this crate. [`transduce`] adapts one into a stream
//! operator by applying it to a terminal step that forwards each input to the
//! downstream sink. The accumulator is an opaque sentinel here — the bridge
//! fixes it to `()` and only ever reads the early-termination signal.

use std::cell::RefCell;
use std::rc::Rc;

use crate::stream::core::{Disposer, Sink, Stream};

/// Outcome of a reducer step: keep reducing, or terminate early with the
/// final accumulator.
pub enum Step<Acc> {
    /// The reduction continues with this accumulator.
    Continue(Acc),
    /// Early termination: the reduction is done and no further inputs are
    /// wanted.
    Reduced(Acc),
}

/// The two-capability reducing protocol.
///
/// `step` folds one input into the accumulator (or signals early
/// termination); `result` finalizes the accumulator and is called exactly
/// once at the end of a reduction.
pub trait Reducer<In> {
    /// Accumulator type threaded through the reduction.
    type Acc;

    /// Fold one input into the accumulator.
    fn step(&mut self, acc: Self::Acc, input: In) -> Step<Self::Acc>;

    /// Finalize the reduction.
    fn result(&mut self, acc: Self::Acc) -> Self::Acc;
}

/// A composable transformation of reducers.
///
/// `transform` takes `&self` so a transducer value, like a stream, is
/// reusable: every subscription builds its own transformer from it.
pub trait Transducer<In, Out> {
    /// Wrap the inner reducer, producing the reducer actually driven by the
    /// upstream.
    fn transform(
        &self,
        inner: Box<dyn Reducer<Out, Acc = ()>>,
    ) -> Box<dyn Reducer<In, Acc = ()>>;
}

/// Terminal step: forwards every input to the sink, ignoring the
/// accumulator, and never terminates on its own.
struct SinkStep<T: 'static> {
    sink: Sink<T>,
}

impl<T: 'static> Reducer<T> for SinkStep<T> {
    type Acc = ();

    fn step(&mut self, _acc: (), input: T) -> Step<()> {
        self.sink.emit(input);
        Step::Continue(())
    }

    fn result(&mut self, _acc: ()) {}
}

/// Adapt a transducer into a stream operator.
///
/// Each upstream value is pushed through the transformer's `step`. When a
/// step signals [`Step::Reduced`], the bridge calls `result` once, discards
/// the transformer, and disposes the upstream subscription — this is how
/// take-like transducers short-circuit the pipeline. Steps arriving after
/// termination are ignored.
pub fn transduce<T, U, X>(stream: Stream<T>, transducer: X) -> Stream<U>
where
    T: 'static,
    U: 'static,
    X: Transducer<T, U> + 'static,
{
    let transducer = Rc::new(transducer);
    Stream::new(move |sink| {
        let transformer: Rc<RefCell<Option<Box<dyn Reducer<T, Acc = ()>>>>> = Rc::new(
            RefCell::new(Some(transducer.transform(Box::new(SinkStep { sink })))),
        );
        let upstream: Rc<RefCell<Option<Disposer>>> = Rc::new(RefCell::new(None));
        let disposer = {
            let transformer = Rc::clone(&transformer);
            let upstream = Rc::clone(&upstream);
            stream.subscribe(move |x| {
                // Take the transformer out while stepping: emissions that
                // re-enter during the step, or arrive after termination,
                // find the slot empty and are ignored.
                let taken = transformer.borrow_mut().take();
                let mut reducer = match taken {
                    Some(r) => r,
                    None => return,
                };
                match reducer.step((), x) {
                    Step::Continue(()) => {
                        *transformer.borrow_mut() = Some(reducer);
                    }
                    Step::Reduced(()) => {
                        reducer.result(());
                        log::trace!("transduce: early termination signalled, disposing upstream");
                        let held = upstream.borrow_mut().take();
                        if let Some(d) = held {
                            d.dispose();
                        }
                    }
                }
            })
        };
        if transformer.borrow().is_none() {
            // Terminated during a synchronous subscribe-time emission.
            disposer.dispose();
        } else {
            *upstream.borrow_mut() = Some(disposer.clone());
        }
        disposer
    })
}
