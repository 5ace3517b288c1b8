//! # pulse-stream
//!
//! A minimal, synchronous, push-based reactive-stream library.
//!
//! A [`Stream<T>`](Stream) is a function from sink to disposer: subscribing
//! runs the producer, every emission is delivered synchronously, and the
//! returned [`Disposer`] is the only completion/cancellation mechanism there
//! is. There is no scheduler, no timers, no buffering, and no error channel —
//! external producers (UI events, sockets, timers) only need to satisfy the
//! stream contract to plug in.
//!
//! ```
//! use pulse_stream::{from_iter, PulseStreamExt};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink_seen = Rc::clone(&seen);
//! from_iter(vec![1, 2, 3, 4, 5, 6])
//!     .map_ps(|x| x * 10)
//!     .filter_ps(|x| x % 20 == 0)
//!     .take_ps(2)
//!     .subscribe(move |x| sink_seen.borrow_mut().push(x));
//! assert_eq!(*seen.borrow(), vec![20, 40]);
//! ```

pub mod stream;
pub mod stream_ext;
pub mod transducer;

// Re-export the whole combinator surface at the crate root
pub use stream::*;
pub use stream_ext::PulseStreamExt;
pub use transducer::{transduce, Reducer, Step, Transducer};
