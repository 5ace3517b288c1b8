//! Synchronous push-stream primitive and its combinator set.
//!
//! Everything here composes by plain function application:
//! `take(map(stream, f), 3)` — or method-chaining through
//! [`PulseStreamExt`](crate::stream_ext::PulseStreamExt).

pub mod combine;
pub mod constructors;
pub mod core;
pub mod multicast;
pub mod slice;
pub mod transform;

// Re-export the core contract
pub use self::core::{Disposer, Sink, Stream};

// Re-export constructors
pub use self::constructors::{empty, from_iter, just};

// Re-export value transformers
pub use self::transform::{filter, map, scan};

// Re-export slicing operators
pub use self::slice::{skip, skip_duplicates, skip_while, take, take_until, take_while};

// Re-export multi-stream combinators
pub use self::combine::{ap, chain, chain_latest, combine_array, combine_object, map2, map3, merge};

// Re-export the multicast adapter
pub use self::multicast::{multicast, start_with};
