//! Extension trait providing method-chaining combinators on [`Stream`].
//!
//! Every method delegates to the free function of the same name; the `_ps`
//! suffix keeps the names clear of any future inherent methods.

use crate::stream::{
    chain, chain_latest, filter, map, multicast, scan, skip, skip_duplicates, skip_while,
    start_with, take, take_until, take_while, Stream,
};
use crate::transducer::{transduce, Transducer};

/// Method-chaining combinators for [`Stream`].
pub trait PulseStreamExt<T: 'static>: Sized {
    /// Transform every value with a function. See [`map`].
    fn map_ps<U, F>(self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(T) -> U + Clone + 'static;

    /// Forward only values matching the predicate. See [`filter`].
    fn filter_ps<P>(self, predicate: P) -> Stream<T>
    where
        P: Fn(&T) -> bool + Clone + 'static;

    /// Emit the running accumulation, seed first. See [`scan`].
    fn scan_ps<U, F>(self, reducer: F, seed: U) -> Stream<U>
    where
        U: Clone + 'static,
        F: Fn(U, T) -> U + Clone + 'static;

    /// Forward at most `n` values, then unsubscribe. See [`take`].
    fn take_ps(self, n: usize) -> Stream<T>;

    /// Forward while the predicate holds. See [`take_while`].
    fn take_while_ps<P>(self, predicate: P) -> Stream<T>
    where
        P: Fn(&T) -> bool + Clone + 'static;

    /// Forward until the trigger emits. See [`take_until`].
    fn take_until_ps<S: 'static>(self, trigger: Stream<S>) -> Stream<T>;

    /// Drop the first `n` values. See [`skip`].
    fn skip_ps(self, n: usize) -> Stream<T>;

    /// Drop values while the predicate holds. See [`skip_while`].
    fn skip_while_ps<P>(self, predicate: P) -> Stream<T>
    where
        P: Fn(&T) -> bool + Clone + 'static;

    /// Suppress consecutive duplicates. See [`skip_duplicates`].
    fn skip_duplicates_ps<F>(self, comparator: F) -> Stream<T>
    where
        T: Clone,
        F: Fn(&T, &T) -> bool + Clone + 'static;

    /// Spawn a stream per value and forward all their emissions. See
    /// [`chain`].
    fn chain_ps<U, F>(self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(T) -> Stream<U> + Clone + 'static;

    /// Spawn a stream per value, keeping only the latest live. See
    /// [`chain_latest`].
    fn chain_latest_ps<U, F>(self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(T) -> Stream<U> + Clone + 'static;

    /// Share one upstream run among all subscribers. See [`multicast`].
    fn multicast_ps(self) -> Stream<T>
    where
        T: Clone;

    /// Emit `value` to each new subscriber first. See [`start_with`].
    fn start_with_ps(self, value: T) -> Stream<T>
    where
        T: Clone;

    /// Push values through a transducer. See [`transduce`].
    fn transduce_ps<U, X>(self, transducer: X) -> Stream<U>
    where
        U: 'static,
        X: Transducer<T, U> + 'static;
}

impl<T: 'static> PulseStreamExt<T> for Stream<T> {
    fn map_ps<U, F>(self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(T) -> U + Clone + 'static,
    {
        map(self, f)
    }

    fn filter_ps<P>(self, predicate: P) -> Stream<T>
    where
        P: Fn(&T) -> bool + Clone + 'static,
    {
        filter(self, predicate)
    }

    fn scan_ps<U, F>(self, reducer: F, seed: U) -> Stream<U>
    where
        U: Clone + 'static,
        F: Fn(U, T) -> U + Clone + 'static,
    {
        scan(self, reducer, seed)
    }

    fn take_ps(self, n: usize) -> Stream<T> {
        take(self, n)
    }

    fn take_while_ps<P>(self, predicate: P) -> Stream<T>
    where
        P: Fn(&T) -> bool + Clone + 'static,
    {
        take_while(self, predicate)
    }

    fn take_until_ps<S: 'static>(self, trigger: Stream<S>) -> Stream<T> {
        take_until(self, trigger)
    }

    fn skip_ps(self, n: usize) -> Stream<T> {
        skip(self, n)
    }

    fn skip_while_ps<P>(self, predicate: P) -> Stream<T>
    where
        P: Fn(&T) -> bool + Clone + 'static,
    {
        skip_while(self, predicate)
    }

    fn skip_duplicates_ps<F>(self, comparator: F) -> Stream<T>
    where
        T: Clone,
        F: Fn(&T, &T) -> bool + Clone + 'static,
    {
        skip_duplicates(self, comparator)
    }

    fn chain_ps<U, F>(self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(T) -> Stream<U> + Clone + 'static,
    {
        chain(self, f)
    }

    fn chain_latest_ps<U, F>(self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(T) -> Stream<U> + Clone + 'static,
    {
        chain_latest(self, f)
    }

    fn multicast_ps(self) -> Stream<T>
    where
        T: Clone,
    {
        multicast(self)
    }

    fn start_with_ps(self, value: T) -> Stream<T>
    where
        T: Clone,
    {
        start_with(self, value)
    }

    fn transduce_ps<U, X>(self, transducer: X) -> Stream<U>
    where
        U: 'static,
        X: Transducer<T, U> + 'static,
    {
        transduce(self, transducer)
    }
}
