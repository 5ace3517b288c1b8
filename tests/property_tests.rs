//! Property tests over arbitrary finite input sequences.

mod common;

use common::collect;
use pulse_stream::{filter, from_iter, map, scan, skip, skip_duplicates, take};
use quickcheck::quickcheck;

quickcheck! {
    fn map_matches_iterator_map(values: Vec<i32>) -> bool {
        let streamed = collect(&map(from_iter(values.clone()), |x| x.wrapping_mul(3)));
        let expected: Vec<i32> = values.into_iter().map(|x| x.wrapping_mul(3)).collect();
        streamed == expected
    }

    fn filter_keeps_matching_subsequence_in_order(values: Vec<i32>) -> bool {
        let streamed = collect(&filter(from_iter(values.clone()), |x| x % 2 == 0));
        let expected: Vec<i32> = values.into_iter().filter(|x| x % 2 == 0).collect();
        streamed == expected
    }

    fn take_is_the_n_prefix(values: Vec<i32>, n: usize) -> bool {
        let n = n % 20;
        let streamed = collect(&take(from_iter(values.clone()), n));
        let expected: Vec<i32> = values.into_iter().take(n).collect();
        streamed == expected
    }

    fn skip_is_the_n_suffix(values: Vec<i32>, n: usize) -> bool {
        let n = n % 20;
        let streamed = collect(&skip(from_iter(values.clone()), n));
        let expected: Vec<i32> = values.into_iter().skip(n).collect();
        streamed == expected
    }

    fn scan_matches_running_fold_with_seed_first(values: Vec<i32>) -> bool {
        let streamed = collect(&scan(from_iter(values.clone()), |acc: i64, x| acc + i64::from(x), 0i64));
        let mut expected = vec![0i64];
        let mut acc = 0i64;
        for x in values {
            acc += i64::from(x);
            expected.push(acc);
        }
        streamed == expected
    }

    fn skip_duplicates_matches_dedup(values: Vec<i8>) -> bool {
        let streamed = collect(&skip_duplicates(from_iter(values.clone()), |a, b| a == b));
        let mut expected = values;
        expected.dedup();
        streamed == expected
    }
}
