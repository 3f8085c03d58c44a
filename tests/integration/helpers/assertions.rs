//! Custom assertion helpers for integration tests.

#![allow(dead_code)]

use std::fmt::Debug;

/// Asserts that `output` is non-decreasing.
///
/// # Panics
///
/// Panics with the first out-of-order position.
pub fn assert_sorted<T: Ord + Debug>(output: &[T]) {
    if let Some(i) = output.windows(2).position(|w| w[0] > w[1]) {
        panic!("output not sorted at index {i}: {:?} > {:?}", output[i], output[i + 1]);
    }
}

/// Asserts that `output` holds exactly the same multiset of values as `input`.
///
/// # Panics
///
/// Panics if the lengths or the sorted contents differ.
pub fn assert_permutation<T: Ord + Clone + Debug>(input: &[T], output: &[T]) {
    assert_eq!(input.len(), output.len(), "length changed");
    let mut a = input.to_vec();
    let mut b = output.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b, "output is not a permutation of the input");
}

/// Asserts that `output` is the sorted version of `input`.
pub fn assert_sorted_permutation<T: Ord + Clone + Debug>(input: &[T], output: &[T]) {
    assert_sorted(output);
    assert_permutation(input, output);
}
