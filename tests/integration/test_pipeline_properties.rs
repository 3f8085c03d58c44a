//! Properties of the partition / sort / merge pipeline.

use chunksort_lib::random::{create_rng, generate_random};
use chunksort_lib::sort::{
    ChunkSorter, MergeStrategy, chunk_count, chunk_sizes, merge_with, partition, process,
    sort_all,
};

use crate::helpers::{assert_sorted_permutation, seeded_values};

#[test]
fn test_worked_example() {
    let input = vec![5, 3, 8, 1, 9, 2, 7, 4, 6, 0];
    assert_eq!(chunk_sizes(input.len()), vec![3, 3, 2, 2]);

    let report = ChunkSorter::new().process_with_report(input);
    assert_eq!(
        report.chunks_before,
        vec![vec![5, 3, 8], vec![1, 9, 2], vec![7, 4], vec![6, 0]]
    );
    assert_eq!(
        report.chunks_after,
        vec![vec![3, 5, 8], vec![1, 2, 9], vec![4, 7], vec![0, 6]]
    );
    assert_eq!(report.output, (0..10).collect::<Vec<i64>>());
}

#[test]
fn test_empty_input() {
    assert!(process(Vec::<i64>::new()).is_empty());
    let report = ChunkSorter::new().process_with_report(Vec::<i64>::new());
    assert!(report.chunks_before.is_empty());
    assert!(report.output.is_empty());
}

#[test]
fn test_all_equal_values() {
    assert_eq!(process(vec![1i64; 20]), vec![1i64; 20]);
}

#[test]
fn test_single_value() {
    let report = ChunkSorter::new().process_with_report(vec![42i64]);
    assert_eq!(report.chunks_before, vec![vec![42]]);
    assert_eq!(report.output, vec![42]);
}

#[test]
fn test_random_thousand_is_sorted_and_reproducible() {
    let first = generate_random(&mut create_rng(Some(1000)), 1000).unwrap();
    let second = generate_random(&mut create_rng(Some(1000)), 1000).unwrap();
    assert_eq!(first, second);

    let sorted = process(first.clone());
    assert_sorted_permutation(&first, &sorted);
    assert_eq!(process(second), sorted);
}

#[test]
fn test_output_independent_of_threads_and_strategy() {
    let input = seeded_values(7, 5000, -10_000, 10_000);
    let expected = {
        let mut v = input.clone();
        v.sort_unstable();
        v
    };

    for threads in [1, 2, 3, 8] {
        for strategy in [MergeStrategy::LinearScan, MergeStrategy::Heap] {
            let sorter = ChunkSorter::new().threads(threads).unwrap().merge_strategy(strategy);
            assert_eq!(
                sorter.process(input.clone()),
                expected,
                "threads={threads} strategy={strategy}"
            );
        }
    }
}

#[test]
fn test_idempotent() {
    let input = seeded_values(11, 777, i64::MIN, i64::MAX);
    let once = process(input.clone());
    assert_sorted_permutation(&input, &once);
    assert_eq!(process(once.clone()), once);
}

#[test]
fn test_many_sizes() {
    for n in 0..300usize {
        let input = seeded_values(n as u64, n, -50, 50);
        let output = process(input.clone());
        assert_sorted_permutation(&input, &output);
    }
}

#[test]
fn test_partition_covers_input_with_balanced_sizes() {
    for n in [1usize, 2, 3, 4, 5, 10, 16, 17, 99, 100, 101, 1000, 4097] {
        let original: Vec<usize> = (0..n).collect();
        let mut data = original.clone();
        let chunks = partition(&mut data);

        assert_eq!(chunks.len(), chunk_count(n).min(n), "n={n}");
        let sizes: Vec<usize> = chunks.iter().map(|c| c.len()).collect();
        assert_eq!(sizes, chunk_sizes(n));
        let (min, max) = (sizes.iter().min().unwrap(), sizes.iter().max().unwrap());
        assert!(max - min <= 1, "n={n} sizes={sizes:?}");

        let joined: Vec<usize> = chunks.iter().flat_map(|c| c.iter().copied()).collect();
        assert_eq!(joined, original);
    }
}

#[test]
fn test_sorting_chunks_sorts_the_backing_buffer_in_place() {
    let mut data = seeded_values(3, 64, 0, 9);
    let snapshot = data.clone();
    {
        let mut chunks = partition(&mut data);
        sort_all(&mut chunks);
    }
    for (sorted, raw) in data.chunks(8).zip(snapshot.chunks(8)) {
        let mut expected = raw.to_vec();
        expected.sort_unstable();
        assert_eq!(sorted, expected.as_slice());
    }
}

#[test]
fn test_heap_merge_matches_linear_scan() {
    for seed in 0..20u64 {
        let k = 1 + (seed as usize % 9);
        let mut chunks: Vec<Vec<i64>> =
            (0..k).map(|i| seeded_values(seed * 31 + i as u64, i * 3, -20, 20)).collect();
        for chunk in &mut chunks {
            chunk.sort_unstable();
        }
        let views: Vec<&[i64]> = chunks.iter().map(Vec::as_slice).collect();
        assert_eq!(
            merge_with(MergeStrategy::Heap, &views),
            merge_with(MergeStrategy::LinearScan, &views)
        );
    }
}
