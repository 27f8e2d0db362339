use sort_classics::sort_test_suite;
use sort_classics::unstable::quicksort;

sort_test_suite!(quicksort::SortImpl);

#[test]
fn all_equal_small() {
    // The whole range must be classified as equal to the pivot, leaving
    // nothing for the recursion.
    let mut v = [2, 2, 2];
    quicksort::sort(&mut v);
    assert_eq!(v, [2, 2, 2]);
}

#[test]
#[cfg(not(miri))]
fn duplicate_heavy_large() {
    // 100_000 equal keys. One round of partitioning has to swallow the whole
    // range into the equal band, without deep recursion or quadratic blowup.
    let mut v = vec![5i32; 100_000];
    quicksort::sort(&mut v);
    assert!(v.iter().all(|x| *x == 5));

    // Two interleaved keys stress the same path one level deeper.
    let mut v: Vec<i32> = (0..100_000).map(|i| i % 2).collect();
    quicksort::sort(&mut v);
    assert!(v.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
#[cfg(not(miri))]
fn presorted_large() {
    // Already-sorted and reverse-sorted inputs are the classic quicksort
    // killers; the midpoint pivot keeps them O(n log n).
    let mut asc: Vec<i32> = (0..100_000).collect();
    quicksort::sort(&mut asc);
    assert!(asc.windows(2).all(|w| w[0] <= w[1]));

    let mut desc: Vec<i32> = (0..100_000).rev().collect();
    quicksort::sort(&mut desc);
    assert!(desc.windows(2).all(|w| w[0] <= w[1]));
}
