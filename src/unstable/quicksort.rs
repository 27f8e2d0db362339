//! Recursive quicksort with a deterministic midpoint pivot and a three-way
//! partition. The equal-to-pivot band is final after partitioning and skipped
//! by the recursion, so inputs with many duplicate keys stay O(n log n)
//! instead of degrading quadratically.

use std::cmp::Ordering;

register_sort!("quicksort_3way_unstable");

/// Sorts the slice in non-descending order.
///
/// In-place and not stable. Average O(n log n) comparisons; the fixed midpoint
/// pivot leaves a crafted O(n^2) worst case open.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function.
///
/// `compare` must implement a strict weak ordering. If it doesn't, the
/// resulting order is unspecified but the slice keeps its original elements,
/// since partitioning only ever swaps.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn quicksort<'a, T, F>(mut v: &'a mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let len = v.len();
        if len < 2 {
            return;
        }

        // Deterministic midpoint pivot, moved to the front so it stays put
        // while the rest is partitioned. Cheap, and immune to the classic
        // sorted-input worst case of first/last element pivoting.
        v.swap(0, len / 2);

        let (lt_count, eq_count) = {
            let (pivot, rest) = v.split_at_mut(1);
            let pivot = &pivot[0];

            // Two passes build a three-way split of `rest`:
            // [..lt) < pivot, [lt..lt + eq) == pivot, [lt + eq..) > pivot.
            let lt = partition(rest, &mut |elem| is_less(elem, pivot));
            let eq = partition(&mut rest[lt..], &mut |elem| !is_less(pivot, elem));

            (lt, eq)
        };

        // Move the pivot itself to the front of the equal band. The displaced
        // element compares less than the pivot, so the left band stays intact.
        v.swap(0, lt_count);

        // v[lt_count..=lt_count + eq_count] is in final position, only the
        // outer bands need sorting. Recurse into the shorter one and loop on
        // the longer one, which bounds stack depth to O(log n) even when the
        // pivot choice degrades.
        let (left, rest) = v.split_at_mut(lt_count);
        let right = &mut rest[eq_count + 1..];

        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Moves every element satisfying `pred` to the front of `v` and returns how
/// many there are. Single forward pass of swaps, no allocation, the relative
/// order within each side is not preserved.
fn partition<T, F>(v: &mut [T], pred: &mut F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let mut l = 0;
    for r in 0..v.len() {
        if pred(&v[r]) {
            v.swap(l, r);
            l += 1;
        }
    }

    l
}
