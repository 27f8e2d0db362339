//! Top-down merge sort: split at the midpoint, sort both halves recursively,
//! merge the two adjacent sorted runs.
//!
//! The merge is buffered: one scratch allocation of len / 2 elements is made
//! per top-level call and the left run is staged through it. That buys an
//! O(n) merge per level, O(n log n) total, at the cost of O(n / 2) extra
//! space. A buffer-free in-place merge would avoid the allocation but pay
//! O(n log n) work per level. Ties always consume the left run first, which is
//! what makes the sort stable.

use std::cmp::Ordering;
use std::mem;
use std::ptr;

register_sort!("mergesort_stable");

/// Sorts the slice in non-descending order.
///
/// Stable: elements that compare equal keep their original relative order.
/// O(n log n) comparisons, allocates a scratch buffer of half the slice
/// length.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function.
///
/// `compare` must implement a strict weak ordering. If it doesn't, or if it
/// panics, the resulting order is unspecified but the slice keeps its original
/// elements.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    let len = v.len();
    if len < 2 {
        return;
    }

    // One allocation for the whole sort. `merge` only ever stages the left
    // run, which splitting at len / 2 makes the run of at most len / 2
    // elements, so this capacity is enough for every level of the recursion.
    // The Vec stays logically empty the whole time, elements only pass
    // through its spare capacity.
    let mut buf = Vec::with_capacity(len / 2);
    let buf_ptr = buf.as_mut_ptr();

    sort_halves(v, buf_ptr, is_less);
}

fn sort_halves<T, F>(v: &mut [T], buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    sort_halves(&mut v[..mid], buf, is_less);
    sort_halves(&mut v[mid..], buf, is_less);

    // Already in order across the split point, nothing to merge. Makes sorted
    // and all-equal inputs cost one comparison per level.
    if !is_less(&v[mid], &v[mid - 1]) {
        return;
    }

    // SAFETY: both runs are non-empty, and mid = len / 2 means the left run
    // never exceeds the caller's len / 2 element buffer.
    unsafe {
        merge(v, mid, buf, is_less);
    }
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` into one sorted run. The
/// left run is staged in `buf` and merged back into the gap this opens up,
/// with ties taken from the left so equal elements keep their order.
///
/// # Safety
///
/// `mid` must split `v` into two non-empty runs with `mid <= len - mid`, and
/// `buf` must be valid for reads and writes of `mid` elements.
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(mid <= v.len() - mid);

    let len = v.len();
    let base = v.as_mut_ptr();

    ptr::copy_nonoverlapping(base, buf, mid);

    // `guard` owns the still-unmerged part of the staged left run. If
    // `is_less` panics it drops and moves those elements back into the gap,
    // so `v` holds every original element exactly once and nothing
    // double-drops. The same drop also flushes the left run's tail when the
    // right run is exhausted first.
    let mut guard = HoleGuard {
        remaining: buf,
        end: buf.add(mid),
        gap: base,
    };
    let mut right = base.add(mid);
    let right_end = base.add(len);

    while guard.remaining < guard.end && right < right_end {
        let take_right = is_less(&*right, &*guard.remaining);
        let src = if take_right {
            bump(&mut right)
        } else {
            bump(&mut guard.remaining)
        };
        ptr::copy_nonoverlapping(src, bump(&mut guard.gap), 1);
    }
}

/// Returns the pointer and steps it one element forward.
unsafe fn bump<T>(slot: &mut *mut T) -> *mut T {
    let p = *slot;
    *slot = p.add(1);
    p
}

// On drop, moves `remaining..end` back into the slice starting at `gap`.
struct HoleGuard<T> {
    remaining: *mut T,
    end: *mut T,
    gap: *mut T,
}

impl<T> Drop for HoleGuard<T> {
    fn drop(&mut self) {
        // SAFETY: `remaining..end` holds elements whose slots in the slice
        // are currently vacant, starting at `gap`.
        unsafe {
            let tail = self.end.offset_from(self.remaining) as usize;
            ptr::copy_nonoverlapping(self.remaining, self.gap, tail);
        }
    }
}
