//! Classic comparison sorts over mutable slices: selection sort, three-way
//! quicksort and a stable merge sort. Ships with the seeded input generators
//! and the shared property suite used to validate and benchmark all of them.

/// What the shared test suite and the benches need from a sort: a display
/// name plus the two entry points every sort module in this crate exports.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

/// Wires a sort module's free `sort` / `sort_by` functions into a unit struct
/// implementing [`Sort`], so the module can be addressed as a type.
macro_rules! register_sort {
    ($name:literal) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.to_string()
            }

            #[inline]
            fn sort<T: Ord>(arr: &mut [T]) {
                sort(arr)
            }

            #[inline]
            fn sort_by<T, F: FnMut(&T, &T) -> std::cmp::Ordering>(arr: &mut [T], compare: F) {
                sort_by(arr, compare)
            }
        }
    };
}

pub mod patterns;
pub mod stable;
pub mod unstable;
