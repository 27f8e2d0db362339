pub mod quicksort;
pub mod selection;
