// src/sort/mod.rs
//
// Four classical comparison sorts written against the positional interface of
// `DoublyLinkedList` (get-by-index, swap-by-index) only. Each takes an order
// predicate `comp(a, b)` meaning "a should precede b" plus a key selector, and
// returns its relocation count: the number of swaps for bubble, insertion and
// quick sort, the number of head-to-head merge writes for merge sort.

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;

pub use bubble::bubble_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;

/// Order predicate for ascending runs.
#[inline]
pub fn ascending(a: i32, b: i32) -> bool {
    a < b
}

/// Order predicate for descending runs.
#[inline]
pub fn descending(a: i32, b: i32) -> bool {
    a > b
}
