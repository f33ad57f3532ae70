use crate::collection::linked_list::{DoublyLinkedList, ListError};

/// Bubble sort: repeatedly compares adjacent elements and swaps them when they
/// are out of order; each pass floats one more element to its final position.
///
/// Returns the number of swaps performed (zero for an already ordered input).
pub fn bubble_sort<T>(
    list: &mut DoublyLinkedList<T>,
    comp: impl Fn(i32, i32) -> bool,
    key: impl Fn(&T) -> i32,
) -> Result<usize, ListError> {
    let n = list.len();
    if n < 2 {
        return Ok(0);
    }
    let mut swaps = 0;
    for pass in 0..n - 1 {
        for j in 0..n - 1 - pass {
            let upper = key(list.get(j + 1)?);
            let lower = key(list.get(j)?);
            if comp(upper, lower) {
                list.swap(j, j + 1)?;
                swaps += 1;
            }
        }
    }
    Ok(swaps)
}
