use crate::collection::linked_list::{DoublyLinkedList, ListError};

/// Insertion sort: grows a sorted region at the front and sinks each new
/// element into place. The backing structure only exposes swap, not shift, so
/// the sink is a run of adjacent swaps and every one of them is counted.
///
/// Stable: equal keys never satisfy the strict order predicate, so the sink
/// stops before reordering them.
pub fn insertion_sort<T>(
    list: &mut DoublyLinkedList<T>,
    comp: impl Fn(i32, i32) -> bool,
    key: impl Fn(&T) -> i32,
) -> Result<usize, ListError> {
    let n = list.len();
    if n < 2 {
        return Ok(0);
    }
    let mut swaps = 0;
    for i in 1..n {
        let mut j = i;
        while j > 0 && comp(key(list.get(j)?), key(list.get(j - 1)?)) {
            list.swap(j, j - 1)?;
            j -= 1;
            swaps += 1;
        }
    }
    Ok(swaps)
}
