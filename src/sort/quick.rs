use crate::collection::linked_list::{DoublyLinkedList, ListError};

/// Quick sort with a Lomuto partition.
///
/// The pivot is always the element at `high`. The policy is deliberately
/// fixed: a randomized or median-of-three pivot would be more robust against
/// ordered input, but it would also change the observable swap count.
///
/// Returns the number of swaps, including the pivot-placing swap of every
/// partition even when the pivot already sits at its final position.
pub fn quick_sort<T>(
    list: &mut DoublyLinkedList<T>,
    comp: impl Fn(i32, i32) -> bool,
    key: impl Fn(&T) -> i32,
) -> Result<usize, ListError> {
    let n = list.len();
    if n < 2 {
        return Ok(0);
    }
    let mut swaps = 0;
    quick_range(list, &comp, &key, 0, n - 1, &mut swaps)?;
    Ok(swaps)
}

fn quick_range<T, C, K>(
    list: &mut DoublyLinkedList<T>,
    comp: &C,
    key: &K,
    low: usize,
    high: usize,
    swaps: &mut usize,
) -> Result<(), ListError>
where
    C: Fn(i32, i32) -> bool,
    K: Fn(&T) -> i32,
{
    if low >= high {
        return Ok(());
    }
    let pivot = partition(list, comp, key, low, high, swaps)?;
    if pivot > low {
        quick_range(list, comp, key, low, pivot - 1, swaps)?;
    }
    if pivot < high {
        quick_range(list, comp, key, pivot + 1, high, swaps)?;
    }
    Ok(())
}

/// Partitions `[low, high]` around the element at `high` and returns the
/// pivot's final index. Every element that should precede the pivot is swapped
/// down to the growing boundary.
fn partition<T, C, K>(
    list: &mut DoublyLinkedList<T>,
    comp: &C,
    key: &K,
    low: usize,
    high: usize,
    swaps: &mut usize,
) -> Result<usize, ListError>
where
    C: Fn(i32, i32) -> bool,
    K: Fn(&T) -> i32,
{
    let pivot_key = key(list.get(high)?);
    // Next slot for an element that precedes the pivot.
    let mut boundary = low;
    for j in low..high {
        if comp(key(list.get(j)?), pivot_key) {
            list.swap(boundary, j)?;
            *swaps += 1;
            boundary += 1;
        }
    }
    // Pivot placement is counted even when it lands on itself.
    list.swap(boundary, high)?;
    *swaps += 1;
    Ok(boundary)
}
