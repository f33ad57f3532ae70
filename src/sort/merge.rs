use crate::collection::linked_list::{DoublyLinkedList, ListError, NodeId};

/// Merge sort: divide-and-conquer on the index range `[lhs, rhs]`.
///
/// The relocation count is the number of elements written to the merge buffer
/// while both halves still have candidates (head-to-head writes). Draining the
/// exhausted side's remainder is not counted, so the count differs in kind
/// from the swap counts of the other algorithms.
///
/// Stable: the left half wins on equal keys.
pub fn merge_sort<T>(
    list: &mut DoublyLinkedList<T>,
    comp: impl Fn(i32, i32) -> bool,
    key: impl Fn(&T) -> i32,
) -> Result<usize, ListError> {
    if list.len() < 2 {
        return Ok(0);
    }
    let rhs = list.len() - 1;
    merge_range(list, &comp, &key, 0, rhs)
}

fn merge_range<T, C, K>(
    list: &mut DoublyLinkedList<T>,
    comp: &C,
    key: &K,
    lhs: usize,
    rhs: usize,
) -> Result<usize, ListError>
where
    C: Fn(i32, i32) -> bool,
    K: Fn(&T) -> i32,
{
    if lhs >= rhs {
        return Ok(0);
    }
    let middle = lhs + (rhs - lhs) / 2;
    let mut written = merge_range(list, comp, key, lhs, middle)?
        + merge_range(list, comp, key, middle + 1, rhs)?;

    // Resolve every position in the range once; the handles stay valid across
    // the value swaps below.
    let nodes = (lhs..=rhs)
        .map(|i| list.get_node(i))
        .collect::<Result<Vec<_>, _>>()?;

    // Cursors are relative to the range start.
    let mid = middle - lhs;
    let last = rhs - lhs;
    let mut order = Vec::with_capacity(nodes.len());
    let mut i = 0;
    let mut j = mid + 1;
    while i <= mid && j <= last {
        let left = key(list.value(nodes[i])?);
        let right = key(list.value(nodes[j])?);
        // Left wins on equal keys; this tie-break carries the stability claim.
        if !comp(right, left) {
            order.push(i);
            i += 1;
        } else {
            order.push(j);
            j += 1;
        }
        written += 1;
    }
    // The leftover side is already in relative order; draining it is not a
    // head-to-head write and is not counted.
    while i <= mid {
        order.push(i);
        i += 1;
    }
    while j <= last {
        order.push(j);
        j += 1;
    }

    apply_order(list, &nodes, &order)?;
    Ok(written)
}

/// Rearranges the range so position `d` ends up holding the value that was at
/// relative position `order[d]`, moving values with swaps only. No record is
/// cloned or reallocated.
fn apply_order<T>(
    list: &mut DoublyLinkedList<T>,
    nodes: &[NodeId],
    order: &[usize],
) -> Result<(), ListError> {
    // Invert to destination form: the value at `s` must end up at `dest[s]`.
    let mut dest = vec![0; order.len()];
    for (d, &s) in order.iter().enumerate() {
        dest[s] = d;
    }
    for s in 0..dest.len() {
        while dest[s] != s {
            let d = dest[s];
            list.swap_nodes(nodes[s], nodes[d])?;
            dest.swap(s, d);
        }
    }
    Ok(())
}
