// src/collection/linked_list.rs

use std::mem;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("index {index} is out of range for a list of length {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("node handle refers to a removed position")]
    DanglingNode,
}

/// Handle to one position in the chain.
///
/// Resolving an index to a handle is O(n); everything done through the handle
/// afterwards is O(1). Handles stay valid across value swaps but are
/// invalidated by structural mutation (insert/remove/clear).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// An index-addressable doubly-linked list.
///
/// Nodes live in a slab of slots with a free list, so a [`NodeId`] is a stable
/// reference into the slab while `prev`/`next` slot links form the chain.
/// Positional lookups walk the chain from whichever end is nearer; value swaps
/// exchange the records held by two slots without relinking anything.
#[derive(Debug)]
pub struct DoublyLinkedList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn node(&self, id: NodeId) -> Result<&Node<T>, ListError> {
        self.slots
            .get(id.0)
            .and_then(Option::as_ref)
            .ok_or(ListError::DanglingNode)
    }

    fn links(&self, slot: usize) -> (Option<usize>, Option<usize>) {
        match self.slots.get(slot).and_then(Option::as_ref) {
            Some(node) => (node.prev, node.next),
            None => (None, None),
        }
    }

    fn set_prev(&mut self, slot: usize, prev: Option<usize>) {
        if let Some(node) = self.slots.get_mut(slot).and_then(Option::as_mut) {
            node.prev = prev;
        }
    }

    fn set_next(&mut self, slot: usize, next: Option<usize>) {
        if let Some(node) = self.slots.get_mut(slot).and_then(Option::as_mut) {
            node.next = next;
        }
    }

    /// Resolves an index to its slot, walking from the nearer end of the chain.
    fn slot_at(&self, index: usize) -> Result<usize, ListError> {
        if index >= self.len {
            return Err(ListError::OutOfRange {
                index,
                len: self.len,
            });
        }
        let slot = if index <= self.len / 2 {
            let mut cur = self.head;
            for _ in 0..index {
                cur = cur.and_then(|s| self.links(s).1);
            }
            cur
        } else {
            let mut cur = self.tail;
            for _ in 0..(self.len - 1 - index) {
                cur = cur.and_then(|s| self.links(s).0);
            }
            cur
        };
        slot.ok_or(ListError::DanglingNode)
    }

    /// Appends a value at the back of the list.
    pub fn push_back(&mut self, value: T) -> NodeId {
        let prev = self.tail;
        let slot = self.alloc(Node {
            value,
            prev,
            next: None,
        });
        match prev {
            Some(p) => self.set_next(p, Some(slot)),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
        NodeId(slot)
    }

    /// Inserts `value` so it becomes the element at `index`; everything that
    /// was at `index..` shifts up one position.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<NodeId, ListError> {
        if index > self.len {
            return Err(ListError::OutOfRange {
                index,
                len: self.len,
            });
        }
        if index == self.len {
            return Ok(self.push_back(value));
        }
        let next = self.slot_at(index)?;
        let prev = self.links(next).0;
        let slot = self.alloc(Node {
            value,
            prev,
            next: Some(next),
        });
        match prev {
            Some(p) => self.set_next(p, Some(slot)),
            None => self.head = Some(slot),
        }
        self.set_prev(next, Some(slot));
        self.len += 1;
        Ok(NodeId(slot))
    }

    /// Unlinks the element at `index` and returns its value. Any handle to the
    /// removed position is dangling afterwards.
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        let slot = self.slot_at(index)?;
        let node = self
            .slots
            .get_mut(slot)
            .and_then(Option::take)
            .ok_or(ListError::DanglingNode)?;
        match node.prev {
            Some(p) => self.set_next(p, node.next),
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.set_prev(n, node.prev),
            None => self.tail = node.prev,
        }
        self.free.push(slot);
        self.len -= 1;
        Ok(node.value)
    }

    /// Returns the value at `index`. O(n) from the nearer chain end.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        let slot = self.slot_at(index)?;
        self.slots
            .get(slot)
            .and_then(Option::as_ref)
            .map(|node| &node.value)
            .ok_or(ListError::DanglingNode)
    }

    /// Resolves `index` to a position handle so repeated operations on the
    /// same position skip the chain walk.
    pub fn get_node(&self, index: usize) -> Result<NodeId, ListError> {
        Ok(NodeId(self.slot_at(index)?))
    }

    /// Returns the value held at a previously resolved position.
    pub fn value(&self, id: NodeId) -> Result<&T, ListError> {
        self.node(id).map(|node| &node.value)
    }

    /// Exchanges the values stored at positions `i` and `j`. The chain
    /// topology is untouched: values move, node identities do not.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), ListError> {
        let a = NodeId(self.slot_at(i)?);
        let b = NodeId(self.slot_at(j)?);
        self.swap_nodes(a, b)
    }

    /// [`swap`](Self::swap) for two already resolved positions. No-op when
    /// both handles name the same position.
    pub fn swap_nodes(&mut self, a: NodeId, b: NodeId) -> Result<(), ListError> {
        if a == b {
            // Still validate the handle.
            self.node(a)?;
            return Ok(());
        }
        let (lo, hi) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        if hi >= self.slots.len() {
            return Err(ListError::DanglingNode);
        }
        let (left, right) = self.slots.split_at_mut(hi);
        match (left[lo].as_mut(), right[0].as_mut()) {
            (Some(x), Some(y)) => {
                mem::swap(&mut x.value, &mut y.value);
                Ok(())
            }
            _ => Err(ListError::DanglingNode),
        }
    }

    /// Drops every value and empties the chain.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates the values front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            slot: self.head,
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Position-wise equality using the element's own equality.
impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    slot: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let slot = self.slot?;
        let node = self.list.slots.get(slot).and_then(Option::as_ref)?;
        self.slot = node.next;
        Some(&node.value)
    }
}
