//! # Card Shop Library
//!
//! An ordered stock of trading card records that can be reordered in place by
//! four classical comparison sorts, each selectable at call time by an order
//! predicate (ascending/descending) and a sort key (atk or def).
//!
//! This library is organized into several modules:
//! - `utils`: Error handling shared across the crate
//! - `collection`: The index-addressable doubly-linked list backing the stock
//! - `sort`: Bubble, insertion, merge and quick sort over the list's
//!   positional interface, each returning its relocation count
//! - `shop`: The card record, the sort key enumeration, and the shop itself
//!   with its CSV decoder and display operations

// Re-export commonly used types at the crate root
pub use utils::error::{CardShopError, Result};

// Core modules
pub mod utils {
    pub mod error;
}

pub mod collection {
    pub mod linked_list;
}

pub mod sort;

pub mod shop {
    pub mod card;
    pub mod card_shop;

    pub use self::card::{SortKey, YGOCard};
    pub use self::card_shop::{CardShop, DecodeError};
}

// Public API exports
pub use collection::linked_list::{DoublyLinkedList, ListError, NodeId};
pub use shop::{CardShop, DecodeError, SortKey, YGOCard};
