// src/shop/card_shop.rs

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::Split;

use log::{debug, warn};
use thiserror::Error;

use super::card::{SortKey, YGOCard};
use crate::collection::linked_list::DoublyLinkedList;
use crate::sort;
use crate::utils::error::Result;

/// Errors produced while decoding the CSV stock list.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: missing field `{field}`")]
    MissingField { line: usize, field: &'static str },
    #[error("line {line}: field `{field}` is not a number: `{value}`")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// The card shop: an ordered stock of [`YGOCard`]s that can be reordered in
/// place by any of the four sort algorithms in [`crate::sort`].
///
/// The shop owns every card outright; a card is dropped when it is removed or
/// when the shop is cleared or dropped.
#[derive(Debug, Default, PartialEq)]
pub struct CardShop {
    cards: DoublyLinkedList<YGOCard>,
}

impl CardShop {
    pub fn new() -> Self {
        Self {
            cards: DoublyLinkedList::new(),
        }
    }

    /// Opens a CSV stock list and decodes it with [`from_reader`](Self::from_reader).
    ///
    /// A file that cannot be opened is reported to the caller; whether that is
    /// fatal is the caller's decision.
    pub fn from_path(path: impl AsRef<Path>) -> std::result::Result<Self, DecodeError> {
        let file = File::open(path.as_ref())?;
        let shop = Self::from_reader(BufReader::new(file))?;
        debug!(
            "loaded {} cards from {}",
            shop.len(),
            path.as_ref().display()
        );
        Ok(shop)
    }

    /// Decodes a CSV stock list: a header line to discard, then one card per
    /// line as `name,type,level_rank,race,attribute,atk,def`. Cards load in
    /// file order. Malformed numeric fields fail the decode rather than
    /// defaulting.
    pub fn from_reader<R: BufRead>(reader: R) -> std::result::Result<Self, DecodeError> {
        let mut cards = DoublyLinkedList::new();
        let mut lines = reader.lines();
        // The header names the columns and carries no card.
        if let Some(header) = lines.next() {
            header?;
        }
        for (idx, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            // 1-based line numbers, counting the header.
            let card = parse_card(idx + 2, &line)?;
            cards.push_back(card);
        }
        Ok(Self { cards })
    }

    /// Returns the number of cards in stock.
    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Appends a card at the back of the stock.
    pub fn add(&mut self, card: YGOCard) {
        self.cards.push_back(card);
    }

    /// The card at `index`.
    pub fn card_at(&self, index: usize) -> Result<&YGOCard> {
        Ok(self.cards.get(index)?)
    }

    /// Iterates the cards front to back.
    pub fn cards(&self) -> impl Iterator<Item = &YGOCard> {
        self.cards.iter()
    }

    /// Removes every card from the shop.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Prints every card, one per line.
    pub fn display(&self) {
        for card in self.cards.iter() {
            println!("{card}");
        }
    }

    /// Prints the names of the cards in the inclusive range `[start, end]`,
    /// comma-separated.
    pub fn display_names(&self, start: usize, end: usize) -> Result<()> {
        println!("{}", self.names_in_range(start, end)?.join(", "));
        Ok(())
    }

    /// Name-only view of the inclusive index range, in position order.
    pub fn names_in_range(&self, start: usize, end: usize) -> Result<Vec<&str>> {
        (start..=end)
            .map(|i| Ok(self.cards.get(i)?.name()))
            .collect()
    }

    /// Bubble sort by `key`; returns the number of swaps.
    pub fn bubble_sort(&mut self, comp: impl Fn(i32, i32) -> bool, key: SortKey) -> Result<usize> {
        let swaps = sort::bubble_sort(&mut self.cards, comp, |card| key.value_of(card))?;
        debug!("bubble sort by {key:?}: {swaps} swaps");
        Ok(swaps)
    }

    /// Insertion sort by `key`; returns the number of swaps.
    pub fn insertion_sort(
        &mut self,
        comp: impl Fn(i32, i32) -> bool,
        key: SortKey,
    ) -> Result<usize> {
        let swaps = sort::insertion_sort(&mut self.cards, comp, |card| key.value_of(card))?;
        debug!("insertion sort by {key:?}: {swaps} swaps");
        Ok(swaps)
    }

    /// Merge sort by `key`; returns the number of head-to-head merge writes.
    pub fn merge_sort(&mut self, comp: impl Fn(i32, i32) -> bool, key: SortKey) -> Result<usize> {
        let written = sort::merge_sort(&mut self.cards, comp, |card| key.value_of(card))?;
        debug!("merge sort by {key:?}: {written} merge writes");
        Ok(written)
    }

    /// Quick sort by `key`; returns the number of swaps, pivot placements
    /// included.
    pub fn quick_sort(&mut self, comp: impl Fn(i32, i32) -> bool, key: SortKey) -> Result<usize> {
        let swaps = sort::quick_sort(&mut self.cards, comp, |card| key.value_of(card))?;
        debug!("quick sort by {key:?}: {swaps} swaps");
        Ok(swaps)
    }
}

fn next_field<'a>(
    fields: &mut Split<'a, char>,
    line: usize,
    field: &'static str,
) -> std::result::Result<&'a str, DecodeError> {
    fields
        .next()
        .map(str::trim)
        .ok_or(DecodeError::MissingField { line, field })
}

fn parse_number(
    line: usize,
    field: &'static str,
    value: &str,
) -> std::result::Result<i32, DecodeError> {
    value.parse().map_err(|source| DecodeError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
        source,
    })
}

fn parse_card(line_no: usize, line: &str) -> std::result::Result<YGOCard, DecodeError> {
    let mut fields = line.split(',');
    let name = next_field(&mut fields, line_no, "name")?;
    let card_type = next_field(&mut fields, line_no, "type")?;
    let level_rank = next_field(&mut fields, line_no, "level_rank")?;
    let race = next_field(&mut fields, line_no, "race")?;
    let attribute = next_field(&mut fields, line_no, "attribute")?;
    let atk = next_field(&mut fields, line_no, "atk")?;
    let def = next_field(&mut fields, line_no, "def")?;
    if fields.next().is_some() {
        warn!("line {line_no}: extra fields ignored");
    }
    Ok(YGOCard::new(
        name,
        card_type,
        parse_number(line_no, "level_rank", level_rank)?,
        race,
        attribute,
        parse_number(line_no, "atk", atk)?,
        parse_number(line_no, "def", def)?,
    ))
}
