use std::io;

use thiserror::Error;

use crate::collection::linked_list::ListError;
use crate::shop::card_shop::DecodeError;

/// Main error type for the card shop library.
#[derive(Error, Debug)]
pub enum CardShopError {
    /// An I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A positional operation on the card list failed
    #[error(transparent)]
    List(#[from] ListError),
    /// The CSV stock list could not be decoded
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// A specialized `Result` type for card shop operations.
pub type Result<T> = std::result::Result<T, CardShopError>;
