//! Public deck code decoding.
//!
//! Cardcast deck codes are five base-36 characters. The store keys those
//! decks by the negated numeric value, keeping them apart from the positive
//! keys of built-in decks.

use crate::errors::domain::DomainError;

/// Required length of a public deck code.
pub const DECK_CODE_LEN: usize = 5;

/// Decode a public deck code into the store's internal (negative) deck key.
///
/// Base-36 parsing is case-insensitive, so `"ABCDE"` and `"abcde"` map to
/// the same key.
pub fn decode_deck_code(code: &str) -> Result<i64, DomainError> {
    if code.len() != DECK_CODE_LEN {
        return Err(DomainError::invalid_format(
            "cardcast deck IDs must be 5 characters long",
        ));
    }

    // from_str_radix would accept a leading '+', which is not a deck code.
    if !code.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(invalid_characters());
    }

    let value = i64::from_str_radix(code, 36).map_err(|_| invalid_characters())?;
    if value <= 0 {
        return Err(invalid_characters());
    }

    Ok(-value)
}

fn invalid_characters() -> DomainError {
    DomainError::invalid_format("cardcast deck IDs must only contain letters and numbers")
}
