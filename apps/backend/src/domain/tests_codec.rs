use crate::domain::decode_deck_code;
use crate::errors::domain::DomainError;

fn assert_invalid(code: &str) {
    match decode_deck_code(code) {
        Err(DomainError::InvalidFormat(_)) => {}
        other => panic!("expected InvalidFormat for {code:?}, got {other:?}"),
    }
}

#[test]
fn decodes_to_negated_base36_value() {
    assert_eq!(decode_deck_code("00001").unwrap(), -1);
    assert_eq!(decode_deck_code("0000z").unwrap(), -35);
    assert_eq!(decode_deck_code("00010").unwrap(), -36);
}

#[test]
fn largest_code_decodes_without_error() {
    // 36^5 - 1
    assert_eq!(decode_deck_code("zzzzz").unwrap(), -60_466_175);
}

#[test]
fn decoding_is_case_insensitive() {
    assert_eq!(
        decode_deck_code("AbCdE").unwrap(),
        decode_deck_code("abcde").unwrap()
    );
    assert_eq!(
        decode_deck_code("ABCDE").unwrap(),
        decode_deck_code("abcde").unwrap()
    );
}

#[test]
fn wrong_length_is_invalid() {
    assert_invalid("");
    assert_invalid("1");
    assert_invalid("abcd");
    assert_invalid("abcdef");
}

#[test]
fn length_message_is_reported() {
    let err = decode_deck_code("1").unwrap_err();
    assert_eq!(err.to_string(), "cardcast deck IDs must be 5 characters long");
}

#[test]
fn zero_is_invalid() {
    assert_invalid("00000");
}

#[test]
fn non_alphanumeric_is_invalid() {
    assert_invalid("ab-de");
    assert_invalid("+abcd");
    assert_invalid("-abcd");
    assert_invalid("ab de");
    assert_invalid("abcd_");
}

#[test]
fn multibyte_input_is_invalid() {
    // Five characters but more than five bytes.
    assert_invalid("ábcde");
    // Five bytes but not ASCII alphanumerics.
    assert_invalid("é123");
}
