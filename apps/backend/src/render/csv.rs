use crate::domain::{Card, CardMeta, Deck};

/// Serializes a deck as CSV with a `color,text,draw,pick` header, black
/// cards first, each group in deck order. White cards leave draw and pick
/// empty.
pub fn deck_csv(deck: &Deck) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["color", "text", "draw", "pick"])?;

    for card in deck.black_cards.iter().chain(deck.white_cards.iter()) {
        write_card(&mut writer, card)?;
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

fn write_card(writer: &mut csv::Writer<Vec<u8>>, card: &Card) -> Result<(), csv::Error> {
    match card.meta {
        CardMeta::White => writer.write_record(["white", card.text.as_str(), "", ""]),
        CardMeta::Black { draw, pick } => {
            let draw = draw.to_string();
            let pick = pick.to_string();
            writer.write_record(["black", card.text.as_str(), draw.as_str(), pick.as_str()])
        }
    }
}
