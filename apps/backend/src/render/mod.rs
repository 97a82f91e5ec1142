//! Presentation of assembled views: HTML pages, the deck CSV export and
//! the timestamp format they share.

pub mod csv;
pub mod html;

use time::macros::format_description;
use time::OffsetDateTime;

pub use self::csv::deck_csv;
pub use html::HtmlView;

/// Formats epoch seconds as `Mon, 02 Jan 2006 15:04:05 UTC`.
///
/// Values outside the representable range fall back to the raw number.
pub fn format_timestamp(epoch_seconds: i64) -> String {
    let format = format_description!(
        "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] UTC"
    );

    OffsetDateTime::from_unix_timestamp(epoch_seconds)
        .ok()
        .and_then(|dt| dt.format(&format).ok())
        .unwrap_or_else(|| epoch_seconds.to_string())
}
