//! Month index helpers.

use chrono::Month;

/// Number of rows on the y axis.
pub const MONTHS_PER_YEAR: usize = 12;

/// Full English month name for a zero-based month index (0 = January).
///
/// Returns `None` for indices outside 0..12.
pub fn month_name(index: usize) -> Option<&'static str> {
    if index >= MONTHS_PER_YEAR {
        return None;
    }
    Month::try_from(index as u8 + 1).ok().map(|m| m.name())
}
