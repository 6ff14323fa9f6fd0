use std::str::Split;

use crate::Error;

/// Verses are separated by one blank line.
pub const SEPARATOR: &str = "\n\n";

/// Splits lyrics into verses, keeping empty fragments.
///
/// The returned iterator can be cloned to walk the verses again.
pub fn split_verses(text: &str) -> Split<'_, &'static str> {
    text.split(SEPARATOR)
}

/// Returns the verse at the 1-based `page` together with the number of verses.
pub fn select_verse<'a>(verses: &[&'a str], page: u32) -> Result<(&'a str, usize), Error> {
    let total = verses.len();
    usize::try_from(page)
        .ok()
        .and_then(|page| page.checked_sub(1))
        .and_then(|index| verses.get(index))
        .map(|verse| (*verse, total))
        .ok_or(Error::InvalidVersePage { page, total })
}
