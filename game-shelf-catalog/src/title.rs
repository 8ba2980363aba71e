//! Title normalization for matching games across collections.
//!
//! Hand-entered titles and provider titles disagree in small ways:
//! ```text
//! Prince of Persia: The Lost Crown
//! Prince of Persia - The Lost Crown
//! Mario Kart™ 8 Deluxe
//! ```
//!
//! [`normalize_title`] maps such variants onto one canonical token sequence.
//! Punctuation becomes a space (so adjacent words never fuse), trademark
//! glyphs are deleted outright, and whitespace is collapsed.

/// Trademark, registration and copyright glyphs. Deleted, not spaced.
const DELETED_GLYPHS: &[char] = &['™', '®', '©'];

/// Punctuation replaced with a single space before whitespace is collapsed.
const SPACED_PUNCTUATION: &[char] = &[
    ':', '-', '–', '—', '\'', '’', '`', '‘', '"', '“', '”', '.', '!', '?', '(', ')', '[', ']',
    '{', '}',
];

/// Normalize a game title into its comparison form.
///
/// Never fails. A title made only of punctuation or trademark glyphs
/// normalizes to the empty string.
///
/// # Examples
///
/// ```
/// use game_shelf_catalog::title::normalize_title;
///
/// assert_eq!(normalize_title("Super Mario Bros."), "super mario bros");
/// assert_eq!(normalize_title("Mario Kart™ 8 Deluxe"), "mario kart 8 deluxe");
/// assert_eq!(
///     normalize_title("Prince of Persia: The Lost Crown"),
///     normalize_title("Prince of Persia - The Lost Crown"),
/// );
/// ```
pub fn normalize_title(title: &str) -> String {
    let lowered = title.to_lowercase();

    let spaced: String = lowered
        .chars()
        .filter(|c| !DELETED_GLYPHS.contains(c))
        .map(|c| if SPACED_PUNCTUATION.contains(&c) { ' ' } else { c })
        .collect();

    collapse_whitespace(&spaced)
}

/// Join whitespace-separated words with single spaces, dropping the ends.
fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Whether a title normalizes to nothing (only punctuation or glyphs).
///
/// Such titles all collide with each other when compared by title.
pub fn is_blank_after_normalization(title: &str) -> bool {
    normalize_title(title).is_empty()
}
