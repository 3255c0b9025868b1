/// Backslash escapes.
///
/// `\` followed by ASCII punctuation yields the punctuation character as
/// literal text. Anything else keeps the backslash.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: char = '\\';

    pub fn is_escapable(c: char) -> bool {
        c.is_ascii_punctuation()
    }
}
