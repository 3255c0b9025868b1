/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the quote marker (and one following space) from a line.
    ///
    /// Leading whitespace before the marker is allowed. Returns `None` if the
    /// first non-whitespace character is not [`Self::PREFIX`].
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = line.trim_start().strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
