/// A structurally distinct unit of document content.
///
/// The text of a block is the concatenation of its contributing lines (with
/// container prefixes stripped) joined by a single space. Line breaks are not
/// preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A paragraph block (default when no other block opener matches).
    Paragraph(String),
    /// Consecutive `>` lines.
    Blockquote(String),
}

impl Block {
    /// The inline source text of this block.
    pub fn text(&self) -> &str {
        match self {
            Block::Paragraph(text) | Block::Blockquote(text) => text,
        }
    }
}
