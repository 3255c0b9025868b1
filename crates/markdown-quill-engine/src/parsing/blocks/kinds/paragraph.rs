/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// block opener matches. Contributing lines are joined with [`Self::JOINER`].
pub struct Paragraph;

impl Paragraph {
    /// Separator placed between the lines of a multi-line block.
    pub const JOINER: &'static str = " ";
}
