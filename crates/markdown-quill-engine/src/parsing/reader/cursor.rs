/// A saved position in the text a [`Reader`](super::Reader) walks over.
///
/// Cursors are plain values: copy one before a speculative read and hand it
/// back to [`Reader::restore`](super::Reader::restore) if the read fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor {
    offset: usize,
}

impl Cursor {
    pub(super) fn at(offset: usize) -> Self {
        Self { offset }
    }

    /// Byte offset into the text.
    pub fn offset(self) -> usize {
        self.offset
    }
}
