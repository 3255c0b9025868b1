use crate::parsing::{
    readable::Readable,
    reader::{ReadError, Reader},
};

/// Where a link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// `[text](destination)`
    Inline(&'a str),
    /// `[text][name]`, or `[text][]` which uses the text as the name.
    Reference(&'a str),
}

/// An inline link production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link<'a> {
    pub text: &'a str,
    pub target: LinkTarget<'a>,
}

impl Link<'_> {
    pub const OPEN: char = '[';
    pub const CLOSE: char = ']';
    pub const DESTINATION_OPEN: char = '(';
    pub const DESTINATION_CLOSE: char = ')';
}

impl<'a> Readable<'a> for Link<'a> {
    fn read(reader: &mut Reader<'a>) -> Result<Self, ReadError> {
        reader.expect(Self::OPEN)?;
        let text = reader.read_until(Self::CLOSE)?;

        let target = if reader.peek() == Some(Self::DESTINATION_OPEN) {
            reader.expect(Self::DESTINATION_OPEN)?;
            LinkTarget::Inline(reader.read_until(Self::DESTINATION_CLOSE)?.trim())
        } else {
            reader.expect(Self::OPEN)?;
            let name = reader.read_until(Self::CLOSE)?;
            LinkTarget::Reference(if name.is_empty() { text } else { name })
        };

        Ok(Self { text, target })
    }
}
