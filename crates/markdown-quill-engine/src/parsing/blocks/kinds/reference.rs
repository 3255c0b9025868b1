use crate::parsing::{
    readable::Readable,
    reader::{ReadError, Reader},
};

/// A reference declaration line: `[name]: url`.
///
/// Declarations produce no output of their own; they feed the
/// [`ReferenceMap`](crate::parsing::blocks::ReferenceMap) that reference-style
/// links are resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceDeclaration<'a> {
    pub name: &'a str,
    /// Everything after the `:` and its following whitespace, verbatim.
    pub destination: &'a str,
}

impl ReferenceDeclaration<'_> {
    pub const OPEN: char = '[';
    pub const CLOSE: char = ']';
    pub const SEPARATOR: char = ':';
}

impl<'a> Readable<'a> for ReferenceDeclaration<'a> {
    fn read(reader: &mut Reader<'a>) -> Result<Self, ReadError> {
        reader.expect(Self::OPEN)?;
        let name = reader.read_until(Self::CLOSE)?;
        reader.expect(Self::SEPARATOR)?;
        reader.skip_whitespace();
        let destination = reader.read_to_line_end();

        Ok(Self { name, destination })
    }
}
