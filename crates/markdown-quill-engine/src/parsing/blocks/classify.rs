use crate::parsing::{readable::attempt, reader::Reader};

use super::kinds::{BlockQuote, ReferenceDeclaration};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty once whitespace is trimmed.
    Blank,
    /// A `>` line; holds the remainder after the marker, trimmed.
    Quote(&'a str),
    /// A `[name]: url` line.
    Reference(ReferenceDeclaration<'a>),
    /// Any other line, trimmed.
    Text(&'a str),
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line (without its terminator) into a [`LineClass`].
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineClass::Blank;
        }

        if let Some(remainder) = BlockQuote::strip_prefix(line) {
            return LineClass::Quote(remainder.trim());
        }

        let mut reader = Reader::new(line.trim_start());
        if let Some(decl) = attempt::<ReferenceDeclaration>(&mut reader) {
            return LineClass::Reference(decl);
        }

        LineClass::Text(trimmed)
    }
}
