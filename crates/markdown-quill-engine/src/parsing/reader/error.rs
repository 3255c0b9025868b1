/// Why a [`Readable`](crate::parsing::readable::Readable) production did not
/// apply at the current position.
///
/// These never escape the engine: a failed production only means the caller
/// should try the next candidate or treat the text as plain content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    #[error("expected {expected:?} at offset {offset}, found {found:?}")]
    UnexpectedCharacter {
        expected: char,
        found: Option<char>,
        offset: usize,
    },
    #[error("reached end of input at offset {offset} while looking for {delimiter:?}")]
    EndOfInput { delimiter: char, offset: usize },
}
