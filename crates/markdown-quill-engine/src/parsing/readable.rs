use super::reader::{ReadError, Reader};

/// A fixed-shape grammar unit that can be read from a [`Reader`].
///
/// On success the reader is positioned exactly past the consumed text. On
/// failure the reader is left wherever the production gave up; callers that
/// want to continue from the original position use [`attempt`].
pub trait Readable<'a>: Sized {
    fn read(reader: &mut Reader<'a>) -> Result<Self, ReadError>;
}

/// Tries to read a `T`, restoring the reader's cursor if it does not apply.
pub fn attempt<'a, T: Readable<'a>>(reader: &mut Reader<'a>) -> Option<T> {
    let saved = reader.cursor();
    match T::read(reader) {
        Ok(value) => Some(value),
        Err(err) => {
            log::trace!("{} did not apply: {err}", std::any::type_name::<T>());
            reader.restore(saved);
            None
        }
    }
}
