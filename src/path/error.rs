use thiserror::Error;

///
/// Errors that can occur while reading or changing a path
///
#[derive(Debug, Error)]
pub enum PathError {
    /// An element index was past the end of the path
    #[error("element index {index} is out of range for a path with {count} elements")]
    IndexOutOfRange { index: usize, count: usize },

    /// Tried to remove an element from a path that has none
    #[error("cannot remove an element from an empty path")]
    EmptyPath,

    /// The descriptor could not be parsed into a path
    #[error("could not parse path descriptor: {0}")]
    Descriptor(#[from] kurbo::SvgParseError),
}
