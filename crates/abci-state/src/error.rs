/// Raised when reading a period-state field that hasn't been set.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StateError {
    #[error("field '{0}' is unset")]
    FieldUnset(&'static str),
}
