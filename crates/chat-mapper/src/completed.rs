//! Result of a mapping call

use crate::error::{MappingError, MappingErrorKind};

/// Mapped instance plus every error recorded while building it
///
/// `result` is `None` only when the target itself could not be instantiated.
/// A `Some` result may still be partial; check `errors` when that matters.
#[derive(Debug)]
pub struct CompletedMapping<T> {
    pub result: Option<T>,
    pub errors: Vec<MappingError>,
}

impl<T> CompletedMapping<T> {
    #[must_use]
    pub fn new(result: Option<T>, errors: Vec<MappingError>) -> Self {
        Self { result, errors }
    }

    /// A fully successful mapping
    #[must_use]
    pub fn ok(result: T) -> Self {
        Self::new(Some(result), Vec::new())
    }

    /// A mapping that produced no instance
    #[must_use]
    pub fn failed(error: MappingError) -> Self {
        Self::new(None, vec![error])
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.result.is_some() && self.errors.is_empty()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors of one kind, in recording order
    pub fn errors_of(&self, kind: MappingErrorKind) -> impl Iterator<Item = &MappingError> {
        self.errors.iter().filter(move |error| error.kind() == kind)
    }

    /// Split into the result and the errors
    #[must_use]
    pub fn into_parts(self) -> (Option<T>, Vec<MappingError>) {
        (self.result, self.errors)
    }

    /// Turn into a plain `Result`, treating any recorded error as failure
    pub fn strict(self) -> Result<T, Vec<MappingError>> {
        match self.result {
            Some(result) if self.errors.is_empty() => Ok(result),
            _ => Err(self.errors),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CompletedMapping<U> {
        CompletedMapping {
            result: self.result.map(f),
            errors: self.errors,
        }
    }
}
