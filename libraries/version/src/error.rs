use thiserror::Error;

use crate::Version;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid version string '{input}'")]
pub struct ValidationError {
    input: Box<str>,
}

impl ValidationError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerationError {
    #[error(
        "Version '{version}' has significant components beyond major, minor \
        and build!"
    )]
    TooManyComponents { version: Version },
    #[error(
        "Version '{version}' has a minor or build component which doesn't \
        fit in a single decimal digit!"
    )]
    SlotOverflow { version: Version },
    #[error("Range start '{start}' is greater than its end '{end}'!")]
    InvertedBounds { start: Version, end: Version },
}
