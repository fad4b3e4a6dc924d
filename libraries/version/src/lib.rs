use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
    iter,
    str::FromStr,
};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

pub use self::{
    error::{EnumerationError, ValidationError},
    range::{Range, Versions},
};

mod error;
mod parse;
mod range;

pub type Component = u64;

/// Dotted-numeric version, e.g. `1.4.9.16`.
///
/// Trailing zero components carry no meaning, so `1.4`, `1.4.0` and
/// `1.4.0.0` are the same version and all render as `1.4`. The empty string
/// and any all-zero string produce the zero version, which renders as the
/// empty string.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct Version {
    components: Box<[Component]>,
}

impl Version {
    pub fn zero() -> Self {
        Self::default()
    }

    pub(crate) fn from_groups(mut groups: Vec<Component>) -> Self {
        while groups.last() == Some(&0) {
            _ = groups.pop();
        }

        Self {
            components: groups.into_boxed_slice(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.components.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn components(&self) -> Vec<Component> {
        self.components.to_vec()
    }

    /// Returns exactly `length` components, truncating the canonical
    /// components or padding them with zeros.
    #[must_use]
    pub fn components_of_length(&self, length: usize) -> Vec<Component> {
        self.padded(length).collect()
    }

    fn padded(&self, length: usize) -> impl Iterator<Item = Component> + '_ {
        self.components
            .iter()
            .copied()
            .chain(iter::repeat(0))
            .take(length)
    }

    #[inline]
    pub(crate) fn significant_components(&self) -> usize {
        self.components.len()
    }

    pub(crate) fn leading<const N: usize>(&self) -> [Component; N] {
        let mut leading = [0; N];

        leading
            .iter_mut()
            .zip(&self.components)
            .for_each(|(slot, &component)| *slot = component);

        leading
    }

    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        let length = self.components.len().max(other.components.len());

        self.padded(length).cmp(other.padded(length))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other).is_eq()
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for Version {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.components.hash(state);
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut components = self.components.iter();

        if let Some(first) = components.next() {
            write!(f, "{first}")?;

            components.try_for_each(|component| write!(f, ".{component}"))?;
        }

        Ok(())
    }
}

impl FromStr for Version {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::groups(s)
            .map(Self::from_groups)
            .ok_or_else(|| ValidationError::new(s))
    }
}

impl TryFrom<&str> for Version {
    type Error = ValidationError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Version {
    type Error = ValidationError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)
            .and_then(|version| version.parse().map_err(de::Error::custom))
    }
}

/// Conversion of the accepted version inputs into a [`Version`].
pub trait IntoVersion {
    fn into_version(self) -> Result<Version, ValidationError>;
}

impl IntoVersion for Version {
    #[inline]
    fn into_version(self) -> Result<Version, ValidationError> {
        Ok(self)
    }
}

impl IntoVersion for &Version {
    #[inline]
    fn into_version(self) -> Result<Version, ValidationError> {
        Ok(self.clone())
    }
}

impl IntoVersion for &str {
    #[inline]
    fn into_version(self) -> Result<Version, ValidationError> {
        self.parse()
    }
}

impl IntoVersion for String {
    #[inline]
    fn into_version(self) -> Result<Version, ValidationError> {
        self.parse()
    }
}

impl IntoVersion for &String {
    #[inline]
    fn into_version(self) -> Result<Version, ValidationError> {
        self.parse()
    }
}
