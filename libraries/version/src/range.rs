use std::iter::FusedIterator;

use tracing::debug;

use crate::{Component, EnumerationError, IntoVersion, ValidationError, Version};

/// Half-open interval of versions, `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub struct Range {
    start: Version,
    end: Version,
}

impl Range {
    pub fn new<S, E>(start: S, end: E) -> Result<Self, ValidationError>
    where
        S: IntoVersion,
        E: IntoVersion,
    {
        start.into_version().and_then(|start| {
            end.into_version().map(|end| Self { start, end })
        })
    }

    #[inline]
    pub const fn start(&self) -> &Version {
        &self.start
    }

    #[inline]
    pub const fn end(&self) -> &Version {
        &self.end
    }

    pub fn includes<V>(&self, version: V) -> Result<bool, ValidationError>
    where
        V: IntoVersion,
    {
        version
            .into_version()
            .map(|version| self.start <= version && version < self.end)
    }

    /// Steps through the range with a `major.minor.build` decimal counter,
    /// starting at `start` and stopping before `end`.
    ///
    /// Bounds with more than three significant components, or with a minor
    /// or build component above `9`, can't be represented by the counter and
    /// are rejected, as are ranges whose start is past their end. Plugging a
    /// wide component into `major * 100 + minor * 10 + build` would silently
    /// skip or reorder versions (`1.13` to `2` would come out empty), so such
    /// bounds are an error here rather than following that formula.
    pub fn versions(&self) -> Result<Versions, EnumerationError> {
        let next = Counter::new(&self.start)?;

        let end = Counter::new(&self.end)?;

        if self.start > self.end {
            return Err(EnumerationError::InvertedBounds {
                start: self.start.clone(),
                end: self.end.clone(),
            });
        }

        Ok(Versions { next, end })
    }

    pub fn to_vec(&self) -> Result<Vec<Version>, EnumerationError> {
        self.versions().map(|versions| {
            let versions: Vec<Version> = versions.collect();

            debug!(
                start = %self.start,
                end = %self.end,
                count = versions.len(),
                "Enumerated versions in range.",
            );

            versions
        })
    }
}

#[derive(Debug, Clone)]
#[must_use]
pub struct Versions {
    next: Counter,
    end: Counter,
}

impl Versions {
    #[must_use]
    pub fn remaining(&self) -> u128 {
        self.end.value() - self.next.value()
    }
}

impl Iterator for Versions {
    type Item = Version;

    fn next(&mut self) -> Option<Self::Item> {
        (self.next < self.end).then(|| {
            let version = self.next.version();

            self.next.increment();

            version
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        usize::try_from(self.remaining())
            .map_or((usize::MAX, None), |remaining| (remaining, Some(remaining)))
    }
}

impl FusedIterator for Versions {}

const SLOTS: usize = 3;

const SLOT_RADIX: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Counter {
    major: Component,
    minor: u8,
    build: u8,
}

impl Counter {
    fn new(version: &Version) -> Result<Self, EnumerationError> {
        if version.significant_components() > SLOTS {
            return Err(EnumerationError::TooManyComponents {
                version: version.clone(),
            });
        }

        let [major, minor, build] = version.leading::<SLOTS>();

        Self::slot(minor)
            .zip(Self::slot(build))
            .map(|(minor, build)| Self {
                major,
                minor,
                build,
            })
            .ok_or_else(|| EnumerationError::SlotOverflow {
                version: version.clone(),
            })
    }

    fn slot(component: Component) -> Option<u8> {
        u8::try_from(component)
            .ok()
            .filter(|&slot| slot < SLOT_RADIX)
    }

    fn value(self) -> u128 {
        let radix = u128::from(SLOT_RADIX);

        (u128::from(self.major) * radix + u128::from(self.minor)) * radix
            + u128::from(self.build)
    }

    fn increment(&mut self) {
        self.build += 1;

        if self.build == SLOT_RADIX {
            self.build = 0;

            self.minor += 1;

            if self.minor == SLOT_RADIX {
                self.minor = 0;

                self.major += 1;
            }
        }
    }

    fn version(self) -> Version {
        Version::from_groups(vec![
            self.major,
            self.minor.into(),
            self.build.into(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use crate::{EnumerationError, Range, ValidationError, Version};

    fn v(version: &str) -> Version {
        version.parse().unwrap()
    }

    fn to_strings(range: &Range) -> Vec<String> {
        range
            .to_vec()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn reports_the_first_invalid_bound() {
        for (start, end) in [
            ("1.0-SNAPSHOT", "1.0-BETA"),
            ("1.-1", "1.-2"),
            ("1.+1", "1.+2"),
            ("1.1_000", "1.2_000"),
            (".3", ".3.0"),
            ("0..3", "0..4"),
            ("3.2.15.", "3.2.16."),
        ] {
            assert_eq!(
                Range::new(start, end).unwrap_err().to_string(),
                format!("Invalid version string '{start}'"),
            );
        }

        assert_eq!(Range::new("1", "2.x").unwrap_err().input(), "2.x");
    }

    #[test]
    fn accepts_strings_and_versions() {
        _ = Range::new("", "").unwrap();
        _ = Range::new("0", "0").unwrap();
        _ = Range::new(Version::zero(), Version::zero()).unwrap();
        _ = Range::new(v("1"), v("1.0.1")).unwrap();
        _ = Range::new("1", "1.2.3").unwrap();

        let start = v("1");

        let borrowed = Range::new(&start, String::from("1.2.3")).unwrap();

        assert_eq!(borrowed.start(), &start);
        assert_eq!(borrowed.end().to_string(), "1.2.3");

        let range = Range::new("1.2.0", v("3")).unwrap();

        assert_eq!(range.start().to_string(), "1.2");
        assert_eq!(range.end(), &v("3.0.0"));
    }

    #[test]
    fn includes_is_half_open() {
        let range = Range::new("1", "2").unwrap();

        assert!(range.includes("1").unwrap());
        assert!(range.includes("1.0.0").unwrap());
        assert!(range.includes("1.13.9").unwrap());
        assert!(range.includes(v("1.99.99.99")).unwrap());
        assert!(!range.includes("0.209.9").unwrap());
        assert!(!range.includes("2").unwrap());
        assert!(!range.includes("2.0.0.1").unwrap());
    }

    #[test]
    fn includes_rejects_invalid_versions() {
        let range = Range::new("1", "2").unwrap();

        for invalid in [
            "1.0-SNAPSHOT",
            "1.-1",
            "1.+1",
            "1.1_000",
            ".3",
            "0..3",
            "3.2.15.",
        ] {
            assert_eq!(
                range.includes(invalid),
                Err(ValidationError::new(invalid)),
            );
        }
    }

    #[test]
    fn enumerates_from_zero_version() {
        let expected = ["", "0.0.1", "0.0.2", "0.0.3", "0.0.4"];

        assert_eq!(to_strings(&Range::new("", "0.0.5").unwrap()), expected);

        assert_eq!(
            Range::new(v("0"), v("0.0.5")).unwrap().to_vec().unwrap(),
            ["0", "0.0.1", "0.0.2", "0.0.3", "0.0.4"].map(v),
        );
    }

    #[test]
    fn equal_bounds_enumerate_nothing() {
        for (start, end) in [("2.1", "2.1"), ("2.1", "2.1.0"), ("", "0")] {
            assert!(Range::new(start, end).unwrap().to_vec().unwrap().is_empty());
        }
    }

    #[test]
    fn enumerates_to_build_version() {
        assert_eq!(
            to_strings(&Range::new("0.0.8", "0.1").unwrap()),
            ["0.0.8", "0.0.9"],
        );
    }

    #[test]
    fn enumerates_to_minor_version() {
        assert_eq!(
            to_strings(&Range::new("1", "1.1").unwrap()),
            [
                "1", "1.0.1", "1.0.2", "1.0.3", "1.0.4", "1.0.5", "1.0.6",
                "1.0.7", "1.0.8", "1.0.9",
            ],
        );
    }

    #[test]
    fn enumerates_to_major_version() {
        assert_eq!(
            Range::new(v("1.8.9"), v("2.1")).unwrap().to_vec().unwrap(),
            [
                "1.8.9", "1.9.0", "1.9.1", "1.9.2", "1.9.3", "1.9.4", "1.9.5",
                "1.9.6", "1.9.7", "1.9.8", "1.9.9", "2", "2.0.1", "2.0.2",
                "2.0.3", "2.0.4", "2.0.5", "2.0.6", "2.0.7", "2.0.8", "2.0.9",
            ]
            .map(v),
        );

        assert_eq!(
            to_strings(&Range::new("1.9.9", "2.0.1").unwrap()),
            ["1.9.9", "2"],
        );
    }

    #[test]
    fn enumeration_is_recomputed() {
        let range = Range::new("0.0.8", "0.1").unwrap();

        let mut versions = range.versions().unwrap();

        assert_eq!(versions.remaining(), 2);
        assert_eq!(versions.size_hint(), (2, Some(2)));
        assert_eq!(versions.next(), Some(v("0.0.8")));
        assert_eq!(versions.remaining(), 1);
        assert_eq!(versions.next(), Some(v("0.0.9")));
        assert_eq!(versions.next(), None);
        assert_eq!(versions.next(), None);
        assert_eq!(versions.remaining(), 0);

        assert_eq!(range.to_vec().unwrap().len(), 2);
        assert_eq!(range.to_vec().unwrap().len(), 2);
    }

    #[test]
    fn rejects_bounds_beyond_build() {
        assert_eq!(
            Range::new("1.2.3.4", "2").unwrap().versions().unwrap_err(),
            EnumerationError::TooManyComponents {
                version: v("1.2.3.4"),
            },
        );

        assert_eq!(
            Range::new("1", "1.0.0.1").unwrap().to_vec().unwrap_err(),
            EnumerationError::TooManyComponents {
                version: v("1.0.0.1"),
            },
        );

        assert_eq!(
            to_strings(&Range::new("1.2.3.0.0", "1.2.5.0").unwrap()),
            ["1.2.3", "1.2.4"],
        );
    }

    #[test]
    fn rejects_components_wider_than_a_slot() {
        assert_eq!(
            Range::new("1.13", "2").unwrap().to_vec().unwrap_err(),
            EnumerationError::SlotOverflow { version: v("1.13") },
        );

        assert_eq!(
            Range::new("1", "1.0.10").unwrap().to_vec().unwrap_err(),
            EnumerationError::SlotOverflow {
                version: v("1.0.10"),
            },
        );

        assert_eq!(
            to_strings(&Range::new("150.9.8", "151").unwrap()),
            ["150.9.8", "150.9.9"],
        );
    }

    #[test]
    fn rejects_inverted_bounds() {
        assert_eq!(
            Range::new("2", "1.9").unwrap().to_vec().unwrap_err(),
            EnumerationError::InvertedBounds {
                start: v("2"),
                end: v("1.9"),
            },
        );

        assert!(!Range::new("2", "1.9").unwrap().includes("1.9.5").unwrap());
    }

    #[test]
    fn enumeration_errors_name_the_version() {
        assert_eq!(
            EnumerationError::SlotOverflow { version: v("1.13") }.to_string(),
            "Version '1.13' has a minor or build component which doesn't fit \
            in a single decimal digit!",
        );

        assert_eq!(
            EnumerationError::InvertedBounds {
                start: v("2"),
                end: v("1"),
            }
            .to_string(),
            "Range start '2' is greater than its end '1'!",
        );
    }
}
