use anyhow::{Context as _, Result};

use environment::ReadFromVar as _;

const ENUMERATION_LIMIT_VAR: &str = "VERSION_TOOL_ENUMERATION_LIMIT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub(crate) struct Configuration {
    pub enumeration_limit: u64,
}

impl Configuration {
    pub const DEFAULT_ENUMERATION_LIMIT: u64 = 10_000;

    pub fn read_from_env() -> Result<Self> {
        u64::read_optional_from_var(ENUMERATION_LIMIT_VAR)
            .context("Failed to read enumeration limit!")
            .map(|enumeration_limit| Self {
                enumeration_limit: enumeration_limit
                    .unwrap_or(Self::DEFAULT_ENUMERATION_LIMIT),
            })
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            enumeration_limit: Self::DEFAULT_ENUMERATION_LIMIT,
        }
    }
}
