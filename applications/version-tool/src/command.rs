use std::cmp::Ordering;

use anyhow::{bail, Context as _, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use version::{Range, Version};

use crate::configuration::Configuration;

/// Inspects dotted-numeric versions and half-open version ranges.
#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct Arguments {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub(crate) enum Command {
    /// Prints the canonical form of a version.
    Canonical { version: String },
    /// Prints the components of a version, separated by spaces.
    Components {
        version: String,
        /// Truncates or zero-pads the components to exactly this many.
        #[arg(short, long)]
        length: Option<usize>,
    },
    /// Prints whether the left version is less than, equal to or greater
    /// than the right one.
    Compare { left: String, right: String },
    /// Prints whether a version lies within `[START, END)`.
    Includes {
        start: String,
        end: String,
        version: String,
    },
    /// Prints every version within `[START, END)`, one per line.
    Enumerate { start: String, end: String },
}

impl Command {
    pub fn execute(self, configuration: Configuration) -> Result<Vec<String>> {
        debug!(command = ?self, "Executing command.");

        match self {
            Self::Canonical { version } => {
                parse(&version).map(|version| vec![version.to_string()])
            },
            Self::Components { version, length } => {
                parse(&version).map(|version| {
                    let components = length.map_or_else(
                        || version.components(),
                        |length| version.components_of_length(length),
                    );

                    vec![components
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(" ")]
                })
            },
            Self::Compare { left, right } => {
                let ordering = parse(&left)?.compare(&parse(&right)?);

                Ok(vec![match ordering {
                    Ordering::Less => "less",
                    Ordering::Equal => "equal",
                    Ordering::Greater => "greater",
                }
                .into()])
            },
            Self::Includes {
                start,
                end,
                version,
            } => range(&start, &end)?
                .includes(version.as_str())
                .with_context(|| format!("Failed to parse version {version:?}!"))
                .map(|included| vec![included.to_string()]),
            Self::Enumerate { start, end } => {
                enumerate(&range(&start, &end)?, configuration.enumeration_limit)
            },
        }
    }
}

fn parse(version: &str) -> Result<Version> {
    version
        .parse()
        .with_context(|| format!("Failed to parse version {version:?}!"))
}

fn range(start: &str, end: &str) -> Result<Range> {
    Range::new(start, end).with_context(|| {
        format!("Failed to construct range from {start:?} to {end:?}!")
    })
}

fn enumerate(range: &Range, limit: u64) -> Result<Vec<String>> {
    let versions = range.versions().context("Failed to enumerate range!")?;

    let count = versions.remaining();

    if count > u128::from(limit) {
        bail!(
            "Range from \"{start}\" to \"{end}\" holds {count} versions, which \
            exceeds the enumeration limit of {limit}!",
            start = range.start(),
            end = range.end(),
        );
    }

    info!(%count, "Enumerating versions.");

    Ok(versions.map(|version| version.to_string()).collect())
}
