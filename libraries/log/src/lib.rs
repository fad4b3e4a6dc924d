use std::{fmt, io};

use anyhow::{Context as _, Result};
use chrono::{SecondsFormat, Utc};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::{format, format::Writer, time::FormatTime};

use environment::ReadFromVar as _;

const DEBUG_LOGGING_VAR: &str = "DEBUG_LOGGING";

pub fn init() -> Result<()> {
    let max_level = max_level(
        bool::read_optional_from_var(DEBUG_LOGGING_VAR)
            .context("Failed to read debug logging flag!")?,
    );

    tracing_subscriber::fmt()
        .event_format(
            format()
                .with_ansi(true)
                .with_level(true)
                .with_target(false)
                .with_source_location(false)
                .with_file(false)
                .with_line_number(false)
                .with_timer(UtcTimestamp)
                .compact(),
        )
        .with_writer(io::stderr)
        .with_max_level(max_level)
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("Failed to install global logging subscriber!")
}

fn max_level(debug_logging: Option<bool>) -> LevelFilter {
    if debug_logging.unwrap_or(cfg!(debug_assertions)) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

struct UtcTimestamp;

impl FormatTime for UtcTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        w.write_str(&Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}
