use std::io::Write;

use anyhow::{anyhow, Result};
use env_logger::{fmt::Formatter, Builder, Env, Target};
use log::{Level, LevelFilter};

/// Installs the process-wide logger. `RUST_LOG` takes precedence over `level`.
pub fn init_logger(level: LevelFilter) -> Result<()> {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .parse_env(Env::default())
        .write_style(env_logger::WriteStyle::Never)
        .format(|buf: &mut Formatter, record| {
            writeln!(
                buf,
                "{} {} {}",
                buf.timestamp_millis(),
                level_tag(record.level()),
                record.args()
            )
        })
        .target(Target::Stderr);

    builder
        .try_init()
        .map_err(|e| anyhow!("logger init failed: {}", e))
}

pub fn parse_level_filter(level: &str) -> Result<LevelFilter> {
    level
        .parse::<LevelFilter>()
        .map_err(|_| anyhow!("Invalid log level '{}'", level))
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
