use std::io::Write;

use anyhow::{anyhow, Result};
use env_logger::{Builder, Env, Target};
use log::{Level, LevelFilter};

pub fn init_logger(level: LevelFilter) -> Result<()> {
    Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(buf, "{} {}", level_tag(record.level()), record.args())
        })
        .try_init()
        .map_err(|e| anyhow!("logger init failed: {}", e))
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
