use log::LevelFilter;
use simplelog::{ColorChoice, Config, SimpleLogger, TermLogger, TerminalMode};

use crate::errors::Result;

/// Installs a global logger for the skiplist's `log` output.
///
/// Prefers a terminal logger on stderr and falls back to a plain one when no
/// terminal is attached. Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<()> {
    let config = Config::default();
    if TermLogger::init(level, config.clone(), TerminalMode::Stderr, ColorChoice::Auto).is_ok() {
        return Ok(());
    }
    SimpleLogger::init(level, config)?;
    Ok(())
}
