use std::sync::OnceLock;

use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: OnceLock<CliLogger> = OnceLock::new();

/// Plain stderr logger; stdout stays reserved for the board and timings.
pub struct CliLogger {
    min_level: Level,
}

pub fn init(verbosity: u8) {
    let min_level = match verbosity {
        0 => Level::Warn,
        1 => Level::Info,
        _ => Level::Debug,
    };

    let logger = LOGGER.get_or_init(|| CliLogger { min_level });
    log::set_logger(logger).unwrap();
    log::set_max_level(LevelFilter::Trace);
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{}] {} -> {}",
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}
