use ansi_term::Style;
use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: Logger = Logger;

/// Writes log records to stderr.
struct Logger;

pub fn init(level: LevelFilter) {
    log::set_logger(&LOGGER).expect("Error setting logger");
    log::set_max_level(level);
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let style = match record.level() {
            Level::Error | Level::Warn => Style::new().bold(),
            Level::Info => Style::new(),
            Level::Debug | Level::Trace => Style::new().dimmed(),
        };
        eprintln!("{}", style.paint(record.args().to_string()));
    }

    fn flush(&self) {}
}
