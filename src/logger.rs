use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(PlainLogger))?;
    log::set_max_level(level);

    Ok(())
}

/// Simple logger that dumps everything to stderr.
///
/// Parser trace lines carry their own indentation and are written as-is.
struct PlainLogger;

impl Log for PlainLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.target() == "parser" {
            eprintln!("{}", record.args());
        } else {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}
