use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Forwards `log` records to the browser console
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    /// Install as the global logger. Fails if another logger was installed first.
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_max_level(level);
        log::set_boxed_logger(Box::new(ConsoleLogger { level }))
    }
}

pub fn format_record(record: &Record<'_>) -> String {
    format!("[{}] {}: {}", record.level(), record.target(), record.args())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_format_record_includes_target() {
        let line = format_record(
            &Record::builder()
                .args(format_args!("loaded 3 banners"))
                .level(Level::Info)
                .target("pages::banners")
                .build(),
        );
        assert_eq!(line, "[INFO] pages::banners: loaded 3 banners");
    }

    #[wasm_bindgen_test]
    fn test_level_filter() {
        let logger = ConsoleLogger {
            level: LevelFilter::Warn,
        };
        let info = Metadata::builder().level(Level::Info).build();
        let error = Metadata::builder().level(Level::Error).build();
        assert!(!logger.enabled(&info));
        assert!(logger.enabled(&error));
    }
}
