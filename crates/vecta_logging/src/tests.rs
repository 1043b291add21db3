use std::sync::Arc;

use super::*;

const CAT: LogCategory = LogCategory::new_with_sub("Tests", "Logger");

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn quiet_logger() -> (Logger, SharedBuffer) {
    let logger = Logger::new();
    logger.set_log_to_console(false);
    let buffer = SharedBuffer::default();
    assert!(logger.add_writer(Box::new(buffer.clone())).is_ok());
    (logger, buffer)
}

#[test]
fn log_category_display() {
    assert_eq!(LogCategory::new("Main").to_string(), "Main");
    assert_eq!(CAT.to_string(), "Tests(Logger)");
}

#[test]
fn log_level_parse() {
    assert_eq!(LogLevel::parse("verbose"), Some(LogLevel::Verbose));
    assert_eq!(LogLevel::parse(" Error "), Some(LogLevel::Error));
    assert_eq!(LogLevel::parse("loud"), None);
}

#[test]
fn logger_writes_on_flush() {
    let (logger, buffer) = quiet_logger();

    logger.log(CAT, LogLevel::Info, log_location!(), "hello");
    assert!(buffer.contents().is_empty());

    logger.flush();
    let contents = buffer.contents();
    assert!(contents.contains("[Tests(Logger)]"));
    assert!(contents.ends_with("hello\n"));
}

#[test]
fn logger_always_flush() {
    let (logger, buffer) = quiet_logger();
    logger.set_always_flush(true);

    logger.log_fmt(CAT, LogLevel::Warning, log_location!(), format_args!("{} slots", 4));
    assert!(buffer.contents().ends_with("4 slots\n"));
}

#[test]
fn logger_filters_by_level() {
    let (logger, buffer) = quiet_logger();
    logger.apply_settings(LoggerSettings {
        max_level: LogLevel::Warning,
        always_flush: true,
        log_to_console: false,
    });

    assert!(logger.is_enabled(LogLevel::Error));
    assert!(!logger.is_enabled(LogLevel::Verbose));

    logger.log(CAT, LogLevel::Verbose, log_location!(), "dropped");
    logger.log(CAT, LogLevel::Error, log_location!(), "kept");

    let contents = buffer.contents();
    assert!(!contents.contains("dropped"));
    assert!(contents.contains("kept"));
}

#[test]
fn logger_writer_slots() {
    let logger = Logger::new();
    logger.set_log_to_console(false);

    for expected in 0..8 {
        assert_eq!(logger.add_writer(Box::new(io::sink())).ok(), Some(expected));
    }
    assert!(logger.add_writer(Box::new(io::sink())).is_err());

    assert!(logger.remove_writer(3).is_some());
    assert!(logger.remove_writer(3).is_none());
    assert!(logger.remove_writer(42).is_none());
    assert_eq!(logger.add_writer(Box::new(io::sink())).ok(), Some(3));
}

#[test]
fn location_captures_function() {
    let loc = log_location!();
    assert!(loc.function().ends_with("location_captures_function"));
    assert!(loc.file().ends_with("tests.rs"));

    let loc = log_location!(location_captures_function);
    assert!(loc.function().ends_with("location_captures_function"));
}

struct Nested<'a>(&'a Logger);

impl fmt::Display for Nested<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.log(CAT, LogLevel::Info, log_location!(), "inner");
        f.write_str("outer")
    }
}

#[test]
fn logger_allows_nested_logging() {
    let (logger, buffer) = quiet_logger();
    logger.set_always_flush(true);

    logger.log_fmt(CAT, LogLevel::Info, log_location!(), format_args!("{}", Nested(&logger)));

    let contents = buffer.contents();
    let inner = contents.find("inner\n");
    let outer = contents.find("outer\n");
    assert!(inner.is_some() && outer.is_some());
    assert!(inner < outer);
}

#[test]
fn timestamp_increases() {
    let first = TimeStamp::now();
    let second = TimeStamp::now();
    assert!(second.duration() >= first.duration());
    assert!(second >= first);
}

#[test]
fn global_logger_macros() {
    let logger: &'static Logger = Box::leak(Box::new(Logger::new()));
    logger.set_log_to_console(false);
    logger.set_always_flush(true);
    let buffer = SharedBuffer::default();
    assert!(logger.add_writer(Box::new(buffer.clone())).is_ok());

    set_logger(logger);
    assert!(core::ptr::eq(get_logger(), logger));
    assert!(try_get_logger().is_some_and(|registered| core::ptr::eq(registered, logger)));

    log!(CAT, LogLevel::Info, global_logger_macros, "plain");
    log!(CAT, LogLevel::Info, global_logger_macros, "formatted {}", 1);
    log_severe!(CAT, global_logger_macros, "severe {}", 2);
    log_error!(CAT, global_logger_macros, "error {}", 3);
    log_warning!(CAT, "warning {}", 4);
    log_info!(CAT, "info {}", 5);
    log_verbose!(CAT, "verbose {}", 6);
    log_debug!(CAT, global_logger_macros, "debug {}", 7);

    let contents = buffer.contents();
    for expected in ["plain", "formatted 1", "severe 2", "error 3", "warning 4", "info 5", "verbose 6", "debug 7"] {
        assert!(contents.contains(&format!(": {expected}\n")), "missing '{expected}' in {contents}");
    }

    // Severe, error and debug messages carry their location
    assert!(contents.contains("global_logger_macros): error 3"));
    assert!(!contents.contains("global_logger_macros): info 5"));
}
