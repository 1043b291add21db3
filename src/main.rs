use vecta_base::EnumFromNameT;
use vecta_common::prelude::*;
use vecta_logging::{log_info, log_warning, set_logger, LogCategory, LogLevel, Logger, LoggerSettings};

pub const LOG_CAT : LogCategory = LogCategory::new("Main");

/// Environment variable overriding the most verbose level that gets logged
const LOG_LEVEL_VAR : &str = "VECTA_LOG_LEVEL";

static LOGGER : Logger = Logger::new();

/// Build the logger settings, returns the raw value of [`LOG_LEVEL_VAR`] when it could not be parsed.
fn load_settings() -> (LoggerSettings, Option<String>) {
    let mut settings = LoggerSettings::default();
    let Ok(level) = std::env::var(LOG_LEVEL_VAR) else {
        return (settings, None);
    };

    match LogLevel::parse(&level) {
        Some(level) => {
            settings.max_level = level;
            (settings, None)
        },
        None => (settings, Some(level)),
    }
}

fn run_scenario() {
    let mut arr = DynArr::new();
    for val in 1..=3 {
        arr.push_back(val);
        log_info!(LOG_CAT, "push_back({}) -> {:?} (len {}, capacity {})", val, arr, arr.len(), arr.capacity());
    }

    let next = arr.erase(1);
    log_info!(LOG_CAT, "erase(1) -> {:?} (len {}, capacity {}), next element at {}", arr, arr.len(), arr.capacity(), next);

    let last = arr.len() - 1;
    match arr.at(last) {
        Ok(val) => log_info!(LOG_CAT, "at({}) -> {}", last, val),
        Err(err) => log_warning!(LOG_CAT, "at({}) -> {}", last, err),
    }
    match arr.at(arr.len()) {
        Ok(val) => log_warning!(LOG_CAT, "at({}) unexpectedly returned {}", arr.len(), val),
        Err(err) => log_info!(LOG_CAT, "at({}) -> {}", arr.len(), err),
    }

    let reserved: DynArr<u64> = reserve(16).into();
    log_info!(LOG_CAT, "reserve(16) -> len {}, capacity {}", reserved.len(), reserved.capacity());

    let filled = dynarr![String::from("vecta"); 2];
    log_info!(LOG_CAT, "dynarr![\"vecta\"; 2] -> {:?}", filled);
}

fn main() {
    let (settings, invalid_level) = load_settings();
    LOGGER.apply_settings(settings);
    set_logger(&LOGGER);

    if let Some(level) = invalid_level {
        log_warning!(LOG_CAT, "Unknown log level '{}' in {}, falling back to {:?}", level, LOG_LEVEL_VAR, settings.max_level);
    }

    run_scenario();
    LOGGER.flush();
}
