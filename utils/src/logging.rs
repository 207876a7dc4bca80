// Category-based logging infrastructure
//
// This will be used from multiple threads, so it needs
// to be stateless. The only shared piece is the maximum
// level, which is read from the environment once.
//
// Austin Shafer - 2020
use lazy_static::lazy_static;

#[allow(dead_code, non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LogLevel {
    // in order of highest priority
    critical, // Urgent and must always be displayed
    error,
    debug,     // debugging related, not verbose
    info,      // more verbose
    verbose,   // per-frame spam
    profiling, // profiling related timing
}

impl LogLevel {
    pub fn get_name(&self) -> &'static str {
        match self {
            LogLevel::critical => "critical",
            LogLevel::error => "error",
            LogLevel::debug => "debug",
            LogLevel::info => "info",
            LogLevel::verbose => "verbose",
            LogLevel::profiling => "profiling",
        }
    }

    pub fn get_level(&self) -> u32 {
        match self {
            LogLevel::critical => 0,
            LogLevel::error => 1,
            LogLevel::debug => 2,
            LogLevel::info => 3,
            LogLevel::verbose => 4,
            LogLevel::profiling => 5,
        }
    }

    /// Parse a level from either its name or its number
    pub fn from_name(val: &str) -> Option<LogLevel> {
        let level = match val.trim() {
            "critical" | "0" => LogLevel::critical,
            "error" | "1" => LogLevel::error,
            "debug" | "2" => LogLevel::debug,
            "info" | "3" => LogLevel::info,
            "verbose" | "4" => LogLevel::verbose,
            "profiling" | "5" => LogLevel::profiling,
            _ => return None,
        };
        Some(level)
    }
}

lazy_static! {
    // !! NOTE: default log level set here !!
    //
    // Defaults to the debug level (2), SCROLLER_LOG_LEVEL overrides it
    static ref MAX_LEVEL: u32 = std::env::var("SCROLLER_LOG_LEVEL")
        .ok()
        .and_then(|val| LogLevel::from_name(&val))
        .unwrap_or(LogLevel::debug)
        .get_level();
}

/// The most verbose level that will be printed
pub fn max_level() -> u32 {
    *MAX_LEVEL
}

#[macro_export]
macro_rules! log_internal {
    ($loglevel:expr, $($format_args:tt)+) => ({
        let level = $loglevel;
        if level.get_level() <= $crate::logging::max_level() {
            println!("[{:?}]<{}> {}:{} - {}",
                     $crate::timing::get_current_millis(),
                     level.get_name(),
                     file!(),
                     line!(),
                     format!($($format_args)+)
            );
        }
    })
}

#[macro_export]
macro_rules! critical {
    ($($format_args:tt)+) => ({
        $crate::log_internal!($crate::logging::LogLevel::critical, $($format_args)+)
    })
}

#[macro_export]
macro_rules! error {
    ($($format_args:tt)+) => ({
        $crate::log_internal!($crate::logging::LogLevel::error, $($format_args)+)
    })
}

#[macro_export]
macro_rules! debug {
    ($($format_args:tt)+) => ({
        $crate::log_internal!($crate::logging::LogLevel::debug, $($format_args)+)
    })
}

#[macro_export]
macro_rules! info {
    ($($format_args:tt)+) => ({
        $crate::log_internal!($crate::logging::LogLevel::info, $($format_args)+)
    })
}

#[macro_export]
macro_rules! verbose {
    ($($format_args:tt)+) => ({
        $crate::log_internal!($crate::logging::LogLevel::verbose, $($format_args)+)
    })
}

#[macro_export]
macro_rules! profiling {
    ($($format_args:tt)+) => ({
        $crate::log_internal!($crate::logging::LogLevel::profiling, $($format_args)+)
    })
}
