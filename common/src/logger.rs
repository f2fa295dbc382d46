use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    pub fn log(&self, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        if let Some(ref prefix) = self.prefix {
            println!("[{}][{}] {}", timestamp, prefix, message);
        } else {
            println!("[{}] {}", timestamp, message);
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// First call wins; later calls keep the already installed logger.
pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

pub fn log_debug(message: &str) {
    if let Some(logger) = LOGGER.get()
        && logger.is_verbose()
    {
        logger.log(message);
    }
}

pub fn debug_enabled() -> bool {
    LOGGER.get().is_some_and(Logger::is_verbose)
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

/// Per-tick detail. Skips formatting entirely unless the logger is verbose.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::debug_enabled() {
            $crate::logger::log_debug(&format!($($arg)*))
        }
    };
}
