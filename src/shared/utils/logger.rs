use log::{debug, error, info};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("plate_search_lib", log::LevelFilter::Debug) // More verbose for our crate
            .filter_module("plate_search", log::LevelFilter::Debug)
            .filter_module("tokio", log::LevelFilter::Warn) // Reduce tokio noise
            .parse_default_env() // RUST_LOG still wins
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .target(env_logger::Target::Stderr)
            .init();

        info!("Logging system initialized");
    });
}

/// Macro for structured logging with context
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log repository operations
    pub fn repository_operation(operation: &str, source: &str, records: Option<usize>) {
        match records {
            Some(count) => debug!("Repository: {} on {} returned {} records", operation, source, count),
            None => debug!("Repository: Starting {} on {}", operation, source),
        }
    }

    /// Log search operations
    pub fn search_operation(query: &str, strategy: Option<&str>, results: Option<u64>) {
        match (strategy, results) {
            (Some(s), Some(r)) => info!("Search: '{}' via {} matched {} plates", query, s, r),
            (Some(s), None) => debug!("Search: Starting '{}' via {}", query, s),
            (None, Some(r)) => info!("Search: '{}' matched {} plates", query, r),
            (None, None) => debug!("Search: Starting '{}'", query),
        }
    }

    /// Log errors with context
    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }

    /// Log performance metrics
    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: Option<&str>) {
        match additional_info {
            Some(info) => info!(
                "Performance: {} took {}ms ({})",
                operation, duration_ms, info
            ),
            None => info!("Performance: {} took {}ms", operation, duration_ms),
        }
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        LogContext::performance_metric(&self.operation, duration, Some(info));
        duration
    }
}
