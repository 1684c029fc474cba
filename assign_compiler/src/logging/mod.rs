//! Global logging module for the assignment compiler
//!
//! Events carry a [`Code`] and string context and are routed through a single
//! process-wide [`LoggingService`]. Until [`init_global_logging`] runs, events
//! are forwarded to the `log` crate facade so library users keep their own
//! logger setup.

pub mod codes;
pub mod events;
pub mod macros;
pub mod service;

use crate::config::LoggingPreferences;
use std::sync::{Arc, OnceLock};

// Re-export main types
pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{FacadeLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

/// Used until `init_global_logging` installs a service
static FALLBACK_LOGGER: OnceLock<LoggingService> = OnceLock::new();

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging system from user preferences
pub fn init_global_logging(preferences: &LoggingPreferences) -> Result<(), String> {
    let service = Arc::new(LoggingService::with_preferences(preferences));

    GLOBAL_LOGGER
        .set(service.clone())
        .map_err(|_| "Global logger already initialized")?;

    service.log_event(
        LogEvent::success(
            codes::success::SYSTEM_INITIALIZATION_COMPLETED,
            "Global logging system initialized",
        )
        .with_context("min_level", preferences.min_log_level.as_str())
        .with_context(
            "structured",
            &preferences.use_structured_logging.to_string(),
        ),
    );

    Ok(())
}

/// Check if global logging is initialized
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

// ============================================================================
// GLOBAL ACCESS
// ============================================================================

/// Global logger, or a facade-forwarding default when none was installed
///
/// The default is never stored in the global slot, so logging before
/// initialization does not block a later `init_global_logging`.
pub fn global_logger() -> &'static LoggingService {
    match GLOBAL_LOGGER.get() {
        Some(service) => service.as_ref(),
        None => FALLBACK_LOGGER
            .get_or_init(|| LoggingService::new(Arc::new(FacadeLogger), LogLevel::Debug)),
    }
}

/// Whether debug events would reach an output, so callers can skip building context
pub fn debug_enabled() -> bool {
    global_logger().is_enabled(LogLevel::Debug)
}

// ============================================================================
// LOGGING FUNCTIONS (used by macros)
// ============================================================================

/// Log error with context
pub fn log_error_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    log_event_with_context(LogEvent::error(code, message), context);
}

/// Log success with context
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    log_event_with_context(LogEvent::success(code, message), context);
}

/// Attach context pairs to an event and hand it to the global logger
pub fn log_event_with_context(event: LogEvent, context: Vec<(&str, &str)>) {
    let event = context
        .into_iter()
        .fold(event, |event, (key, value)| event.with_context(key, value));
    global_logger().log_event(event);
}
