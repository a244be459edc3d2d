//! Global logging module for the robots directive engine
//!
//! Provides thread-safe global logging with coded events and a clean macro interface.
//! Every entry point is a no-op until `init_global_logging` (or the `_with_service`
//! variant) has run, so library consumers that never initialize pay nothing.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
#[cfg(feature = "log")]
pub use service::LogFacadeLogger;
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging system from runtime preferences
pub fn init_global_logging() -> Result<(), String> {
    let logging_service = Arc::new(service::create_configured_service());

    if let Err(e) = config::validate_config() {
        let message = format!("Configuration validation failed: {}", e);
        logging_service.log_error(codes::system::INITIALIZATION_FAILURE, &message);
        return Err(message);
    }

    install_global_service(logging_service.clone())?;

    logging_service.log_success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    );

    Ok(())
}

/// Initialize with custom service (hosts bridging to their own logger, tests)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    if let Err(e) = config::validate_config() {
        let message = format!("Configuration validation failed: {}", e);
        service.log_error(codes::system::INITIALIZATION_FAILURE, &message);
        return Err(message);
    }

    install_global_service(service)
}

/// A second initialization is reported through the service already installed
fn install_global_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER.set(service).map_err(|_| {
        let message = "Global logger already initialized";
        if let Some(existing) = try_get_global_logger() {
            existing.log_error(codes::system::INITIALIZATION_FAILURE, message);
        }
        message.to_string()
    })
}

/// Check if global logging is initialized
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

// ============================================================================
// MACRO SUPPORT
// ============================================================================

/// Attach context pairs and dispatch (used by the log_* macros)
pub fn log_with_context(event: LogEvent, context: Vec<(&str, String)>) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    let event = context
        .into_iter()
        .fold(event, |event, (key, value)| event.with_context(key, &value));

    logger.log_event(event);
}

/// Get system diagnostics
pub fn get_system_diagnostics() -> String {
    let mut diagnostics = String::new();

    diagnostics.push_str("=== Logging System Diagnostics ===\n");
    diagnostics.push_str(&format!("Initialized: {}\n", is_initialized()));
    diagnostics.push('\n');
    diagnostics.push_str(&config::get_config_summary());

    diagnostics
}
