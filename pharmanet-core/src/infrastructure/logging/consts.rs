//! Gateway logging constants.

/// Log file name for the gateway service.
pub const LOG_FILE_NAME: &str = "pharmanet.log";

/// Console log pattern (colored).
///
/// Format: `timestamp [LEVEL] message [module] [thread-id]`
pub const LOG_LINE_PATTERN_COLORED: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} [{h({l:5})}] {m} [{M}] [{I}]{n}";

/// File log pattern (no colors).
pub const LOG_LINE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} [{l:5}] {m} [{M}] [{I}]{n}";

/// Our crates that should log at the requested app level by default.
/// Everything else is off unless explicitly opted in (whitelist approach).
pub const WHITELISTED_CRATES: &[&str] = &["pharmanet_core", "pharmanet_service"];
