//! System-wide constants for the PharmaNet gateway.

/// Default per-call timeout for remote ledger calls (milliseconds).
///
/// Every simulate/submit/query carries this bound; a timed-out submit is
/// surfaced as an unknown-outcome submission failure, never silently dropped.
pub const DEFAULT_LEDGER_CALL_TIMEOUT_MS: u64 = 10_000;

/// Default number of attempts for side-effect-free ledger queries.
///
/// Submissions are never retried automatically (duplicate-write risk).
pub const DEFAULT_QUERY_ATTEMPTS: usize = 2;

/// Delay between query retry attempts (milliseconds).
pub const DEFAULT_QUERY_RETRY_DELAY_MS: u64 = 200;

/// Maximum accepted HTTP request body (1 MiB).
pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;

/// Rate limiter window length in seconds.
pub const RATE_LIMIT_WINDOW_SECS: u64 = 1;

/// Rate limiter bucket cleanup interval in seconds.
pub const RATE_LIMIT_CLEANUP_INTERVAL_SECS: u64 = 60;

/// Idle rate limiter buckets older than this are dropped (seconds).
pub const RATE_LIMIT_ENTRY_TTL_SECS: u64 = 300;

/// JSON-RPC protocol version sent to the ledger endpoint.
pub const JSON_RPC_VERSION: &str = "2.0";
