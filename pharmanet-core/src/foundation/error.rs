use std::io;
use thiserror::Error;

/// Failure taxonomy exposed at the gateway boundary.
///
/// Every error that crosses the HTTP surface is classified into exactly one
/// of these kinds so callers can branch on `kind` instead of parsing
/// free-text messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Estimation,
    Submission,
    Readback,
    Decode,
    Unknown,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "ValidationError",
            ErrorKind::Estimation => "EstimationError",
            ErrorKind::Submission => "SubmissionError",
            ErrorKind::Readback => "ReadbackError",
            ErrorKind::Decode => "DecodeError",
            ErrorKind::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request field {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("estimation rejected for {op}: {details}")]
    Estimation { op: String, details: String },

    #[error("submission failed for {op}: {details}")]
    Submission { op: String, details: String, outcome_unknown: bool },

    #[error("read-back failed for {op}: {details}")]
    Readback { op: String, details: String },

    #[error("cannot decode {field}: {details}")]
    Decode { field: String, details: String },

    // === Raw remote-call failures (classified per phase before they escape) ===
    #[error("ledger call {op} failed: {details}")]
    Rpc { op: String, details: String },

    #[error("ledger call {op} timed out after {timeout_ms}ms")]
    RpcTimeout { op: String, timeout_ms: u64 },

    #[error("ledger rejected {op}: code={code} message={message}")]
    Rejected { op: String, code: i64, message: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{format} serialization error: {details}")]
    Serialization { format: String, details: String },

    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, GatewayError>;

impl GatewayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::Validation { .. } => ErrorKind::Validation,
            GatewayError::Estimation { .. } => ErrorKind::Estimation,
            GatewayError::Submission { .. } => ErrorKind::Submission,
            GatewayError::Readback { .. } => ErrorKind::Readback,
            GatewayError::Decode { .. } => ErrorKind::Decode,
            GatewayError::Rpc { .. }
            | GatewayError::RpcTimeout { .. }
            | GatewayError::Rejected { .. }
            | GatewayError::Config(_)
            | GatewayError::Serialization { .. }
            | GatewayError::Message(_) => ErrorKind::Unknown,
        }
    }

    /// True for a submission whose inclusion status could not be determined.
    pub fn outcome_unknown(&self) -> bool {
        matches!(self, GatewayError::Submission { outcome_unknown: true, .. })
    }

    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        GatewayError::Validation { field: field.into(), reason: reason.into() }
    }

    pub fn decode(field: impl Into<String>, details: impl Into<String>) -> Self {
        GatewayError::Decode { field: field.into(), details: details.into() }
    }

    /// Classify a failure raised while simulating a write. No submission was
    /// attempted, so the failure is always a definite rejection.
    pub fn estimation(op: &str, cause: GatewayError) -> Self {
        GatewayError::Estimation { op: op.to_string(), details: cause.to_string() }
    }

    /// Classify a failure raised while submitting a write. A timeout is
    /// ambiguous (the write may still have been included) and is flagged so
    /// callers know reconciliation may be required.
    pub fn submission(op: &str, cause: GatewayError) -> Self {
        let outcome_unknown = matches!(cause, GatewayError::RpcTimeout { .. });
        let details = if outcome_unknown {
            format!("{cause}; outcome unknown, reconciliation may be required")
        } else {
            cause.to_string()
        };
        GatewayError::Submission { op: op.to_string(), details, outcome_unknown }
    }

    /// Classify a failure raised while reading canonical state back.
    pub fn readback(op: &str, cause: GatewayError) -> Self {
        GatewayError::Readback { op: op.to_string(), details: cause.to_string() }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Serialization { format: "json".to_string(), details: err.to_string() }
    }
}

impl From<toml::de::Error> for GatewayError {
    fn from(err: toml::de::Error) -> Self {
        GatewayError::Config(format!("TOML parsing error: {}", err))
    }
}

impl From<io::Error> for GatewayError {
    fn from(err: io::Error) -> Self {
        GatewayError::Message(err.to_string())
    }
}

// NOTE: Avoid adding generic "stringly" error conversions here.
// Classify at the call site so the phase that failed stays visible.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_wire_labels() {
        assert_eq!(GatewayError::validation("role", "missing").kind().as_str(), "ValidationError");
        assert_eq!(GatewayError::decode("role", "ordinal 9").kind().as_str(), "DecodeError");
        let err = GatewayError::Rpc { op: "ledger_query".to_string(), details: "boom".to_string() };
        assert_eq!(err.kind(), ErrorKind::Unknown);
    }

    #[test]
    fn submit_timeout_is_flagged_unknown_outcome() {
        let cause = GatewayError::RpcTimeout { op: "ledger_submit".to_string(), timeout_ms: 10_000 };
        let err = GatewayError::submission("addDrug", cause);
        assert!(err.outcome_unknown());
        assert!(err.to_string().contains("reconciliation"));
    }

    #[test]
    fn submit_rejection_is_definite() {
        let cause = GatewayError::Rejected { op: "ledger_submit".to_string(), code: -32000, message: "reverted".to_string() };
        let err = GatewayError::submission("addDrug", cause);
        assert!(!err.outcome_unknown());
        assert_eq!(err.kind(), ErrorKind::Submission);
    }
}
