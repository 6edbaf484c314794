use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// A ledger record in the fixed positional order the remote interface
/// returns. The mapper in `domain` turns these into named entities.
pub type PositionalRecord = Vec<serde_json::Value>;

/// Identity of an account capable of authorizing mutating ledger operations.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SignerId(String);

impl SignerId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SignerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Deref for SignerId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl From<String> for SignerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SignerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
