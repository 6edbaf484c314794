//! Remote-call seam to the external ledger.
//!
//! The ledger's state machine, access control, and consensus live behind this
//! trait; nothing in the gateway reimplements them.

mod client;
pub mod retry;

pub use client::JsonRpcLedgerClient;

use crate::foundation::{GatewayError, PositionalRecord, Result, SignerId};
use async_trait::async_trait;
use serde_json::Value;

/// Submission confirmation. Proves inclusion only; business fields always
/// come from the canonical read-back, never from this receipt.
#[derive(Clone, Debug)]
pub struct SubmitConfirmation {
    pub transaction_hash: String,
}

#[async_trait]
pub trait LedgerRpc: Send + Sync {
    /// Dry-run a mutating operation. Side-effect-free; a failure here means
    /// the ledger would reject the write (business rule or malformed input).
    async fn simulate(&self, op: &str, args: &[Value], signer: &SignerId) -> Result<u64>;

    /// Commit a mutating operation with the previously estimated cost.
    async fn submit(&self, op: &str, args: &[Value], signer: &SignerId, cost: u64) -> Result<SubmitConfirmation>;

    /// Pure read of a fixed-order record. Safe to retry.
    async fn query(&self, op: &str, args: &[Value]) -> Result<PositionalRecord>;

    /// Reachability probe for readiness reporting. The ledger answering at
    /// all counts as reachable, even if it rejects the probe query.
    async fn probe(&self) -> Result<()> {
        match self.query("viewHistory", &[]).await {
            Ok(_) => Ok(()),
            Err(err @ GatewayError::Rpc { .. }) | Err(err @ GatewayError::RpcTimeout { .. }) => Err(err),
            Err(_) => Ok(()),
        }
    }
}
