//! The estimate → submit → read-back protocol shared by every mutating
//! operation.
//!
//! The ledger sequences a signer's submissions by a strictly increasing
//! per-signer sequence number, so two in-flight writes sharing the designated
//! writer must not reach the submit phase out of program order. The
//! orchestrator serializes the estimate+submit span per signer identity and
//! lets read-backs and read-only queries proceed concurrently.

use crate::application::signer::SignerPool;
use crate::foundation::{GatewayError, PositionalRecord, Result, SignerId};
use crate::infrastructure::config::LedgerConfig;
use crate::infrastructure::rpc::retry::retry;
use crate::infrastructure::rpc::LedgerRpc;
use log::{debug, info};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex as AsyncMutex;

/// One mutating operation as a single descriptor.
///
/// The same descriptor feeds both the estimate and the submit phase, so the
/// simulated arguments can never drift from the submitted ones.
#[derive(Clone, Debug)]
pub struct WriteCall {
    pub write_op: &'static str,
    pub write_args: Vec<Value>,
    pub read_op: &'static str,
    pub read_args: Vec<Value>,
}

/// Per-signer submission slots.
///
/// The slot is the only mutable shared resource in-process; the ledger client
/// handle itself is read-shared.
#[derive(Default)]
struct SubmissionSlots {
    inner: parking_lot::Mutex<HashMap<SignerId, Arc<AsyncMutex<()>>>>,
}

impl SubmissionSlots {
    fn slot_for(&self, signer: &SignerId) -> Arc<AsyncMutex<()>> {
        let mut slots = self.inner.lock();
        slots.entry(signer.clone()).or_insert_with(|| Arc::new(AsyncMutex::new(()))).clone()
    }
}

pub struct TransactionOrchestrator {
    rpc: Arc<dyn LedgerRpc>,
    signers: Arc<SignerPool>,
    slots: SubmissionSlots,
    query_attempts: usize,
    query_retry_delay: Duration,
}

impl TransactionOrchestrator {
    pub fn new(rpc: Arc<dyn LedgerRpc>, signers: Arc<SignerPool>, ledger: &LedgerConfig) -> Self {
        Self {
            rpc,
            signers,
            slots: SubmissionSlots::default(),
            query_attempts: ledger.query_attempts.max(1),
            query_retry_delay: Duration::from_millis(ledger.query_retry_delay_ms),
        }
    }

    /// Execute one mutating operation end to end and return the canonical
    /// post-write record.
    ///
    /// Protocol, strictly ordered:
    /// 1. acquire the designated writer's submission slot;
    /// 2. simulate — failure is a definite rejection, nothing was submitted;
    /// 3. submit with the estimated cost — the confirmation only proves
    ///    inclusion and is discarded, a timeout is flagged unknown-outcome;
    /// 4. release the slot;
    /// 5. read the canonical record back — the write is never retried if
    ///    this fails, the inconsistency is reported to the caller.
    pub async fn execute(&self, call: WriteCall) -> Result<PositionalRecord> {
        let signer = self.signers.designated_writer();
        let slot = self.slots.slot_for(signer);
        {
            let _ordering = slot.lock().await;
            debug!("write slot acquired op={} signer={}", call.write_op, signer);

            let cost = self
                .rpc
                .simulate(call.write_op, &call.write_args, signer)
                .await
                .map_err(|err| GatewayError::estimation(call.write_op, err))?;
            debug!("estimation complete op={} signer={} cost={}", call.write_op, signer, cost);

            let confirmation = self
                .rpc
                .submit(call.write_op, &call.write_args, signer, cost)
                .await
                .map_err(|err| GatewayError::submission(call.write_op, err))?;
            info!("submission confirmed op={} signer={} tx={}", call.write_op, signer, confirmation.transaction_hash);
        }

        let record = self.read_canonical(call.read_op, &call.read_args).await?;
        debug!("read-back complete op={} read_op={} fields={}", call.write_op, call.read_op, record.len());
        Ok(record)
    }

    /// Read-only operation: single query, no signer, no ordering slot.
    pub async fn read(&self, read_op: &'static str, read_args: &[Value]) -> Result<PositionalRecord> {
        self.read_canonical(read_op, read_args).await
    }

    /// Ledger reachability for readiness reporting.
    pub async fn probe(&self) -> Result<()> {
        self.rpc.probe().await
    }

    async fn read_canonical(&self, read_op: &'static str, read_args: &[Value]) -> Result<PositionalRecord> {
        let record = retry(self.query_attempts, self.query_retry_delay, || self.rpc.query(read_op, read_args))
            .await
            .map_err(|err| GatewayError::readback(read_op, err))?;
        if record.is_empty() {
            return Err(GatewayError::Readback {
                op: read_op.to_string(),
                details: "ledger returned no record for key".to_string(),
            });
        }
        Ok(record)
    }
}
