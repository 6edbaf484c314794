//! Protocol tests for the transaction orchestrator against a scripted ledger.

use async_trait::async_trait;
use pharmanet_core::application::{SignerPool, TransactionOrchestrator, WriteCall};
use pharmanet_core::foundation::{ErrorKind, GatewayError, PositionalRecord, SignerId};
use pharmanet_core::infrastructure::config::LedgerConfig;
use pharmanet_core::infrastructure::rpc::{LedgerRpc, SubmitConfirmation};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::{sleep, timeout};

#[derive(Default)]
struct MockLedger {
    calls: Mutex<Vec<String>>,
    record: Mutex<PositionalRecord>,
    fail_simulate: AtomicBool,
    timeout_submit: AtomicBool,
    submit_delay_ms: AtomicU64,
    empty_query: AtomicBool,
    fail_query_times: AtomicUsize,
    in_submit: AtomicBool,
    submit_overlap: AtomicBool,
}

impl MockLedger {
    fn with_record(record: PositionalRecord) -> Self {
        let ledger = Self::default();
        *ledger.record.lock().expect("record lock") = record;
        ledger
    }

    fn record_call(&self, call: String) {
        self.calls.lock().expect("calls lock").push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl LedgerRpc for MockLedger {
    async fn simulate(&self, op: &str, _args: &[Value], _signer: &SignerId) -> Result<u64, GatewayError> {
        self.record_call(format!("simulate:{op}"));
        if self.fail_simulate.load(Ordering::SeqCst) {
            return Err(GatewayError::Rejected {
                op: op.to_string(),
                code: -32000,
                message: "company not registered".to_string(),
            });
        }
        Ok(21_000)
    }

    async fn submit(&self, op: &str, _args: &[Value], _signer: &SignerId, _cost: u64) -> Result<SubmitConfirmation, GatewayError> {
        self.record_call(format!("submit:{op}"));
        if self.in_submit.swap(true, Ordering::SeqCst) {
            self.submit_overlap.store(true, Ordering::SeqCst);
        }
        let delay = self.submit_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            sleep(Duration::from_millis(delay)).await;
        }
        self.in_submit.store(false, Ordering::SeqCst);
        if self.timeout_submit.load(Ordering::SeqCst) {
            return Err(GatewayError::RpcTimeout { op: op.to_string(), timeout_ms: 50 });
        }
        Ok(SubmitConfirmation { transaction_hash: "0xfeed".to_string() })
    }

    async fn query(&self, op: &str, _args: &[Value]) -> Result<PositionalRecord, GatewayError> {
        self.record_call(format!("query:{op}"));
        if self.fail_query_times.load(Ordering::SeqCst) > 0 {
            self.fail_query_times.fetch_sub(1, Ordering::SeqCst);
            return Err(GatewayError::Rpc { op: op.to_string(), details: "connection reset".to_string() });
        }
        if self.empty_query.load(Ordering::SeqCst) {
            return Ok(Vec::new());
        }
        Ok(self.record.lock().expect("record lock").clone())
    }
}

fn test_config() -> LedgerConfig {
    LedgerConfig {
        endpoint_url: "http://localhost:8545".to_string(),
        call_timeout_ms: 1_000,
        query_attempts: 2,
        query_retry_delay_ms: 10,
    }
}

fn orchestrator(ledger: Arc<MockLedger>) -> TransactionOrchestrator {
    let signers = Arc::new(SignerPool::new(vec![SignerId::from("0xoperator")], 0).expect("pool"));
    TransactionOrchestrator::new(ledger, signers, &test_config())
}

fn company_call() -> WriteCall {
    WriteCall {
        write_op: "registerCompany",
        write_args: vec![json!("CRN1"), json!("Acme"), json!("Delhi"), json!(0)],
        read_op: "getRegisteredCompany",
        read_args: vec![json!("CRN1")],
    }
}

fn company_record() -> PositionalRecord {
    vec![json!("c-1"), json!("Acme"), json!("Delhi"), json!(0), json!(1)]
}

#[tokio::test]
async fn response_is_the_read_back_record_not_the_receipt() {
    let ledger = Arc::new(MockLedger::with_record(company_record()));
    let orchestrator = orchestrator(ledger.clone());

    let record = orchestrator.execute(company_call()).await.expect("execute");
    assert_eq!(record, company_record());
    assert_eq!(
        ledger.calls(),
        vec!["simulate:registerCompany", "submit:registerCompany", "query:getRegisteredCompany"]
    );
}

#[tokio::test]
async fn estimation_failure_short_circuits_submission() {
    let ledger = Arc::new(MockLedger::with_record(company_record()));
    ledger.fail_simulate.store(true, Ordering::SeqCst);
    let orchestrator = orchestrator(ledger.clone());

    let err = orchestrator.execute(company_call()).await.expect_err("rejected");
    assert_eq!(err.kind(), ErrorKind::Estimation);
    assert_eq!(ledger.calls(), vec!["simulate:registerCompany"]);
}

#[tokio::test]
async fn submit_timeout_is_unknown_outcome_and_not_retried() {
    let ledger = Arc::new(MockLedger::with_record(company_record()));
    ledger.timeout_submit.store(true, Ordering::SeqCst);
    let orchestrator = orchestrator(ledger.clone());

    let err = orchestrator.execute(company_call()).await.expect_err("timed out");
    assert_eq!(err.kind(), ErrorKind::Submission);
    assert!(err.outcome_unknown());
    let calls = ledger.calls();
    assert_eq!(calls.iter().filter(|c| c.starts_with("submit:")).count(), 1);
    assert!(!calls.iter().any(|c| c.starts_with("query:")));
}

#[tokio::test]
async fn empty_read_back_is_a_readback_error() {
    let ledger = Arc::new(MockLedger::default());
    ledger.empty_query.store(true, Ordering::SeqCst);
    let orchestrator = orchestrator(ledger.clone());

    let err = orchestrator.execute(company_call()).await.expect_err("empty record");
    assert_eq!(err.kind(), ErrorKind::Readback);
    // An empty record is an answer, not a transport failure: no retry.
    assert_eq!(ledger.calls().iter().filter(|c| c.starts_with("query:")).count(), 1);
}

#[tokio::test]
async fn transient_query_failures_are_retried() {
    let ledger = Arc::new(MockLedger::with_record(company_record()));
    ledger.fail_query_times.store(1, Ordering::SeqCst);
    let orchestrator = orchestrator(ledger.clone());

    let record = orchestrator.read("getRegisteredCompany", &[json!("CRN1")]).await.expect("retried");
    assert_eq!(record, company_record());
    assert_eq!(ledger.calls().iter().filter(|c| c.starts_with("query:")).count(), 2);
}

#[tokio::test]
async fn overlapping_writes_on_one_signer_are_serialized() {
    let ledger = Arc::new(MockLedger::with_record(company_record()));
    ledger.submit_delay_ms.store(50, Ordering::SeqCst);
    let orchestrator = Arc::new(orchestrator(ledger.clone()));

    let first = {
        let orchestrator = orchestrator.clone();
        tokio::spawn(async move { orchestrator.execute(company_call()).await })
    };
    let second = {
        let orchestrator = orchestrator.clone();
        tokio::spawn(async move {
            orchestrator
                .execute(WriteCall {
                    write_op: "addDrug",
                    write_args: vec![json!("Paracetamol"), json!("SN-1")],
                    read_op: "getRegisteredDrug",
                    read_args: vec![json!("Paracetamol"), json!("SN-1")],
                })
                .await
        })
    };

    first.await.expect("join").expect("first write");
    second.await.expect("join").expect("second write");

    assert!(!ledger.submit_overlap.load(Ordering::SeqCst), "submissions overlapped");

    // The estimate+submit span of one write never interleaves with the other's.
    let write_phases: Vec<String> =
        ledger.calls().into_iter().filter(|c| c.starts_with("simulate:") || c.starts_with("submit:")).collect();
    assert_eq!(write_phases.len(), 4);
    assert_eq!(write_phases[0].split(':').nth(1), write_phases[1].split(':').nth(1));
    assert_eq!(write_phases[2].split(':').nth(1), write_phases[3].split(':').nth(1));
}

#[tokio::test]
async fn reads_bypass_the_submission_slot() {
    let ledger = Arc::new(MockLedger::with_record(company_record()));
    ledger.submit_delay_ms.store(500, Ordering::SeqCst);
    let orchestrator = Arc::new(orchestrator(ledger.clone()));

    let write = {
        let orchestrator = orchestrator.clone();
        tokio::spawn(async move { orchestrator.execute(company_call()).await })
    };
    // Let the write reach its submit phase and hold the slot.
    sleep(Duration::from_millis(50)).await;

    let read = timeout(Duration::from_millis(250), orchestrator.read("viewHistory", &[json!("Paracetamol"), json!("SN-1")]))
        .await
        .expect("read must not wait for the write slot")
        .expect("read");
    assert_eq!(read, company_record());

    write.await.expect("join").expect("write");
}
