//! Application layer: the transaction-orchestration protocol and the signer
//! identities it submits with.

pub mod orchestrator;
pub mod signer;

pub use orchestrator::{TransactionOrchestrator, WriteCall};
pub use signer::SignerPool;
