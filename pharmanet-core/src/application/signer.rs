use crate::foundation::{GatewayError, Result, SignerId};
use crate::infrastructure::config::SignerPoolConfig;
use log::info;

/// Fixed set of signer identities, injected at startup.
///
/// One identity is the operator's designated writer for every mutating call;
/// it is resolved once per process lifetime. Identities are never created,
/// rotated, or revoked at runtime. Submission ordering state is scoped to the
/// signer identity, not the process (see the orchestrator's slot map).
#[derive(Clone, Debug)]
pub struct SignerPool {
    accounts: Vec<SignerId>,
    writer_index: usize,
}

impl SignerPool {
    pub fn new(accounts: Vec<SignerId>, writer_index: usize) -> Result<Self> {
        if accounts.is_empty() {
            return Err(GatewayError::Config("signer pool must hold at least one identity".to_string()));
        }
        if writer_index >= accounts.len() {
            return Err(GatewayError::Config(format!(
                "writer index {} out of range for {} signers",
                writer_index,
                accounts.len()
            )));
        }
        info!("signer pool ready signers={} writer={}", accounts.len(), accounts[writer_index]);
        Ok(Self { accounts, writer_index })
    }

    pub fn from_config(config: &SignerPoolConfig) -> Result<Self> {
        let accounts = config.accounts.iter().map(|account| SignerId::new(account.clone())).collect();
        Self::new(accounts, config.writer_index)
    }

    /// The identity that signs all mutating calls.
    pub fn designated_writer(&self) -> &SignerId {
        &self.accounts[self.writer_index]
    }

    pub fn accounts(&self) -> &[SignerId] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
