use crate::api::RateLimiter;
use crate::service::metrics::Metrics;
use pharmanet_core::application::TransactionOrchestrator;
use std::sync::Arc;

#[derive(Clone)]
pub struct GatewayState {
    pub orchestrator: Arc<TransactionOrchestrator>,
    pub metrics: Arc<Metrics>,
    pub rate_limiter: Arc<RateLimiter>,
    pub rate_limit_rps: u32,
    pub rate_limit_burst: u32,
}
