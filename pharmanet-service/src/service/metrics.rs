use log::debug;
use pharmanet_core::GatewayError;
use prometheus::{Encoder, IntCounterVec, Registry, TextEncoder};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct MetricsSnapshot {
    pub uptime: Duration,
    pub requests_ok: u64,
    pub requests_error: u64,
}

pub struct Metrics {
    registry: Registry,
    requests_total: IntCounterVec,
    failures_total: IntCounterVec,
    started_at: Instant,
    requests_ok: AtomicU64,
    requests_error: AtomicU64,
}

impl Metrics {
    pub fn new() -> Result<Self, GatewayError> {
        debug!("initializing prometheus metrics");
        let registry = Registry::new();
        let requests_total = IntCounterVec::new(
            prometheus::Opts::new("gateway_requests_total", "Gateway requests by operation and status"),
            &["operation", "status"],
        )
        .map_err(|err| GatewayError::Message(err.to_string()))?;
        let failures_total = IntCounterVec::new(
            prometheus::Opts::new("gateway_failures_total", "Gateway failures by operation and error kind"),
            &["operation", "kind"],
        )
        .map_err(|err| GatewayError::Message(err.to_string()))?;

        registry.register(Box::new(requests_total.clone())).map_err(|err| GatewayError::Message(err.to_string()))?;
        registry.register(Box::new(failures_total.clone())).map_err(|err| GatewayError::Message(err.to_string()))?;

        Ok(Self {
            registry,
            requests_total,
            failures_total,
            started_at: Instant::now(),
            requests_ok: AtomicU64::new(0),
            requests_error: AtomicU64::new(0),
        })
    }

    pub fn inc_request(&self, operation: &str, status: &str) {
        self.requests_total.with_label_values(&[operation, status]).inc();
        match status {
            "ok" => {
                self.requests_ok.fetch_add(1, Ordering::Relaxed);
            }
            "error" => {
                self.requests_error.fetch_add(1, Ordering::Relaxed);
            }
            _ => {}
        }
    }

    pub fn inc_failure(&self, operation: &str, kind: &str) {
        self.failures_total.with_label_values(&[operation, kind]).inc();
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            uptime: self.started_at.elapsed(),
            requests_ok: self.requests_ok.load(Ordering::Relaxed),
            requests_error: self.requests_error.load(Ordering::Relaxed),
        }
    }

    pub fn encode(&self) -> Result<String, GatewayError> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&metric_families, &mut buffer).map_err(|err| GatewayError::Message(err.to_string()))?;
        let output = String::from_utf8(buffer).map_err(|err| GatewayError::Message(err.to_string()))?;
        Ok(output)
    }
}
