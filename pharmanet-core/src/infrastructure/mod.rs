//! Infrastructure layer: remote ledger access, configuration, logging.

pub mod config;
pub mod logging;
pub mod rpc;
