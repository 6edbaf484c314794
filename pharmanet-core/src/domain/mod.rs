//! Domain layer: supply-chain entities, positional-record mapping, and
//! request payload validation. Everything here is pure; the ledger owns the
//! entity lifecycles.

pub mod mapper;
pub mod model;
pub mod requests;

pub use model::{Company, CompanyRole, Drug, PurchaseOrder, Shipment, ShipmentStatus};
