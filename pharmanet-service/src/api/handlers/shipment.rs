use super::types::{parse_request, respond};
use crate::api::state::GatewayState;
use axum::extract::State;
use axum::response::Response;
use pharmanet_core::application::WriteCall;
use pharmanet_core::domain::mapper;
use pharmanet_core::domain::model::Shipment;
use pharmanet_core::domain::requests::{CreateShipmentRequest, UpdateShipmentRequest};
use pharmanet_core::Result;
use std::sync::Arc;

pub async fn create_shipment(State(state): State<Arc<GatewayState>>, body: String) -> Response {
    let outcome = create_shipment_inner(&state, &body).await;
    respond(&state, "createShipment", "Shipment created", "Error creating shipment", outcome)
}

async fn create_shipment_inner(state: &GatewayState, body: &str) -> Result<Shipment> {
    let req: CreateShipmentRequest = parse_request(body)?;
    req.validate()?;
    let record = state
        .orchestrator
        .execute(WriteCall {
            write_op: "createShipment",
            write_args: req.ledger_args(),
            read_op: "getRegisteredShipment",
            read_args: req.read_key(),
        })
        .await?;
    mapper::shipment_from_record(&record)
}

pub async fn update_shipment(State(state): State<Arc<GatewayState>>, body: String) -> Response {
    let outcome = update_shipment_inner(&state, &body).await;
    respond(&state, "updateShipment", "Shipment updated", "Error updating shipment", outcome)
}

async fn update_shipment_inner(state: &GatewayState, body: &str) -> Result<Shipment> {
    let req: UpdateShipmentRequest = parse_request(body)?;
    req.validate()?;
    let record = state
        .orchestrator
        .execute(WriteCall {
            write_op: "updateShipment",
            write_args: req.ledger_args(),
            read_op: "getRegisteredShipment",
            read_args: req.read_key(),
        })
        .await?;
    mapper::shipment_from_record(&record)
}
