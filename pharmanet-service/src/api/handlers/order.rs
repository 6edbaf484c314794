use super::types::{parse_request, respond};
use crate::api::state::GatewayState;
use axum::extract::State;
use axum::response::Response;
use pharmanet_core::application::WriteCall;
use pharmanet_core::domain::mapper;
use pharmanet_core::domain::model::PurchaseOrder;
use pharmanet_core::domain::requests::CreatePoRequest;
use pharmanet_core::Result;
use std::sync::Arc;

pub async fn create_po(State(state): State<Arc<GatewayState>>, body: String) -> Response {
    let outcome = create_po_inner(&state, &body).await;
    respond(&state, "createPO", "Purchase order created", "Error creating purchase order", outcome)
}

async fn create_po_inner(state: &GatewayState, body: &str) -> Result<PurchaseOrder> {
    let req: CreatePoRequest = parse_request(body)?;
    req.validate()?;
    let record = state
        .orchestrator
        .execute(WriteCall {
            write_op: "createPO",
            write_args: req.ledger_args(),
            read_op: "getRegisteredPO",
            read_args: req.read_key(),
        })
        .await?;
    mapper::purchase_order_from_record(&record)
}
