use super::types::{parse_request, respond};
use crate::api::state::GatewayState;
use axum::extract::State;
use axum::response::Response;
use pharmanet_core::application::WriteCall;
use pharmanet_core::domain::mapper;
use pharmanet_core::domain::model::Drug;
use pharmanet_core::domain::requests::{AddDrugRequest, DrugLookupRequest, RetailDrugRequest};
use pharmanet_core::Result;
use std::sync::Arc;

pub async fn add_drug(State(state): State<Arc<GatewayState>>, body: String) -> Response {
    let outcome = add_drug_inner(&state, &body).await;
    respond(&state, "addDrug", "Drug added", "Error adding drug", outcome)
}

async fn add_drug_inner(state: &GatewayState, body: &str) -> Result<Drug> {
    let req: AddDrugRequest = parse_request(body)?;
    req.validate()?;
    let record = state
        .orchestrator
        .execute(WriteCall {
            write_op: "addDrug",
            write_args: req.ledger_args(),
            read_op: "getRegisteredDrug",
            read_args: req.read_key(),
        })
        .await?;
    mapper::drug_from_record(&record)
}

pub async fn retail_drug(State(state): State<Arc<GatewayState>>, body: String) -> Response {
    let outcome = retail_drug_inner(&state, &body).await;
    respond(&state, "retailDrug", "Drug retailed", "Error retailing drug", outcome)
}

async fn retail_drug_inner(state: &GatewayState, body: &str) -> Result<Drug> {
    let req: RetailDrugRequest = parse_request(body)?;
    req.validate()?;
    let record = state
        .orchestrator
        .execute(WriteCall {
            write_op: "retailDrug",
            write_args: req.ledger_args(),
            read_op: "getRegisteredDrug",
            read_args: req.read_key(),
        })
        .await?;
    mapper::drug_from_record(&record)
}

/// Provenance history: read-only, no signer, no ordering slot. The raw
/// ledger record is the result.
pub async fn view_history(State(state): State<Arc<GatewayState>>, body: String) -> Response {
    let outcome = view_history_inner(&state, &body).await;
    respond(&state, "viewHistory", "History fetched", "Error fetching history", outcome)
}

async fn view_history_inner(state: &GatewayState, body: &str) -> Result<serde_json::Value> {
    let req: DrugLookupRequest = parse_request(body)?;
    req.validate()?;
    let record = state.orchestrator.read("viewHistory", &req.read_key()).await?;
    Ok(serde_json::Value::Array(record))
}

pub async fn view_drug_current_state(State(state): State<Arc<GatewayState>>, body: String) -> Response {
    let outcome = view_drug_current_state_inner(&state, &body).await;
    respond(&state, "viewDrugCurrentState", "Drug state fetched", "Error fetching drug state", outcome)
}

async fn view_drug_current_state_inner(state: &GatewayState, body: &str) -> Result<serde_json::Value> {
    let req: DrugLookupRequest = parse_request(body)?;
    req.validate()?;
    let record = state.orchestrator.read("viewDrugCurrentState", &req.read_key()).await?;
    Ok(serde_json::Value::Array(record))
}
