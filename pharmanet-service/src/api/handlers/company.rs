use super::types::{parse_request, respond};
use crate::api::state::GatewayState;
use axum::extract::State;
use axum::response::Response;
use pharmanet_core::application::WriteCall;
use pharmanet_core::domain::mapper;
use pharmanet_core::domain::model::Company;
use pharmanet_core::domain::requests::RegisterCompanyRequest;
use pharmanet_core::Result;
use std::sync::Arc;

pub async fn register_company(State(state): State<Arc<GatewayState>>, body: String) -> Response {
    let outcome = register_company_inner(&state, &body).await;
    respond(&state, "registerCompany", "Company registered", "Error registering company", outcome)
}

async fn register_company_inner(state: &GatewayState, body: &str) -> Result<Company> {
    let req: RegisterCompanyRequest = parse_request(body)?;
    req.validate()?;
    let record = state
        .orchestrator
        .execute(WriteCall {
            write_op: "registerCompany",
            write_args: req.ledger_args(),
            read_op: "getRegisteredCompany",
            read_args: req.read_key(),
        })
        .await?;
    mapper::company_from_record(&record)
}
