use super::handlers::company::register_company;
use super::handlers::drug::{add_drug, retail_drug, view_drug_current_state, view_history};
use super::handlers::health::{handle_health, handle_metrics, handle_ready};
use super::handlers::order::create_po;
use super::handlers::shipment::{create_shipment, update_shipment};
use super::middleware::correlation::correlation_middleware;
use super::middleware::logging::logging_middleware;
use super::middleware::rate_limit::rate_limit_middleware;
use super::state::GatewayState;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use log::{error, info};
use pharmanet_core::foundation::MAX_REQUEST_BODY_BYTES;
use pharmanet_core::GatewayError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub async fn run_gateway_server(addr: SocketAddr, state: Arc<GatewayState>) -> Result<(), GatewayError> {
    info!("binding gateway server addr={}", addr);
    let app = build_router(state);
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server ready and accepting connections addr={}", addr);
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await.map_err(|err| {
        error!("HTTP server terminated unexpectedly addr={} error={}", addr, err);
        GatewayError::Message(err.to_string())
    })
}

pub fn build_router(state: Arc<GatewayState>) -> Router {
    let operations = Router::new()
        .route("/registerCompany", post(register_company))
        .route("/addDrug", post(add_drug))
        .route("/createPO", post(create_po))
        .route("/createShipment", post(create_shipment))
        .route("/updateShipment", post(update_shipment))
        .route("/retailDrug", post(retail_drug))
        .route("/viewHistory", post(view_history))
        .route("/viewDrugCurrentState", post(view_drug_current_state))
        .route_layer(axum::middleware::from_fn_with_state(state.clone(), rate_limit_middleware));

    Router::new()
        .merge(operations)
        .route("/health", get(handle_health))
        .route("/ready", get(handle_ready))
        .route("/metrics", get(handle_metrics))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(axum::middleware::from_fn(logging_middleware))
        .layer(axum::middleware::from_fn(correlation_middleware))
        .with_state(state)
}
