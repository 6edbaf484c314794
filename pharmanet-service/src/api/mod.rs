pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use middleware::rate_limit::RateLimiter;
pub use state::GatewayState;
