// Export our modules for use in the binary and tests
pub mod api;
pub mod config;
pub mod domain;
pub mod logging;
pub mod routes;
pub mod store;

pub use domain::{risk_color, risk_level, RiskLevel};
pub use routes::Route;
pub use store::ClimateStore;
