pub mod api_client;
pub mod configuration;
pub mod domain;
pub mod render;
pub mod routes;
pub mod session_state;
pub mod startup;
pub mod telemetry;
pub mod transport;
pub mod utils;
