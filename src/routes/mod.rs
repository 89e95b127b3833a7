use actix_web_flash_messages::Level;

use crate::api_client::ApiError;
use crate::utils::error_chain_fmt;

pub mod admin;
pub mod health_check;
pub mod home;

pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Why a form submission did not reach or satisfy the backend.
#[derive(thiserror::Error)]
pub enum SubmitError {
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl std::fmt::Debug for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
