use actix_web::{web, HttpResponse};

use crate::api_client::ApiClient;

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[tracing::instrument(name = "Proxy backend health", skip(api_client))]
pub async fn backend_health(api_client: web::Data<ApiClient>) -> HttpResponse {
    match api_client.health().await {
        Ok(health) => HttpResponse::Ok().json(health),
        Err(e) => HttpResponse::BadGateway().json(serde_json::json!({ "error": e.to_string() })),
    }
}
