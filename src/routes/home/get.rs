use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

use crate::api_client::ApiClient;
use crate::render::{public, AssetOrigin};
use crate::session_state::{PublicForm, TypedSession};
use crate::utils::e500;

#[tracing::instrument(name = "Render public site", skip(api_client, origin, session))]
pub async fn home(
    api_client: web::Data<ApiClient>,
    origin: web::Data<AssetOrigin>,
    session: TypedSession,
) -> Result<HttpResponse, actix_web::Error> {
    // Projects first, then clients; each section survives the other's failure.
    let projects = api_client.list_projects().await.map_err(|e| e.to_string());
    let clients = api_client.list_clients().await.map_err(|e| e.to_string());

    let contact_notice = session.take_notice(PublicForm::Contact).map_err(e500)?;
    let newsletter_notice = session.take_notice(PublicForm::Newsletter).map_err(e500)?;

    let body = public::home_page(
        projects.as_deref().map_err(String::clone),
        clients.as_deref().map_err(String::clone),
        contact_notice.as_ref(),
        newsletter_notice.as_ref(),
        &origin,
    );
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}
