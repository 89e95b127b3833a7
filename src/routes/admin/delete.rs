use actix_web::{web, HttpResponse};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};

use crate::api_client::{Acknowledgement, ApiClient, ApiError};
use crate::render::admin::{self, AdminTab};
use crate::routes::admin::tab_page;
use crate::utils::see_other;

#[derive(serde::Deserialize)]
pub struct ConfirmationData {
    confirm: Option<String>,
}

pub async fn confirm_delete(
    path: web::Path<(AdminTab, String)>,
    flash_messages: IncomingFlashMessages,
) -> HttpResponse {
    let (tab, id) = path.into_inner();
    tab_page(tab, flash_messages, &admin::confirm_delete(tab, &id))
}

#[tracing::instrument(name = "Delete record", skip(form, api_client))]
pub async fn delete_record(
    path: web::Path<(AdminTab, String)>,
    form: web::Form<ConfirmationData>,
    api_client: web::Data<ApiClient>,
) -> HttpResponse {
    let (tab, id) = path.into_inner();
    if form.confirm.as_deref() != Some("yes") {
        return see_other(&tab.path());
    }

    match delete(tab, &id, &api_client).await {
        Ok(_) => {
            FlashMessage::success(format!("{} deleted successfully!", tab.record_title())).send()
        }
        Err(e) => FlashMessage::error(format!("Error: {}", e)).send(),
    }
    see_other(&tab.path())
}

async fn delete(tab: AdminTab, id: &str, api_client: &ApiClient) -> Result<Acknowledgement, ApiError> {
    match tab {
        AdminTab::Projects => api_client.delete_project(id).await,
        AdminTab::Clients => api_client.delete_client(id).await,
        AdminTab::Contacts => api_client.delete_contact(id).await,
        AdminTab::Newsletters => api_client.delete_subscriber(id).await,
    }
}
