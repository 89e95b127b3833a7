use actix_web::{web, HttpResponse};
use actix_web_flash_messages::IncomingFlashMessages;

use crate::api_client::ApiClient;
use crate::render::admin::{self, AdminTab};
use crate::routes::admin::tab_page;

#[tracing::instrument(name = "Render newsletter subscribers tab", skip_all)]
pub async fn newsletters_tab(
    api_client: web::Data<ApiClient>,
    flash_messages: IncomingFlashMessages,
) -> HttpResponse {
    let list = match api_client.list_subscribers().await {
        Ok(subscribers) => admin::subscribers_table(&subscribers),
        Err(e) => admin::load_error(&e.to_string()),
    };
    let content = format!(r#"<div id="newsletters-list">{}</div>"#, list);
    tab_page(AdminTab::Newsletters, flash_messages, &content)
}
