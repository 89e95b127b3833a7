use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpResponse};
use actix_web_flash_messages::IncomingFlashMessages;

use crate::api_client::{Acknowledgement, ApiClient};
use crate::domain::{Client, ClientSubmission};
use crate::render::admin::{self, AdminTab};
use crate::render::AssetOrigin;
use crate::routes::admin::{finish_submit, require_image_when_adding, tab_page, uploaded_image};
use crate::routes::SubmitError;
use crate::session_state::{Draft, EditableForm, FormMode, TypedSession};
use crate::utils::e500;

#[derive(MultipartForm)]
pub struct ClientUpload {
    name: Text<String>,
    description: Text<String>,
    designation: Text<String>,
    image: Option<TempFile>,
}

impl ClientUpload {
    fn draft(&self) -> Draft {
        Draft::new([
            ("name", self.name.as_str()),
            ("description", self.description.as_str()),
            ("designation", self.designation.as_str()),
        ])
    }
}

#[tracing::instrument(name = "Render clients tab", skip_all)]
pub async fn clients_tab(
    api_client: web::Data<ApiClient>,
    origin: web::Data<AssetOrigin>,
    session: TypedSession,
    flash_messages: IncomingFlashMessages,
) -> Result<HttpResponse, actix_web::Error> {
    let mode = session.form_mode(EditableForm::Clients).map_err(e500)?;
    let draft = session.take_draft(EditableForm::Clients).map_err(e500)?;

    let (form, list) = match api_client.list_clients().await {
        Ok(clients) => (
            client_form(&mode, &clients, draft.as_ref()),
            admin::client_cards(&clients, &origin),
        ),
        Err(e) => (
            client_form(&mode, &[], draft.as_ref()),
            admin::load_error(&e.to_string()),
        ),
    };
    let content = format!(
        r#"{add}{form}<div id="clients-list" class="items-grid">{list}</div>"#,
        add = admin::add_button(AdminTab::Clients),
        form = form,
        list = list,
    );
    Ok(tab_page(AdminTab::Clients, flash_messages, &content))
}

fn client_form(mode: &FormMode, clients: &[Client], draft: Option<&Draft>) -> String {
    match mode {
        FormMode::Hidden => String::new(),
        FormMode::Adding => admin::client_form(None, draft),
        FormMode::Editing(id) => clients
            .iter()
            .find(|client| &client.id == id)
            .map(|client| admin::client_form(Some(client), draft))
            .unwrap_or_default(),
    }
}

#[tracing::instrument(
    name = "Submit client form",
    skip_all,
    fields(client_name = %form.0.name.as_str())
)]
pub async fn submit_client(
    form: MultipartForm<ClientUpload>,
    api_client: web::Data<ApiClient>,
    session: TypedSession,
) -> Result<HttpResponse, actix_web::Error> {
    let mode = session.form_mode(EditableForm::Clients).map_err(e500)?;
    let outcome = save_client(&form.0, &mode, &api_client).await;
    finish_submit(EditableForm::Clients, &mode, outcome, form.0.draft(), &session)
}

async fn save_client(
    form: &ClientUpload,
    mode: &FormMode,
    api_client: &ApiClient,
) -> Result<Acknowledgement, SubmitError> {
    let image = uploaded_image(form.image.as_ref());
    require_image_when_adding(mode, &image)?;
    let submission = ClientSubmission::parse(
        form.name.as_str().to_owned(),
        form.description.as_str().to_owned(),
        form.designation.as_str().to_owned(),
        image,
    )
    .map_err(SubmitError::ValidationError)?;

    let acknowledgement = match mode.editing_id() {
        Some(id) => api_client.update_client(id, submission).await?,
        None => api_client.create_client(submission).await?,
    };
    Ok(acknowledgement)
}
