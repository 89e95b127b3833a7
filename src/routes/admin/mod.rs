use actix_multipart::form::tempfile::TempFile;
use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};

use crate::render::admin::{self, AdminTab};
use crate::routes::{alert_level_to_str, SubmitError};
use crate::session_state::{Draft, EditableForm, FormMode, TypedSession};
use crate::transport::FileAttachment;
use crate::utils::{e500, see_other};

mod clients;
mod contacts;
mod delete;
mod form_state;
mod newsletters;
mod projects;

pub use clients::{clients_tab, submit_client};
pub use contacts::contacts_tab;
pub use delete::{confirm_delete, delete_record};
pub use form_state::{add_record, cancel_form, edit_record};
pub use newsletters::newsletters_tab;
pub use projects::{projects_tab, submit_project};

impl From<EditableForm> for AdminTab {
    fn from(form: EditableForm) -> Self {
        match form {
            EditableForm::Projects => AdminTab::Projects,
            EditableForm::Clients => AdminTab::Clients,
        }
    }
}

pub async fn admin_root() -> HttpResponse {
    see_other(&AdminTab::Projects.path())
}

fn tab_page(
    tab: AdminTab,
    flash_messages: IncomingFlashMessages,
    content: &str,
) -> HttpResponse {
    let alerts: String = flash_messages
        .iter()
        .map(|message| admin::alert(alert_level_to_str(&message.level()), message.content()))
        .collect();
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(admin::page(tab, &alerts, content))
}

// Browsers send an empty, nameless part when no file was picked.
fn uploaded_image(file: Option<&TempFile>) -> Option<FileAttachment> {
    let file = file?;
    let file_name = file.file_name.as_deref().filter(|name| !name.is_empty())?;
    Some(FileAttachment::new(
        "image",
        file_name,
        file.content_type.clone(),
        file.file.path(),
    ))
}

/// Adding without a picked image is refused before anything is sent.
fn require_image_when_adding(
    mode: &FormMode,
    image: &Option<FileAttachment>,
) -> Result<(), SubmitError> {
    if mode.editing_id().is_none() && image.is_none() {
        return Err(SubmitError::ValidationError("Image is required".to_string()));
    }
    Ok(())
}

/// Flash the outcome of a create/update and settle the form state.
///
/// Success hides the form. A failure keeps it open and refilled with `draft`
/// so the admin can retry.
fn finish_submit<T>(
    form: EditableForm,
    mode: &FormMode,
    outcome: Result<T, SubmitError>,
    draft: Draft,
    session: &TypedSession,
) -> Result<HttpResponse, actix_web::Error> {
    let entity = AdminTab::from(form).record_title();
    match outcome {
        Ok(_) => {
            let verb = if mode.editing_id().is_some() {
                "updated"
            } else {
                "created"
            };
            FlashMessage::success(format!("{} {} successfully!", entity, verb)).send();
            session
                .set_form_mode(form, FormMode::Hidden)
                .map_err(e500)?;
        }
        Err(e) => {
            tracing::warn!(error.cause_chain = ?e, "Admin form submission failed");
            FlashMessage::error(format!("Error: {}", e)).send();
            session.set_draft(form, draft).map_err(e500)?;
        }
    }
    Ok(see_other(form.path()))
}
