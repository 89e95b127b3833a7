use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpResponse};
use actix_web_flash_messages::IncomingFlashMessages;

use crate::api_client::{Acknowledgement, ApiClient};
use crate::domain::{Project, ProjectSubmission};
use crate::render::admin::{self, AdminTab};
use crate::render::AssetOrigin;
use crate::routes::admin::{finish_submit, require_image_when_adding, tab_page, uploaded_image};
use crate::routes::SubmitError;
use crate::session_state::{Draft, EditableForm, FormMode, TypedSession};
use crate::utils::e500;

#[derive(MultipartForm)]
pub struct ProjectUpload {
    name: Text<String>,
    description: Text<String>,
    image: Option<TempFile>,
}

impl ProjectUpload {
    fn draft(&self) -> Draft {
        Draft::new([
            ("name", self.name.as_str()),
            ("description", self.description.as_str()),
        ])
    }
}

#[tracing::instrument(name = "Render projects tab", skip_all)]
pub async fn projects_tab(
    api_client: web::Data<ApiClient>,
    origin: web::Data<AssetOrigin>,
    session: TypedSession,
    flash_messages: IncomingFlashMessages,
) -> Result<HttpResponse, actix_web::Error> {
    let mode = session.form_mode(EditableForm::Projects).map_err(e500)?;
    let draft = session.take_draft(EditableForm::Projects).map_err(e500)?;

    let (form, list) = match api_client.list_projects().await {
        Ok(projects) => (
            project_form(&mode, &projects, draft.as_ref()),
            admin::project_cards(&projects, &origin),
        ),
        Err(e) => (
            project_form(&mode, &[], draft.as_ref()),
            admin::load_error(&e.to_string()),
        ),
    };
    let content = format!(
        r#"{add}{form}<div id="projects-list" class="items-grid">{list}</div>"#,
        add = admin::add_button(AdminTab::Projects),
        form = form,
        list = list,
    );
    Ok(tab_page(AdminTab::Projects, flash_messages, &content))
}

// An edit whose record has disappeared from the list shows no form.
fn project_form(mode: &FormMode, projects: &[Project], draft: Option<&Draft>) -> String {
    match mode {
        FormMode::Hidden => String::new(),
        FormMode::Adding => admin::project_form(None, draft),
        FormMode::Editing(id) => projects
            .iter()
            .find(|project| &project.id == id)
            .map(|project| admin::project_form(Some(project), draft))
            .unwrap_or_default(),
    }
}

#[tracing::instrument(
    name = "Submit project form",
    skip_all,
    fields(project_name = %form.0.name.as_str())
)]
pub async fn submit_project(
    form: MultipartForm<ProjectUpload>,
    api_client: web::Data<ApiClient>,
    session: TypedSession,
) -> Result<HttpResponse, actix_web::Error> {
    let mode = session.form_mode(EditableForm::Projects).map_err(e500)?;
    let outcome = save_project(&form.0, &mode, &api_client).await;
    finish_submit(EditableForm::Projects, &mode, outcome, form.0.draft(), &session)
}

async fn save_project(
    form: &ProjectUpload,
    mode: &FormMode,
    api_client: &ApiClient,
) -> Result<Acknowledgement, SubmitError> {
    let image = uploaded_image(form.image.as_ref());
    require_image_when_adding(mode, &image)?;
    let submission = ProjectSubmission::parse(
        form.name.as_str().to_owned(),
        form.description.as_str().to_owned(),
        image,
    )
    .map_err(SubmitError::ValidationError)?;

    let acknowledgement = match mode.editing_id() {
        Some(id) => api_client.update_project(id, submission).await?,
        None => api_client.create_project(submission).await?,
    };
    Ok(acknowledgement)
}
