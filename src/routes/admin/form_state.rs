use actix_web::{web, HttpResponse};

use crate::session_state::{EditableForm, FormMode, TypedSession};
use crate::utils::{e500, see_other};

pub async fn add_record(
    form: web::Path<EditableForm>,
    session: TypedSession,
) -> Result<HttpResponse, actix_web::Error> {
    let form = form.into_inner();
    session
        .set_form_mode(form, FormMode::Adding)
        .map_err(e500)?;
    Ok(see_other(form.path()))
}

pub async fn cancel_form(
    form: web::Path<EditableForm>,
    session: TypedSession,
) -> Result<HttpResponse, actix_web::Error> {
    let form = form.into_inner();
    session
        .set_form_mode(form, FormMode::Hidden)
        .map_err(e500)?;
    Ok(see_other(form.path()))
}

/// Replaces whatever the form was doing; only the last edited record is kept.
#[tracing::instrument(name = "Start editing record", skip(session))]
pub async fn edit_record(
    path: web::Path<(EditableForm, String)>,
    session: TypedSession,
) -> Result<HttpResponse, actix_web::Error> {
    let (form, id) = path.into_inner();
    session
        .set_form_mode(form, FormMode::Editing(id))
        .map_err(e500)?;
    Ok(see_other(form.path()))
}
