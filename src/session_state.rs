use std::collections::BTreeMap;
use std::future::{ready, Ready};

use actix_session::{Session, SessionExt, SessionGetError, SessionInsertError};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

/// Admin forms that can create or edit a record.
#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EditableForm {
    Projects,
    Clients,
}

impl EditableForm {
    fn key(&self) -> &'static str {
        match self {
            EditableForm::Projects => "project_form",
            EditableForm::Clients => "client_form",
        }
    }

    fn draft_key(&self) -> &'static str {
        match self {
            EditableForm::Projects => "project_draft",
            EditableForm::Clients => "client_draft",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            EditableForm::Projects => "/admin/projects",
            EditableForm::Clients => "/admin/clients",
        }
    }
}

/// State of one admin form. `Editing` holds a single record id; a later edit
/// replaces it.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(tag = "mode", content = "id", rename_all = "snake_case")]
pub enum FormMode {
    #[default]
    Hidden,
    Adding,
    Editing(String),
}

impl FormMode {
    pub fn editing_id(&self) -> Option<&str> {
        match self {
            FormMode::Editing(id) => Some(id),
            _ => None,
        }
    }
}

/// Public-site forms that report their outcome inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicForm {
    Contact,
    Newsletter,
}

impl PublicForm {
    fn key(&self) -> &'static str {
        match self {
            PublicForm::Contact => "contact_notice",
            PublicForm::Newsletter => "newsletter_notice",
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
}

/// Text values a user typed into a form whose submission failed, by input name.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft(BTreeMap<String, String>);

impl Draft {
    pub fn new<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self(
            fields
                .into_iter()
                .map(|(name, value)| (name.to_owned(), value.to_owned()))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    /// Only failed submissions keep what was typed; success clears the form.
    #[serde(default)]
    pub draft: Option<Draft>,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
            draft: None,
        }
    }

    pub fn error(text: impl Into<String>, draft: Draft) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
            draft: Some(draft),
        }
    }
}

pub struct TypedSession(Session);

impl TypedSession {
    pub fn form_mode(&self, form: EditableForm) -> Result<FormMode, SessionGetError> {
        Ok(self.0.get::<FormMode>(form.key())?.unwrap_or_default())
    }

    pub fn set_form_mode(
        &self,
        form: EditableForm,
        mode: FormMode,
    ) -> Result<(), SessionInsertError> {
        self.0.insert(form.key(), mode)
    }

    pub fn set_draft(&self, form: EditableForm, draft: Draft) -> Result<(), SessionInsertError> {
        self.0.insert(form.draft_key(), draft)
    }

    /// Drafts refill the form once, on the render that follows the failure.
    pub fn take_draft(&self, form: EditableForm) -> Result<Option<Draft>, SessionGetError> {
        let draft = self.0.get::<Draft>(form.draft_key())?;
        if draft.is_some() {
            self.0.remove(form.draft_key());
        }
        Ok(draft)
    }

    pub fn set_notice(&self, form: PublicForm, notice: Notice) -> Result<(), SessionInsertError> {
        self.0.insert(form.key(), notice)
    }

    /// Notices are shown once.
    pub fn take_notice(&self, form: PublicForm) -> Result<Option<Notice>, SessionGetError> {
        let notice = self.0.get::<Notice>(form.key())?;
        if notice.is_some() {
            self.0.remove(form.key());
        }
        Ok(notice)
    }
}

impl FromRequest for TypedSession {
    // This is a complicated way of saying
    // "We return the same error returned by the
    // implementation of `FromRequest` for `Session`".
    type Error = <Session as FromRequest>::Error;
    type Future = Ready<Result<TypedSession, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(TypedSession(req.get_session())))
    }
}
