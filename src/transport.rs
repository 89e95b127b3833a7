//! Request-body encoding for record uploads.
//!
//! A local backend takes the browser's multipart upload as it is. Serverless
//! hosting cannot take streamed multipart bodies, so there the same form is
//! sent as a JSON object with the file inlined as a base64 data URL.
use std::path::PathBuf;

use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    Multipart,
    Json,
}

#[derive(thiserror::Error, Debug)]
pub enum UploadError {
    #[error("Failed to read uploaded file `{file_name}`")]
    FileRead {
        file_name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Uploaded file `{0}` has an unusable content type")]
    InvalidContentType(String, #[source] reqwest::Error),
}

/// A file picked in a form. Its bytes stay on disk until the body is built.
#[derive(Debug, Clone)]
pub struct FileAttachment {
    field: String,
    file_name: String,
    content_type: Option<mime::Mime>,
    path: PathBuf,
}

impl FileAttachment {
    pub fn new(
        field: impl Into<String>,
        file_name: impl Into<String>,
        content_type: Option<mime::Mime>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            content_type,
            path: path.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> mime::Mime {
        self.content_type
            .clone()
            .unwrap_or(mime::APPLICATION_OCTET_STREAM)
    }

    #[tracing::instrument(name = "Read uploaded file", skip(self), fields(file_name = %self.file_name))]
    pub async fn read(&self) -> Result<Vec<u8>, UploadError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| UploadError::FileRead {
                file_name: self.file_name.clone(),
                source,
            })
    }

    /// Same shape as `FileReader.readAsDataURL`.
    pub async fn to_data_url(&self) -> Result<String, UploadError> {
        let bytes = self.read().await?;
        Ok(data_url(&self.mime_type(), &bytes))
    }
}

pub fn data_url(mime_type: &mime::Mime, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, base64::encode(bytes))
}

/// Text fields in submission order plus at most one file.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    fields: Vec<(String, String)>,
    file: Option<FileAttachment>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Replaces any previously attached file.
    pub fn attach(mut self, file: Option<FileAttachment>) -> Self {
        self.file = file;
        self
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn attachment(&self) -> Option<&FileAttachment> {
        self.file.as_ref()
    }

    pub async fn into_multipart(self) -> Result<Form, UploadError> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        if let Some(file) = self.file {
            let bytes = file.read().await?;
            let mime_type = file.mime_type();
            let part = Part::bytes(bytes)
                .file_name(file.file_name.clone())
                .mime_str(mime_type.as_ref())
                .map_err(|e| UploadError::InvalidContentType(file.file_name.clone(), e))?;
            form = form.part(file.field, part);
        }
        Ok(form)
    }
}

#[derive(Debug)]
pub enum EncodedBody {
    Multipart(UploadForm),
    Json(Map<String, Value>),
}

/// Choose the wire encoding for `form`.
///
/// In JSON mode the file, if any, is read to the end before the object is built.
#[tracing::instrument(name = "Encode upload form", skip(form))]
pub async fn encode(form: UploadForm, mode: TransportMode) -> Result<EncodedBody, UploadError> {
    match mode {
        TransportMode::Multipart => Ok(EncodedBody::Multipart(form)),
        TransportMode::Json => {
            let inlined = match form.attachment() {
                Some(file) => Some((file.field().to_string(), file.to_data_url().await?)),
                None => None,
            };
            Ok(EncodedBody::Json(json_object(form.fields, inlined)))
        }
    }
}

pub fn json_object(
    fields: Vec<(String, String)>,
    inlined_file: Option<(String, String)>,
) -> Map<String, Value> {
    let mut object = Map::new();
    for (name, value) in fields {
        object.insert(name, Value::String(value));
    }
    if let Some((name, data_url)) = inlined_file {
        object.insert(name, Value::String(data_url));
    }
    object
}
