use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use unicode_segmentation::UnicodeSegmentation;

use crate::domain::{
    Client as ClientRecord, ClientSubmission, Contact, NewContact, NewSubscriber, Project,
    ProjectSubmission, Subscriber, SubscriberEmail,
};
use crate::transport::{encode, EncodedBody, TransportMode, UploadError, UploadForm};
use crate::utils::error_chain_fmt;

const PROJECTS: &str = "/projects";
const CLIENTS: &str = "/clients";
const CONTACTS: &str = "/contacts";
const NEWSLETTERS: &str = "/newsletters";

const GENERIC_FAILURE: &str = "Something went wrong";
const SNIPPET_LENGTH: usize = 100;

#[derive(thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Network(#[from] reqwest::Error),
    #[error("{message}")]
    Server { status: StatusCode, message: String },
    #[error("{message}")]
    MalformedResponse { status: StatusCode, message: String },
    #[error(transparent)]
    Upload(#[from] UploadError),
}

impl std::fmt::Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Server { status, .. } | ApiError::MalformedResponse { status, .. } => {
                Some(*status)
            }
            ApiError::Network(e) => e.status(),
            ApiError::Upload(_) => None,
        }
    }
}

/// What the backend answers to a write.
///
/// Any JSON body is accepted; a 2xx status alone means the write happened.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(from = "Value")]
pub struct Acknowledgement {
    pub message: Option<String>,
}

impl From<Value> for Acknowledgement {
    fn from(body: Value) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned);
        Self { message }
    }
}

#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct BackendHealth {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Typed access to the upstream REST API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http_client: Client,
    base_url: String,
    transport: TransportMode,
}

impl ApiClient {
    pub fn new(base_url: String, transport: TransportMode) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    #[tracing::instrument(name = "List projects", skip(self))]
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.send(self.http_client.get(self.url(PROJECTS))).await
    }

    #[tracing::instrument(name = "Create project", skip(self, project))]
    pub async fn create_project(
        &self,
        project: ProjectSubmission,
    ) -> Result<Acknowledgement, ApiError> {
        self.send_upload(Method::POST, self.url(PROJECTS), project.into_upload_form())
            .await
    }

    #[tracing::instrument(name = "Update project", skip(self, project))]
    pub async fn update_project(
        &self,
        id: &str,
        project: ProjectSubmission,
    ) -> Result<Acknowledgement, ApiError> {
        self.send_upload(
            Method::PUT,
            self.record_url(PROJECTS, id),
            project.into_upload_form(),
        )
        .await
    }

    #[tracing::instrument(name = "Delete project", skip(self))]
    pub async fn delete_project(&self, id: &str) -> Result<Acknowledgement, ApiError> {
        self.send(self.http_client.delete(self.record_url(PROJECTS, id)))
            .await
    }

    #[tracing::instrument(name = "List clients", skip(self))]
    pub async fn list_clients(&self) -> Result<Vec<ClientRecord>, ApiError> {
        self.send(self.http_client.get(self.url(CLIENTS))).await
    }

    #[tracing::instrument(name = "Create client", skip(self, client))]
    pub async fn create_client(
        &self,
        client: ClientSubmission,
    ) -> Result<Acknowledgement, ApiError> {
        self.send_upload(Method::POST, self.url(CLIENTS), client.into_upload_form())
            .await
    }

    #[tracing::instrument(name = "Update client", skip(self, client))]
    pub async fn update_client(
        &self,
        id: &str,
        client: ClientSubmission,
    ) -> Result<Acknowledgement, ApiError> {
        self.send_upload(
            Method::PUT,
            self.record_url(CLIENTS, id),
            client.into_upload_form(),
        )
        .await
    }

    #[tracing::instrument(name = "Delete client", skip(self))]
    pub async fn delete_client(&self, id: &str) -> Result<Acknowledgement, ApiError> {
        self.send(self.http_client.delete(self.record_url(CLIENTS, id)))
            .await
    }

    #[tracing::instrument(name = "List contact submissions", skip(self))]
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, ApiError> {
        self.send(self.http_client.get(self.url(CONTACTS))).await
    }

    #[tracing::instrument(name = "Submit contact form", skip(self, contact))]
    pub async fn submit_contact(
        &self,
        contact: &NewContact,
    ) -> Result<Acknowledgement, ApiError> {
        self.send(self.http_client.post(self.url(CONTACTS)).json(contact))
            .await
    }

    #[tracing::instrument(name = "Delete contact submission", skip(self))]
    pub async fn delete_contact(&self, id: &str) -> Result<Acknowledgement, ApiError> {
        self.send(self.http_client.delete(self.record_url(CONTACTS, id)))
            .await
    }

    #[tracing::instrument(name = "List newsletter subscribers", skip(self))]
    pub async fn list_subscribers(&self) -> Result<Vec<Subscriber>, ApiError> {
        self.send(self.http_client.get(self.url(NEWSLETTERS))).await
    }

    #[tracing::instrument(name = "Subscribe to newsletter", skip(self, email), fields(email = %email))]
    pub async fn subscribe_newsletter(
        &self,
        email: SubscriberEmail,
    ) -> Result<Acknowledgement, ApiError> {
        let body = NewSubscriber { email };
        self.send(self.http_client.post(self.url(NEWSLETTERS)).json(&body))
            .await
    }

    #[tracing::instrument(name = "Delete newsletter subscriber", skip(self))]
    pub async fn delete_subscriber(&self, id: &str) -> Result<Acknowledgement, ApiError> {
        self.send(self.http_client.delete(self.record_url(NEWSLETTERS, id)))
            .await
    }

    #[tracing::instrument(name = "Check backend health", skip(self))]
    pub async fn health(&self) -> Result<BackendHealth, ApiError> {
        self.send(self.http_client.get(self.url("/health"))).await
    }

    fn url(&self, collection: &str) -> String {
        format!("{}{}", self.base_url, collection)
    }

    fn record_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            collection,
            urlencoding::encode(id)
        )
    }

    async fn send_upload<T: DeserializeOwned>(
        &self,
        method: Method,
        url: String,
        form: UploadForm,
    ) -> Result<T, ApiError> {
        let request = self.http_client.request(method, url);
        let request = match self.attach_body(request, form).await {
            Ok(request) => request,
            Err(e) => return Err(log_failure(e)),
        };
        self.send(request).await
    }

    async fn attach_body(
        &self,
        request: RequestBuilder,
        form: UploadForm,
    ) -> Result<RequestBuilder, ApiError> {
        let request = match encode(form, self.transport).await? {
            EncodedBody::Multipart(form) => request.multipart(form.into_multipart().await?),
            EncodedBody::Json(object) => request.json(&object),
        };
        Ok(request)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        self.execute(request).await.map_err(log_failure)
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await?;

        let payload = interpret_response(status, content_type.as_deref(), &body)?;
        serde_json::from_value(payload).map_err(|e| ApiError::MalformedResponse {
            status,
            message: format!("Unexpected response from the backend: {}", e),
        })
    }
}

fn log_failure(error: ApiError) -> ApiError {
    tracing::error!(
        error.cause_chain = ?error,
        error.message = %error,
        "Backend call failed"
    );
    error
}

/// Turn a raw backend response into its JSON payload or a user-facing error.
///
/// Bodies that do not parse as JSON are reported with the HTTP status and the
/// first 100 characters of the text, whatever content type was declared.
pub fn interpret_response(
    status: StatusCode,
    content_type: Option<&str>,
    body: &str,
) -> Result<Value, ApiError> {
    let declared_json = content_type.map_or(false, |value| value.contains("application/json"));
    let payload = serde_json::from_str::<Value>(body).map_err(|_| {
        let snippet: String = body.graphemes(true).take(SNIPPET_LENGTH).collect();
        let kind = if declared_json {
            "malformed JSON"
        } else {
            "non-JSON response"
        };
        format!(
            "Server returned {} (HTTP {}): {}",
            kind,
            status.as_u16(),
            snippet
        )
    });

    match payload {
        Ok(value) if status.is_success() => Ok(value),
        Err(message) if status.is_success() => Err(ApiError::MalformedResponse { status, message }),
        Ok(value) => {
            let message = value
                .get("error")
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty())
                .unwrap_or(GENERIC_FAILURE)
                .to_string();
            Err(ApiError::Server { status, message })
        }
        Err(message) => Err(ApiError::Server { status, message }),
    }
}
