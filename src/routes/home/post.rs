use actix_web::{web, HttpResponse};

use crate::api_client::ApiClient;
use crate::domain::{NewContact, SubscriberEmail};
use crate::routes::SubmitError;
use crate::session_state::{Draft, Notice, PublicForm, TypedSession};
use crate::utils::{e500, see_other};

#[derive(serde::Deserialize)]
pub struct ContactFormData {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    mobile: String,
    #[serde(default)]
    city: String,
}

impl ContactFormData {
    fn draft(&self) -> Draft {
        Draft::new([
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("mobile", self.mobile.as_str()),
            ("city", self.city.as_str()),
        ])
    }
}

impl TryFrom<ContactFormData> for NewContact {
    type Error = String;

    fn try_from(form: ContactFormData) -> Result<Self, Self::Error> {
        NewContact::parse(form.name, form.email, form.mobile, form.city)
    }
}

#[derive(serde::Deserialize)]
pub struct NewsletterFormData {
    #[serde(default)]
    email: String,
}

#[tracing::instrument(
    name = "Submit contact form",
    skip(form, api_client, session),
    fields(contact_email = %form.email, contact_city = %form.city)
)]
pub async fn submit_contact(
    form: web::Form<ContactFormData>,
    api_client: web::Data<ApiClient>,
    session: TypedSession,
) -> Result<HttpResponse, actix_web::Error> {
    let draft = form.draft();
    let notice = match send_contact(form.0, &api_client).await {
        Ok(()) => Notice::success("Thank you! Your message has been submitted successfully."),
        Err(e) => Notice::error(format!("Error: {}", e), draft),
    };
    session
        .set_notice(PublicForm::Contact, notice)
        .map_err(e500)?;
    Ok(see_other("/#contact"))
}

async fn send_contact(form: ContactFormData, api_client: &ApiClient) -> Result<(), SubmitError> {
    let contact: NewContact = form.try_into().map_err(SubmitError::ValidationError)?;
    api_client.submit_contact(&contact).await?;
    Ok(())
}

#[tracing::instrument(
    name = "Subscribe to newsletter",
    skip(form, api_client, session),
    fields(subscriber_email = %form.email)
)]
pub async fn subscribe_newsletter(
    form: web::Form<NewsletterFormData>,
    api_client: web::Data<ApiClient>,
    session: TypedSession,
) -> Result<HttpResponse, actix_web::Error> {
    let draft = Draft::new([("email", form.email.as_str())]);
    let notice = match send_subscription(form.0, &api_client).await {
        Ok(()) => Notice::success("Thank you for subscribing!"),
        Err(e) => Notice::error(format!("Error: {}", e), draft),
    };
    session
        .set_notice(PublicForm::Newsletter, notice)
        .map_err(e500)?;
    Ok(see_other("/#newsletter"))
}

async fn send_subscription(
    form: NewsletterFormData,
    api_client: &ApiClient,
) -> Result<(), SubmitError> {
    let email = SubscriberEmail::parse(form.email).map_err(SubmitError::ValidationError)?;
    api_client.subscribe_newsletter(email).await?;
    Ok(())
}
