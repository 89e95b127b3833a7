use crate::helpers::{assert_is_redirect_to, client_json, png_part, spawn_app};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn clients_tab_shows_designations() {
    let app = spawn_app().await;
    app.backend_lists("/clients", json!([client_json("1", "Rohan"), client_json("2", "Meera")]))
        .await;

    let html = app.get_html("/admin/clients").await;

    assert_eq!(html.matches(r#"class="item-card""#).count(), 2);
    assert_eq!(html.matches(r#"<p class="designation">CEO</p>"#).count(), 2);
}

#[tokio::test]
async fn creating_a_client_sends_the_designation() {
    let app = spawn_app().await;
    app.backend_lists("/clients", json!([])).await;
    Mock::given(method("POST"))
        .and(path("/api/clients"))
        .respond_with(ResponseTemplate::new(201).set_body_json(client_json("n", "Rohan")))
        .expect(1)
        .mount(&app.backend)
        .await;

    app.press("/admin/clients/add").await;
    let form = reqwest::multipart::Form::new()
        .text("name", "Rohan")
        .text("description", "Great work")
        .text("designation", "Architect")
        .part("image", png_part());
    let response = app.post_multipart("/admin/clients", form).await;
    assert_is_redirect_to(&response, "/admin/clients");

    let html = app.get_html("/admin/clients").await;
    assert!(html.contains("Client created successfully!"));

    let received = app.backend.received_requests().await.unwrap();
    let upload = received
        .iter()
        .find(|r| !r.body.is_empty())
        .unwrap();
    assert!(String::from_utf8_lossy(&upload.body).contains("Architect"));
}

#[tokio::test]
async fn editing_a_client_prefills_the_form() {
    let app = spawn_app().await;
    app.backend_lists("/clients", json!([client_json("1", "Rohan")])).await;

    app.press("/admin/clients/1/edit").await;
    let html = app.get_html("/admin/clients").await;

    assert!(html.contains("Edit Client"));
    assert!(html.contains(r#"id="client-designation" name="designation" value="CEO""#));
    assert!(html.contains("Rohan loved working with us</textarea>"));
}

#[tokio::test]
async fn project_and_client_forms_are_independent() {
    let app = spawn_app().await;
    app.backend_lists("/clients", json!([client_json("1", "Rohan")])).await;
    app.backend_lists("/projects", json!([])).await;

    app.press("/admin/clients/1/edit").await;
    app.press("/admin/projects/add").await;

    let html = app.get_html("/admin/clients").await;
    assert!(html.contains("Edit Client"));
    let html = app.get_html("/admin/projects").await;
    assert!(html.contains("Add Project"));
}

#[tokio::test]
async fn unknown_forms_are_not_found() {
    let app = spawn_app().await;

    let response = app.press("/admin/contacts/add").await;

    assert_eq!(response.status().as_u16(), 404);
}
