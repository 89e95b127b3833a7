use crate::helpers::{assert_is_redirect_to, png_part, project_json, spawn_app, spawn_app_with};
use frontdesk::configuration::Deployment;
use serde_json::json;
use wiremock::matchers::{any, header_regex, method, path};
use wiremock::{Mock, Request, ResponseTemplate};

fn project_form() -> reqwest::multipart::Form {
    reqwest::multipart::Form::new()
        .text("name", "Villa")
        .text("description", "Sea-facing villa")
}

#[tokio::test]
async fn admin_root_redirects_to_projects() {
    let app = spawn_app().await;

    let response = app.get("/admin").await;

    assert_is_redirect_to(&response, "/admin/projects");
}

#[tokio::test]
async fn projects_tab_renders_one_card_per_project() {
    let app = spawn_app().await;
    app.backend_lists(
        "/projects",
        json!([project_json("a", "Alpha"), project_json("b", "Beta"), project_json("c", "Gamma")]),
    )
    .await;

    let html = app.get_html("/admin/projects").await;

    assert_eq!(html.matches(r#"class="item-card""#).count(), 3);
    assert!(html.contains(r#"action="/admin/projects/b/edit""#));
    assert!(!html.contains(r#"id="project-form""#));
}

#[tokio::test]
async fn empty_project_list_shows_the_placeholder() {
    let app = spawn_app().await;
    app.backend_lists("/projects", json!([])).await;

    let html = app.get_html("/admin/projects").await;

    assert!(html.contains("No projects available"));
    assert_eq!(html.matches(r#"class="item-card""#).count(), 0);
}

#[tokio::test]
async fn creating_a_project_uploads_multipart_and_flashes_success() {
    let app = spawn_app().await;
    app.backend_lists("/projects", json!([])).await;
    Mock::given(method("POST"))
        .and(path("/api/projects"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .respond_with(ResponseTemplate::new(201).set_body_json(project_json("n", "Villa")))
        .expect(1)
        .mount(&app.backend)
        .await;

    assert_is_redirect_to(&app.press("/admin/projects/add").await, "/admin/projects");
    let html = app.get_html("/admin/projects").await;
    assert!(html.contains("Add Project"));

    let response = app
        .post_multipart("/admin/projects", project_form().part("image", png_part()))
        .await;
    assert_is_redirect_to(&response, "/admin/projects");

    let html = app.get_html("/admin/projects").await;
    assert!(html.contains("Project created successfully!"));
    // A successful submit hides the form again.
    assert!(!html.contains(r#"id="project-form""#));

    let received = app.backend.received_requests().await.unwrap();
    let upload = received
        .iter()
        .find(|r| !r.body.is_empty())
        .unwrap();
    let body = String::from_utf8_lossy(&upload.body);
    assert!(body.contains("Sea-facing villa"));
    assert!(body.contains(r#"filename="villa.png""#));
}

#[tokio::test]
async fn serverless_deployments_inline_the_image_as_a_data_url() {
    let app = spawn_app_with(Deployment::Serverless).await;
    app.backend_lists("/projects", json!([])).await;
    Mock::given(method("POST"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(201).set_body_json(project_json("n", "Villa")))
        .expect(1)
        .mount(&app.backend)
        .await;

    app.press("/admin/projects/add").await;
    app.post_multipart("/admin/projects", project_form().part("image", png_part()))
        .await;

    let received = app.backend.received_requests().await.unwrap();
    let upload: &Request = received
        .iter()
        .find(|r| !r.body.is_empty())
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&upload.body).unwrap();
    assert_eq!(
        body,
        json!({
            "name": "Villa",
            "description": "Sea-facing villa",
            "image": "data:image/png;base64,aGVsbG8="
        })
    );
}

#[tokio::test]
async fn adding_without_an_image_is_refused_before_calling_the_backend() {
    let app = spawn_app().await;
    app.backend_lists("/projects", json!([])).await;
    Mock::given(method("POST"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.backend)
        .await;

    app.press("/admin/projects/add").await;
    app.post_multipart("/admin/projects", project_form()).await;

    let html = app.get_html("/admin/projects").await;
    assert!(html.contains("Error: Image is required"));
    // A failed submit keeps the form open.
    assert!(html.contains(r#"id="project-form""#));
}

#[tokio::test]
async fn a_second_edit_replaces_the_first() {
    let app = spawn_app().await;
    app.backend_lists(
        "/projects",
        json!([project_json("a", "Alpha"), project_json("b", "Beta")]),
    )
    .await;
    Mock::given(method("PUT"))
        .and(path("/api/projects/b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_json("b", "Villa")))
        .expect(1)
        .mount(&app.backend)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/projects/a"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.backend)
        .await;

    app.press("/admin/projects/a/edit").await;
    app.press("/admin/projects/b/edit").await;

    let html = app.get_html("/admin/projects").await;
    assert!(html.contains("Edit Project"));
    assert!(html.contains(r#"value="Beta""#));

    app.post_multipart("/admin/projects", project_form()).await;

    let html = app.get_html("/admin/projects").await;
    assert!(html.contains("Project updated successfully!"));
}

#[tokio::test]
async fn editing_a_vanished_record_shows_no_form() {
    let app = spawn_app().await;
    app.backend_lists("/projects", json!([project_json("a", "Alpha")])).await;

    app.press("/admin/projects/gone/edit").await;
    let html = app.get_html("/admin/projects").await;

    assert!(!html.contains(r#"id="project-form""#));
}

#[tokio::test]
async fn cancel_hides_the_form() {
    let app = spawn_app().await;
    app.backend_lists("/projects", json!([])).await;

    app.press("/admin/projects/add").await;
    let response = app.press("/admin/projects/cancel").await;
    assert_is_redirect_to(&response, "/admin/projects");

    let html = app.get_html("/admin/projects").await;
    assert!(!html.contains(r#"id="project-form""#));
}

#[tokio::test]
async fn backend_errors_are_flashed_verbatim() {
    let app = spawn_app().await;
    app.backend_lists("/projects", json!([])).await;
    Mock::given(method("POST"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "Name too long"})))
        .expect(1)
        .mount(&app.backend)
        .await;

    app.press("/admin/projects/add").await;
    app.post_multipart("/admin/projects", project_form().part("image", png_part()))
        .await;

    let html = app.get_html("/admin/projects").await;
    assert!(html.contains(r#"<p class="alert alert-danger">Error: Name too long</p>"#));
    // The form comes back with what was typed, once.
    assert!(html.contains(r#"name="name" value="Villa" required>"#));
    assert!(html.contains("Sea-facing villa</textarea>"));

    let html = app.get_html("/admin/projects").await;
    assert!(html.contains(r#"name="name" value="" required>"#));
}

#[tokio::test]
async fn a_message_only_acknowledgement_counts_as_success() {
    let app = spawn_app().await;
    app.backend_lists("/projects", json!([])).await;
    Mock::given(method("POST"))
        .and(path("/api/projects"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"message": "Project created"})),
        )
        .expect(1)
        .mount(&app.backend)
        .await;

    app.press("/admin/projects/add").await;
    app.post_multipart("/admin/projects", project_form().part("image", png_part()))
        .await;

    let html = app.get_html("/admin/projects").await;
    assert!(html.contains("Project created successfully!"));
    assert!(!html.contains("alert-danger"));
    assert!(!html.contains(r#"id="project-form""#));
}

#[tokio::test]
async fn list_failures_are_shown_in_place_of_the_cards() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&app.backend)
        .await;

    let html = app.get_html("/admin/projects").await;

    assert!(html.contains("Error: Server returned non-JSON response (HTTP 502): Bad Gateway"));
}
