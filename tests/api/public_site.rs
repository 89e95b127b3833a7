use crate::helpers::{assert_is_redirect_to, client_json, project_json, spawn_app};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn home_page_shows_projects_and_clients_in_backend_order() {
    let app = spawn_app().await;
    app.backend_lists(
        "/projects",
        json!([project_json("2", "Beta Towers"), project_json("1", "Alpha Villas")]),
    )
    .await;
    app.backend_lists("/clients", json!([client_json("9", "Rohan")])).await;

    let html = app.get_html("/").await;

    assert_eq!(html.matches(r#"class="project-card""#).count(), 2);
    assert!(html.find("Beta Towers").unwrap() < html.find("Alpha Villas").unwrap());
    assert_eq!(html.matches(r#"class="client-card""#).count(), 1);
    assert!(html.contains(&format!(r#"src="{}/uploads/1.png""#, app.backend.uri())));
}

#[tokio::test]
async fn a_failing_section_only_replaces_its_own_cards() {
    let app = spawn_app().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "Database down"})))
        .mount(&app.backend)
        .await;
    app.backend_lists("/clients", json!([])).await;

    let html = app.get_html("/").await;

    assert!(html.contains("Failed to load projects: Database down"));
    assert!(html.contains("No clients available"));
}

#[tokio::test]
async fn contact_form_is_forwarded_and_acknowledged_once() {
    let app = spawn_app().await;
    app.backend_lists("/projects", json!([])).await;
    app.backend_lists("/clients", json!([])).await;
    Mock::given(method("POST"))
        .and(path("/api/contacts"))
        .and(body_json(json!({
            "name": "Asha",
            "email": "asha@example.com",
            "mobile": "9999999999",
            "city": "Pune"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "c1",
            "name": "Asha",
            "email": "asha@example.com",
            "mobile": "9999999999",
            "city": "Pune"
        })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let response = app
        .post_form(
            "/contact",
            &json!({
                "name": "Asha",
                "email": "asha@example.com",
                "mobile": "9999999999",
                "city": "Pune"
            }),
        )
        .await;
    assert_is_redirect_to(&response, "/#contact");

    let html = app.get_html("/").await;
    assert!(html.contains("Thank you! Your message has been submitted successfully."));

    // The notice is gone after it has been shown.
    let html = app.get_html("/").await;
    assert!(!html.contains("Thank you! Your message has been submitted successfully."));
}

#[tokio::test]
async fn invalid_contact_details_never_reach_the_backend() {
    let app = spawn_app().await;
    app.backend_lists("/projects", json!([])).await;
    app.backend_lists("/clients", json!([])).await;
    Mock::given(path("/api/contacts"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.backend)
        .await;

    app.post_form(
        "/contact",
        &json!({"name": "Asha", "email": "not-an-email", "mobile": "1", "city": "Pune"}),
    )
    .await;

    let html = app.get_html("/").await;
    assert!(html.contains("Error: not-an-email is not a valid email address"));
}

#[tokio::test]
async fn duplicate_subscription_shows_the_backend_message() {
    let app = spawn_app().await;
    app.backend_lists("/projects", json!([])).await;
    app.backend_lists("/clients", json!([])).await;
    Mock::given(method("POST"))
        .and(path("/api/newsletters"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Email already subscribed"})),
        )
        .expect(1)
        .mount(&app.backend)
        .await;

    let response = app
        .post_form("/newsletter", &json!({"email": "reader@example.com"}))
        .await;
    assert_is_redirect_to(&response, "/#newsletter");

    let html = app.get_html("/").await;
    assert!(html.contains(
        r#"<div id="newsletter-message"><p class="form-message error">Error: Email already subscribed</p></div>"#
    ));
    assert!(html.contains(r#"value="reader@example.com""#));
}

#[tokio::test]
async fn any_json_acknowledgement_completes_a_contact_submission() {
    let app = spawn_app().await;
    app.backend_lists("/projects", json!([])).await;
    app.backend_lists("/clients", json!([])).await;
    Mock::given(method("POST"))
        .and(path("/api/contacts"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "Saved"})))
        .expect(1)
        .mount(&app.backend)
        .await;

    app.post_form(
        "/contact",
        &json!({
            "name": "Asha",
            "email": "asha@example.com",
            "mobile": "9999999999",
            "city": "Pune"
        }),
    )
    .await;

    let html = app.get_html("/").await;
    assert!(html.contains("Thank you! Your message has been submitted successfully."));
    assert!(!html.contains(r#"value="Asha""#));
}

#[tokio::test]
async fn successful_subscription_is_acknowledged() {
    let app = spawn_app().await;
    app.backend_lists("/projects", json!([])).await;
    app.backend_lists("/clients", json!([])).await;
    Mock::given(method("POST"))
        .and(path("/api/newsletters"))
        .and(body_json(json!({"email": "reader@example.com"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "n1",
            "email": "reader@example.com"
        })))
        .expect(1)
        .mount(&app.backend)
        .await;

    app.post_form("/newsletter", &json!({"email": "reader@example.com"}))
        .await;

    let html = app.get_html("/").await;
    assert!(html.contains("Thank you for subscribing!"));
}
