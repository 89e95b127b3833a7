use crate::helpers::{assert_is_redirect_to, project_json, spawn_app};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn delete_asks_for_confirmation_first() {
    let app = spawn_app().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.backend)
        .await;

    let html = app.get_html("/admin/projects/a/delete").await;

    assert!(html.contains("Are you sure you want to delete this project?"));
}

#[tokio::test]
async fn declining_the_confirmation_deletes_nothing() {
    let app = spawn_app().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.backend)
        .await;

    let response = app
        .post_form("/admin/newsletters/n1/delete", &json!({"confirm": "no"}))
        .await;
    assert_is_redirect_to(&response, "/admin/newsletters");

    let response = app.press("/admin/contacts/c1/delete").await;
    assert_is_redirect_to(&response, "/admin/contacts");
}

#[tokio::test]
async fn confirmed_delete_calls_the_backend_once() {
    let app = spawn_app().await;
    app.backend_lists("/projects", json!([project_json("b", "Beta")])).await;
    Mock::given(method("DELETE"))
        .and(path("/api/projects/a"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Project deleted"})),
        )
        .expect(1)
        .mount(&app.backend)
        .await;

    let response = app
        .post_form("/admin/projects/a/delete", &json!({"confirm": "yes"}))
        .await;
    assert_is_redirect_to(&response, "/admin/projects");

    let html = app.get_html("/admin/projects").await;
    assert!(html.contains("Project deleted successfully!"));
    assert_eq!(html.matches(r#"class="item-card""#).count(), 1);
}

#[tokio::test]
async fn each_tab_deletes_from_its_own_collection() {
    let app = spawn_app().await;
    for collection in ["clients", "contacts", "newsletters"] {
        Mock::given(method("DELETE"))
            .and(path(format!("/api/{}/x1", collection)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&app.backend)
            .await;
    }

    for tab in ["clients", "contacts", "newsletters"] {
        app.post_form(&format!("/admin/{}/x1/delete", tab), &json!({"confirm": "yes"}))
            .await;
    }
}

#[tokio::test]
async fn failed_deletes_are_flashed() {
    let app = spawn_app().await;
    app.backend_lists("/clients", json!([])).await;
    Mock::given(method("DELETE"))
        .and(path("/api/clients/x1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Client not found"})))
        .expect(1)
        .mount(&app.backend)
        .await;

    app.post_form("/admin/clients/x1/delete", &json!({"confirm": "yes"}))
        .await;

    let html = app.get_html("/admin/clients").await;
    assert!(html.contains("Error: Client not found"));
}
