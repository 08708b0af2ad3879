use std::sync::Arc;

use mindful_portal::{AppConfig, AppState, Navigator, create_router};
use serde_json::Value;
use tokio::net::TcpListener;
use uuid::Uuid;

#[derive(Debug)]
pub struct TestApp {
    pub address: String,
}

async fn spawn_app() -> TestApp {
    let state = AppState {
        navigator: Arc::new(Navigator::portal().expect("valid portal routes")),
        config: AppConfig::default(),
    };
    let router = create_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestApp { address }
}

async fn get_json(app: &TestApp, query: &str, headers: &[(&str, String)]) -> Value {
    let client = reqwest::Client::new();
    let mut request = client.get(format!("{}/navigation?{}", app.address, query));
    for (name, value) in headers {
        request = request.header(*name, value);
    }

    let response = request.send().await.expect("req fail");
    assert!(response.status().is_success());
    response.json().await.expect("json body")
}

fn therapist_headers() -> Vec<(&'static str, String)> {
    vec![
        ("x-user-id", Uuid::new_v4().to_string()),
        ("x-user-role", "therapist".to_string()),
    ]
}

#[tokio::test]
async fn test_health_check() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("req fail");

    assert!(response.status().is_success());
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_anonymous_landing_page() {
    let app = spawn_app().await;
    let body = get_json(&app, "path=/", &[]).await;

    assert_eq!(body["path"], "/");
    assert_eq!(body["classification"], "hidden");
    assert_eq!(body["layout"]["chrome"], false);
    assert_eq!(body["outcome"]["kind"], "render");
    assert_eq!(body["outcome"]["page"], "landing");
    assert!(body.get("toast_placement").is_none());
}

#[tokio::test]
async fn test_protected_page_redirects_anonymous_visitor() {
    let app = spawn_app().await;
    let body = get_json(&app, "path=/therapist/patients", &[]).await;

    assert_eq!(body["outcome"]["kind"], "redirect");
    assert_eq!(body["outcome"]["to"], "/therapist-signin");
    assert_eq!(body["redirected_from"], serde_json::json!([]));
}

#[tokio::test]
async fn test_follow_resolves_redirect_chain() {
    let app = spawn_app().await;
    let body = get_json(&app, "path=/signin&follow=true", &therapist_headers()).await;

    assert_eq!(body["path"], "/therapist/patients");
    assert_eq!(body["outcome"]["page"], "therapist_patients");
    assert_eq!(body["layout"]["navbar"], "therapist");
    assert_eq!(body["redirected_from"], serde_json::json!(["/signin"]));
}

#[tokio::test]
async fn test_unknown_page_is_not_found() {
    let app = spawn_app().await;
    let body = get_json(&app, "path=/unknown-page", &therapist_headers()).await;

    assert_eq!(body["classification"], "not_found");
    assert_eq!(body["layout"]["not_found_view"], true);
    assert_eq!(body["outcome"]["kind"], "not_found");
}

#[tokio::test]
async fn test_toast_placement_follows_viewport() {
    let app = spawn_app().await;
    let narrow = get_json(&app, "path=/home&viewport_width=375", &[]).await;
    let wide = get_json(&app, "path=/home&viewport_width=1280", &[]).await;

    assert_eq!(narrow["toast_placement"], "top-center");
    assert_eq!(wide["toast_placement"], "top-right");
}

#[tokio::test]
async fn test_missing_path_is_bad_request() {
    let app = spawn_app().await;
    let response = reqwest::Client::new()
        .get(format!("{}/navigation", app.address))
        .send()
        .await
        .expect("req fail");

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_route_table_endpoint() {
    let app = spawn_app().await;
    let body: Value = reqwest::Client::new()
        .get(format!("{}/routes", app.address))
        .send()
        .await
        .expect("req fail")
        .json()
        .await
        .expect("json body");

    let hidden = body["table"]["hidden_chrome_routes"].as_array().unwrap();
    assert!(hidden.contains(&Value::from("/")));
    assert_eq!(
        body["table"]["dynamic_prefixes"],
        serde_json::json!(["/journal/", "/therapist/"])
    );

    let groups = body["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0]["access"]["kind"], "public");
    assert_eq!(groups[1]["access"]["kind"], "protected");
    assert_eq!(groups[1]["access"]["redirect_path"], "/signin");
    assert_eq!(groups[2]["access"]["allowed_roles"], serde_json::json!(["therapist"]));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = spawn_app().await;
    let body: Value = reqwest::Client::new()
        .get(format!("{}/api-docs/openapi.json", app.address))
        .send()
        .await
        .expect("req fail")
        .json()
        .await
        .expect("json body");

    assert!(body["paths"].get("/navigation").is_some());
    assert!(body["paths"].get("/routes").is_some());
}
