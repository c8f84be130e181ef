use capsense_client::feedback::{
    FAILED_STATUS, MISSING_FIELDS_STATUS, SAVED_STATUS, SERVER_ERROR_STATUS,
};
use capsense_client::render::render_dashboard;
use capsense_client::types::{AnalysisResult, Classification, FeedbackVerdict};
use capsense_client::{
    submit_feedback, AnalysisWorkspace, CapsenseApi, CapsenseClient, CapsenseError,
    DashboardLoader,
};
use mockito::Matcher;
use serde_json::json;

const ANALYSIS_BODY: &str = r#"{
    "emotion": "sadness",
    "sarcasm": "No",
    "aspects": "Product quality, Customer service",
    "classification": "Negative",
    "response": "We're sorry your order arrived damaged.",
    "originalText": "My order arrived damaged",
    "f1Score": 0.77
}"#;

// Nothing listens on port 1, so connections are refused immediately.
const UNREACHABLE: &str = "http://127.0.0.1:1";

async fn workspace_with_one_result(
    server: &mut mockito::ServerGuard,
    client: &CapsenseClient,
) -> AnalysisWorkspace {
    let mock = server
        .mock("POST", "/batch-analyze")
        .match_body(Matcher::Json(json!({"text": "My order arrived damaged"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ANALYSIS_BODY)
        .create_async()
        .await;

    let mut workspace = AnalysisWorkspace::new();
    workspace
        .analyze(client, "My order arrived damaged")
        .await
        .unwrap();
    mock.assert_async().await;
    workspace
}

#[tokio::test]
async fn test_dashboard_rows_replace_in_server_order() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/dashboard")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                {
                    "customer_text": "newest",
                    "sentiment": "positive",
                    "response_text": "thanks",
                    "empathy_score": 0.9,
                    "sarcasm_detected": false,
                    "emotion": "joy",
                    "created_at": "2025-03-14 09:26:53.589000"
                },
                {
                    "customer_text": "older",
                    "sentiment": "negative",
                    "response_text": "sorry",
                    "empathy_score": null,
                    "sarcasm_detected": true,
                    "emotion": "anger",
                    "created_at": "2025-03-13 08:00:00"
                }
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let client = CapsenseClient::new(server.url()).unwrap();
    let mut dashboard = DashboardLoader::new();
    let rows = dashboard.load(&client).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].customer_text, "newest");
    assert_eq!(rows[1].customer_text, "older");
    assert!(rows[1].is_sarcastic());
    assert!(dashboard.is_visible());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_dashboard_accepts_rows_written_by_feedback() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/dashboard")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                {
                    "customer_text": "late again",
                    "sentiment": null,
                    "response_text": "sorry",
                    "empathy_score": null,
                    "sarcasm_detected": null,
                    "emotion": null,
                    "created_at": "2025-03-14 09:26:53.589000"
                },
                {
                    "customer_text": "great support",
                    "sentiment": "positive",
                    "response_text": "thank you",
                    "empathy_score": 0.8,
                    "sarcasm_detected": false,
                    "emotion": "joy",
                    "created_at": "2025-03-13 08:00:00"
                }
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let client = CapsenseClient::new(server.url()).unwrap();
    let mut dashboard = DashboardLoader::new();
    let rows = dashboard.load(&client).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].customer_text, "late again");
    assert_eq!(rows[0].sentiment, None);
    assert_eq!(rows[0].emotion, None);
    assert!(!rows[0].is_sarcastic());
    assert_eq!(rows[1].sentiment.as_deref(), Some("positive"));
    assert_eq!(dashboard.error(), None);

    let table = render_dashboard(&dashboard);
    assert!(table.contains("late again..."));
    assert!(table.contains("great support..."));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_dashboard_service_unavailable() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/dashboard")
        .with_status(503)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "Database connection not available"}"#)
        .create_async()
        .await;

    let client = CapsenseClient::new(server.url()).unwrap();
    let mut dashboard = DashboardLoader::new();
    let err = dashboard.load(&client).await.unwrap_err();

    assert!(matches!(err, CapsenseError::Api { status: 503, .. }));
    assert_eq!(err.server_message(), Some("Database connection not available"));
    assert_eq!(
        dashboard.error(),
        Some("Failed to load dashboard data. Please try again.")
    );
    assert!(dashboard.rows().is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_dashboard_unreachable_server() {
    let client = CapsenseClient::new(UNREACHABLE).unwrap();
    let mut dashboard = DashboardLoader::new();

    let err = dashboard.load(&client).await.unwrap_err();

    assert!(err.is_transport());
    assert!(dashboard.error().is_some());
}

#[tokio::test]
async fn test_analyze_parses_batch_analyze_response() {
    let mut server = mockito::Server::new_async().await;
    let client = CapsenseClient::new(server.url()).unwrap();

    let workspace = workspace_with_one_result(&mut server, &client).await;

    let current = workspace.current().unwrap();
    assert_eq!(current.classification, Classification::Negative);
    assert_eq!(current.original_text, "My order arrived damaged");
}

#[tokio::test]
async fn test_approve_posts_selected_result() {
    let mut server = mockito::Server::new_async().await;
    let client = CapsenseClient::new(server.url()).unwrap();
    let mut workspace = workspace_with_one_result(&mut server, &client).await;

    let mock = server
        .mock("POST", "/api/feedback")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "original_text": "My order arrived damaged",
            "response_text": "We're sorry your order arrived damaged.",
            "feedback": "approved"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"message": "Feedback (approved) recorded successfully", "status": "success"}"#,
        )
        .create_async()
        .await;

    let status = workspace.approve(&client).await.to_string();

    assert_eq!(status, SAVED_STATUS);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_success_with_non_json_body() {
    let mut server = mockito::Server::new_async().await;
    let client = CapsenseClient::new(server.url()).unwrap();
    let mut workspace = workspace_with_one_result(&mut server, &client).await;

    let _mock = server
        .mock("POST", "/api/feedback")
        .with_status(204)
        .create_async()
        .await;

    assert_eq!(workspace.reject(&client).await, SAVED_STATUS);
}

#[tokio::test]
async fn test_bad_request_surfaces_server_error() {
    let mut server = mockito::Server::new_async().await;
    let client = CapsenseClient::new(server.url()).unwrap();
    let mut workspace = workspace_with_one_result(&mut server, &client).await;

    let _mock = server
        .mock("POST", "/api/feedback")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "bad"}"#)
        .create_async()
        .await;

    assert_eq!(workspace.approve(&client).await, "bad");
}

#[tokio::test]
async fn test_internal_error_without_json_is_generic() {
    let mut server = mockito::Server::new_async().await;
    let client = CapsenseClient::new(server.url()).unwrap();
    let mut workspace = workspace_with_one_result(&mut server, &client).await;

    let _mock = server
        .mock("POST", "/api/feedback")
        .with_status(500)
        .with_body("<html>Internal Server Error</html>")
        .create_async()
        .await;

    assert_eq!(workspace.approve(&client).await, FAILED_STATUS);
}

#[tokio::test]
async fn test_unreachable_server_status() {
    let client = CapsenseClient::new(UNREACHABLE).unwrap();
    let results: Vec<AnalysisResult> = vec![serde_json::from_str(ANALYSIS_BODY).unwrap()];

    let outcome = submit_feedback(&client, FeedbackVerdict::Approved, 0, &results).await;

    assert_eq!(outcome.status_text(), SERVER_ERROR_STATUS);
}

#[tokio::test]
async fn test_invalid_selection_makes_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/feedback")
        .expect(0)
        .create_async()
        .await;

    let client = CapsenseClient::new(server.url()).unwrap();
    let outcome = submit_feedback(&client, FeedbackVerdict::Rejected, 0, &[]).await;

    assert_eq!(outcome.status_text(), MISSING_FIELDS_STATUS);
    assert_eq!(client.base_url(), server.url());
    mock.assert_async().await;
}
