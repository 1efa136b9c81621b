//! End-to-end HTTP tests: real router on an ephemeral port, mock provider.

use earmark_server::{build_router, state::AppState};
use earmark_settings::Settings;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Spawn the service against the given provider base URL, returning its
/// local address.
async fn spawn_app(api_key: Option<&str>, provider_url: &str) -> String {
    let settings = Settings {
        deepgram_api_key: api_key.map(str::to_owned),
        deepgram_base_url: provider_url.to_owned(),
        language: "zh-CN".into(),
        max_upload_bytes: 10 * 1024 * 1024,
        port: 0,
    };
    let router = build_router(AppState::new(settings));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    }));
    format!("http://{addr}")
}

/// Mock a successful provider answer with the given transcript.
async fn mock_provider(server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path("/v1/listen"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn upload_form(mime: &str, file_name: &str) -> reqwest::multipart::Form {
    let part = reqwest::multipart::Part::bytes(b"fake-audio".to_vec())
        .file_name(file_name.to_owned())
        .mime_str(mime)
        .unwrap();
    reqwest::multipart::Form::new().part("file", part)
}

async fn post_upload(app: &str, form: reqwest::multipart::Form) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{app}/transcription/audio"))
        .multipart(form)
        .send()
        .await
        .unwrap()
}

const PLACEHOLDER: &str = "内容与前端技术无关。";

#[tokio::test]
async fn health_responds_ok() {
    let provider = MockServer::start().await;
    let app = spawn_app(Some("test-key"), &provider.uri()).await;

    let resp = reqwest::get(format!("{app}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn unsupported_mime_is_rejected_before_provider_call() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&provider)
        .await;
    let app = spawn_app(Some("test-key"), &provider.uri()).await;

    let resp = post_upload(&app, upload_form("application/pdf", "slides.pdf")).await;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(
        body["error"].as_str().unwrap().contains("application/pdf"),
        "error should name the rejected type: {body}"
    );
    provider.verify().await;
}

#[tokio::test]
async fn missing_file_part_is_rejected() {
    let provider = MockServer::start().await;
    let app = spawn_app(Some("test-key"), &provider.uri()).await;

    let form = reqwest::multipart::Form::new().text("options", "{}");
    let resp = post_upload(&app, form).await;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("no audio file"));
}

#[tokio::test]
async fn relevant_audio_returns_full_analysis() {
    let provider = MockServer::start().await;
    mock_provider(
        &provider,
        json!({
            "results": {
                "channels": [{"alternatives": [{
                    "transcript": "We used React and TypeScript for this component"
                }]}],
                "summary": {"short": "a frontend talk"},
                "topics": {"topics": [
                    {"topic": "cooking recipes", "confidence_score": 0.4},
                    {"topic": "react hooks patterns", "confidence_score": 0.9}
                ]}
            }
        }),
    )
    .await;
    let app = spawn_app(Some("test-key"), &provider.uri()).await;

    let resp = post_upload(&app, upload_form("audio/mpeg", "talk.mp3")).await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();

    assert_eq!(body["fileName"], "talk.mp3");
    assert_eq!(body["mimeType"], "audio/mpeg");
    assert_eq!(body["isFrontendRelated"], true);
    assert_eq!(
        body["transcript"],
        "We used React and TypeScript for this component"
    );
    assert_eq!(body["summary"], "a frontend talk");
    let keywords: Vec<&str> = body["frontendKeywordsDetected"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert!(keywords.contains(&"react"));
    assert!(keywords.contains(&"typescript"));
    // Topic filter drops the non-frontend topic
    assert_eq!(
        body["frontendTopics"],
        json!(["react hooks patterns"])
    );
    assert!(body["relevanceScore"].as_u64().unwrap() > 0);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn irrelevant_audio_is_masked_with_placeholder() {
    let provider = MockServer::start().await;
    mock_provider(
        &provider,
        json!({
            "results": {
                "channels": [{"alternatives": [{
                    "transcript": "今天我们聊聊周末去哪里爬山"
                }]}]
            }
        }),
    )
    .await;
    let app = spawn_app(Some("test-key"), &provider.uri()).await;

    let resp = post_upload(&app, upload_form("audio/wav", "hike.wav")).await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();

    assert_eq!(body["isFrontendRelated"], false);
    assert_eq!(body["transcript"], PLACEHOLDER);
    assert_eq!(body["summary"], PLACEHOLDER);
    assert_eq!(body["frontendKeywordsDetected"], json!([]));
    // The score still reflects the true computed value
    assert_eq!(body["relevanceScore"], 0);
}

#[tokio::test]
async fn force_detection_returns_irrelevant_transcript() {
    let provider = MockServer::start().await;
    mock_provider(
        &provider,
        json!({
            "results": {
                "channels": [{"alternatives": [{
                    "transcript": "今天我们聊聊周末去哪里爬山"
                }]}]
            }
        }),
    )
    .await;
    let app = spawn_app(Some("test-key"), &provider.uri()).await;

    let form = upload_form("audio/wav", "hike.wav").text("options", r#"{"forceDetection": true}"#);
    let resp = post_upload(&app, form).await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();

    assert_eq!(body["isFrontendRelated"], false);
    assert_eq!(body["transcript"], "今天我们聊聊周末去哪里爬山");
}

#[tokio::test]
async fn invalid_options_json_is_rejected() {
    let provider = MockServer::start().await;
    let app = spawn_app(Some("test-key"), &provider.uri()).await;

    let form = upload_form("audio/wav", "clip.wav").text("options", "not-json");
    let resp = post_upload(&app, form).await;
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn missing_api_key_yields_503() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&provider)
        .await;
    let app = spawn_app(None, &provider.uri()).await;

    let resp = post_upload(&app, upload_form("audio/wav", "clip.wav")).await;
    assert_eq!(resp.status(), 503);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("not configured"));
    provider.verify().await;
}

#[tokio::test]
async fn provider_failure_yields_502_with_message() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/listen"))
        .respond_with(ResponseTemplate::new(500).set_body_string("ASR backend exploded"))
        .mount(&provider)
        .await;
    let app = spawn_app(Some("test-key"), &provider.uri()).await;

    let resp = post_upload(&app, upload_form("audio/flac", "clip.flac")).await;
    assert_eq!(resp.status(), 502);
    let body: Value = resp.json().await.unwrap();
    assert!(
        body["error"].as_str().unwrap().contains("ASR backend exploded"),
        "provider message should be embedded: {body}"
    );
}

#[tokio::test]
async fn empty_provider_result_is_masked_not_crashed() {
    let provider = MockServer::start().await;
    mock_provider(&provider, json!({"results": {"channels": []}})).await;
    let app = spawn_app(Some("test-key"), &provider.uri()).await;

    let resp = post_upload(&app, upload_form("audio/ogg", "silence.ogg")).await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["isFrontendRelated"], false);
    assert_eq!(body["relevanceScore"], 0);
    assert_eq!(body["transcript"], PLACEHOLDER);
}
