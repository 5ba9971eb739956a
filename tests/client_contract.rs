//! Behavior tests for the request-construction contract.
//!
//! These verify WHAT the client puts on the wire: endpoint paths for both
//! data sources, request bodies, and how responses (including the backend's
//! empty 204s) are interpreted.

use cryptomate_core::{
    ApiError, DataSource, HttpMethod, HttpResponse, NNAlgorithm, NNModelStatus, ModelPatch,
    CreateModelRequest, PredictionWindow, SymbolName,
};
use cryptomate_tests::{
    model_payload, models_payload, respond_no_content, respond_ok, scripted_api, BASE_URL,
};

fn symbol(name: &str) -> SymbolName {
    SymbolName::parse(name).expect("valid test symbol")
}

// =============================================================================
// Endpoint paths
// =============================================================================

#[tokio::test]
async fn symbol_listing_targets_the_selected_data_source() {
    // Given: A client pointed at the test backend
    let (api, http) = scripted_api();
    respond_ok(&http, "[]");
    respond_ok(&http, "[]");

    // When: Symbols are listed for each data source
    api.symbols()
        .list(DataSource::Binance)
        .await
        .expect("binance listing succeeds");
    api.symbols()
        .list(DataSource::Yfinance)
        .await
        .expect("yfinance listing succeeds");

    // Then: Each request path embeds its source segment
    let requests = http.recorded_requests();
    assert_eq!(requests[0].url, format!("{BASE_URL}/binance/symbols"));
    assert_eq!(requests[1].url, format!("{BASE_URL}/yfinance/symbols"));
    assert!(requests.iter().all(|r| r.method == HttpMethod::Get));
}

#[tokio::test]
async fn upstream_refreshes_append_the_fetch_flag() {
    // Given: A client pointed at the test backend
    let (api, http) = scripted_api();
    respond_ok(&http, "[]");
    respond_ok(&http, "[]");

    // When: Symbols and bars are refreshed from upstream
    api.symbols()
        .refresh(DataSource::Binance)
        .await
        .expect("symbol refresh succeeds");
    api.bars()
        .refresh(DataSource::Yfinance, &symbol("BTC-USD"))
        .await
        .expect("bar refresh succeeds");

    // Then: Both requests carry fetch=true
    let requests = http.recorded_requests();
    assert_eq!(
        requests[0].url,
        format!("{BASE_URL}/binance/symbols?fetch=true")
    );
    assert_eq!(
        requests[1].url,
        format!("{BASE_URL}/yfinance/bars/BTC-USD?fetch=true")
    );
}

#[tokio::test]
async fn bar_listing_targets_the_symbol_path() {
    let (api, http) = scripted_api();
    respond_ok(&http, "[]");

    api.bars()
        .list(DataSource::Binance, &symbol("BTCUSDT"))
        .await
        .expect("bar listing succeeds");

    let requests = http.recorded_requests();
    assert_eq!(requests[0].url, format!("{BASE_URL}/binance/bars/BTCUSDT"));
}

// =============================================================================
// Mutation bodies
// =============================================================================

#[tokio::test]
async fn symbol_selection_issues_a_minimal_patch() {
    // Given: A backend that accepts the selection update with an empty 204
    let (api, http) = scripted_api();
    respond_no_content(&http);

    // When: A symbol is selected
    api.symbols()
        .set_selected(DataSource::Binance, &symbol("ETHUSDT"), true)
        .await
        .expect("selection persists");

    // Then: Exactly one PATCH with the selection flag as its whole body
    let requests = http.recorded_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Patch);
    assert_eq!(
        requests[0].url,
        format!("{BASE_URL}/binance/symbols/ETHUSDT")
    );
    assert_eq!(requests[0].body.as_deref(), Some(r#"{"selected":true}"#));
    assert_eq!(
        requests[0].headers.get("content-type").map(String::as_str),
        Some("application/json")
    );
}

#[tokio::test]
async fn model_creation_posts_the_full_configuration() {
    // Given: A backend that answers with the created model
    let (api, http) = scripted_api();
    http.push_response(HttpResponse::created_json(
        model_payload(7, 0).to_string(),
    ));

    // When: A sequence-to-sequence LSTM model is created
    let request = CreateModelRequest {
        symbol_name: symbol("BTCUSDT"),
        algorithm: NNAlgorithm::LstmSeq,
        prediction_window: PredictionWindow::Small,
    };
    let created = api
        .models()
        .create(DataSource::Binance, &request)
        .await
        .expect("creation succeeds");

    // Then: The POST body carries the int-coded configuration
    let requests = http.recorded_requests();
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[0].url, format!("{BASE_URL}/binance/models"));
    assert_eq!(
        requests[0].body.as_deref(),
        Some(r#"{"symbol_name":"BTCUSDT","algorithm":2,"prediction_window":1}"#)
    );

    // And: The created resource decodes into a typed model
    assert_eq!(created.id, 7);
    assert_eq!(created.status, NNModelStatus::Created);
}

#[tokio::test]
async fn training_patch_sends_only_set_fields() {
    let (api, http) = scripted_api();
    respond_no_content(&http);

    let patch = ModelPatch::status(NNModelStatus::InTraining).with_patience(60);
    api.models()
        .update(DataSource::Binance, 7, &patch)
        .await
        .expect("update succeeds");

    let requests = http.recorded_requests();
    assert_eq!(requests[0].method, HttpMethod::Patch);
    assert_eq!(requests[0].url, format!("{BASE_URL}/binance/models/7"));
    assert_eq!(
        requests[0].body.as_deref(),
        Some(r#"{"status":1,"patience":60}"#)
    );
}

#[tokio::test]
async fn model_deletion_targets_the_model_id() {
    let (api, http) = scripted_api();
    respond_no_content(&http);

    api.models()
        .delete(DataSource::Yfinance, 42)
        .await
        .expect("deletion succeeds");

    let requests = http.recorded_requests();
    assert_eq!(requests[0].method, HttpMethod::Delete);
    assert_eq!(requests[0].url, format!("{BASE_URL}/yfinance/models/42"));
    assert_eq!(requests[0].body, None);
}

#[tokio::test]
async fn prediction_creation_posts_the_model_id() {
    let (api, http) = scripted_api();
    http.push_response(HttpResponse::created_json(
        r#"{"model_id":3,"result":4,"confidence":0.91,"created":"2024-03-01T12:00:00"}"#,
    ));

    let prediction = api
        .predictions()
        .create(DataSource::Binance, 3)
        .await
        .expect("prediction succeeds");

    let requests = http.recorded_requests();
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[0].url, format!("{BASE_URL}/binance/predictions"));
    assert_eq!(requests[0].body.as_deref(), Some(r#"{"model_id":3}"#));
    assert_eq!(prediction.model_id, 3);
    assert!((prediction.confidence - 0.91).abs() < f64::EPSILON);
}

// =============================================================================
// Response interpretation
// =============================================================================

#[tokio::test]
async fn backend_error_statuses_surface_with_their_message() {
    // Given: A backend that answers 409 the way Flask wraps errors
    let (api, http) = scripted_api();
    http.push_response(HttpResponse::error(
        409,
        r#"{"error": "409 Conflict: model is already training"}"#,
    ));

    // When: A conflicting training trigger is sent
    let patch = ModelPatch::status(NNModelStatus::InTraining);
    let err = api
        .models()
        .update(DataSource::Binance, 7, &patch)
        .await
        .expect_err("conflict must surface");

    // Then: The failure carries the status, message, and a stable code
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 409);
            assert!(message.contains("already training"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn out_of_range_enum_codes_fail_decoding() {
    // Given: A model payload with an algorithm code the client doesn't know
    let (api, http) = scripted_api();
    let mut rogue = model_payload(1, 0);
    rogue["algorithm"] = serde_json::json!(9);
    respond_ok(&http, models_payload(&[rogue]));

    // When: Models are listed
    let err = api
        .models()
        .list(DataSource::Binance)
        .await
        .expect_err("decode must fail");

    // Then: The failure is a decode error, not a silent default
    assert!(matches!(err, ApiError::Decode { .. }));
    assert_eq!(err.code(), "api.decode");
}

#[tokio::test]
async fn transport_failures_surface_as_transport_errors() {
    // Given: A transport with nothing scripted (connection-level failure)
    let (api, _http) = scripted_api();

    let err = api
        .symbols()
        .list(DataSource::Binance)
        .await
        .expect_err("transport failure must surface");

    assert!(matches!(err, ApiError::Transport { .. }));
    assert_eq!(err.code(), "api.transport");
}
