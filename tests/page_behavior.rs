//! Behavior tests for the page-level read/refresh/mutate cycle.
//!
//! These verify HOW the in-memory collections track the backend: local
//! patches only after successful mutations, discarded state on source
//! switches, lazy single fetches per expansion, and stepper flows that
//! issue nothing when cancelled.

use cryptomate_cli::dialog::{CreateModelStepper, TrainingStepper};
use cryptomate_cli::error::CliError;
use cryptomate_cli::pages::{BarsPanel, HistoryPage, ModelsPage, SymbolsPage};
use cryptomate_core::{
    DataSource, Day, HttpMethod, HttpResponse, NNModelStatus, PredictionResult, SymbolName,
};
use cryptomate_tests::{
    bars_payload, model_payload, models_payload, prediction_payload, respond_no_content,
    respond_ok, scripted_api, symbols_payload, BASE_URL,
};

fn symbol(name: &str) -> SymbolName {
    SymbolName::parse(name).expect("valid test symbol")
}

// =============================================================================
// Symbols page: staged selection
// =============================================================================

#[tokio::test]
async fn toggling_a_symbol_twice_round_trips_and_issues_exactly_two_patches() {
    // Given: An activated symbols page where ETHUSDT is unselected
    let (api, http) = scripted_api();
    respond_ok(&http, symbols_payload());
    respond_no_content(&http);
    respond_no_content(&http);

    let mut page = SymbolsPage::new(DataSource::Binance);
    page.activate(&api).await.expect("activation succeeds");
    let original: Vec<bool> = page.symbols().iter().map(|s| s.selected).collect();

    // When: The symbol is selected, saved, deselected, and saved again
    let eth = symbol("ETHUSDT");
    page.mark_selected(&eth, true).expect("symbol is known");
    page.save(&api).await.expect("first save succeeds");
    page.mark_selected(&eth, false).expect("symbol is known");
    page.save(&api).await.expect("second save succeeds");

    // Then: The collection is back in its original state
    let current: Vec<bool> = page.symbols().iter().map(|s| s.selected).collect();
    assert_eq!(current, original);

    // And: Exactly two PATCH calls went out, flag true then false
    let requests = http.recorded_requests();
    let patches: Vec<_> = requests
        .iter()
        .filter(|r| r.method == HttpMethod::Patch)
        .collect();
    assert_eq!(patches.len(), 2);
    assert_eq!(
        patches[0].url,
        format!("{BASE_URL}/binance/symbols/ETHUSDT")
    );
    assert_eq!(patches[0].body.as_deref(), Some(r#"{"selected":true}"#));
    assert_eq!(patches[1].body.as_deref(), Some(r#"{"selected":false}"#));
}

#[tokio::test]
async fn failed_selection_save_leaves_local_state_untouched() {
    // Given: An activated page and a backend that rejects the update
    let (api, http) = scripted_api();
    respond_ok(&http, symbols_payload());
    http.push_response(HttpResponse::error(500, ""));

    let mut page = SymbolsPage::new(DataSource::Binance);
    page.activate(&api).await.expect("activation succeeds");

    // When: A staged selection fails to save
    let eth = symbol("ETHUSDT");
    page.mark_selected(&eth, true).expect("symbol is known");
    let err = page.save(&api).await.expect_err("save must fail");

    // Then: The error surfaces, the flag is unchanged, the edit stays staged
    assert!(matches!(err, CliError::Api(_)));
    let eth_state = page
        .symbols()
        .iter()
        .find(|s| s.name == eth)
        .expect("symbol present");
    assert!(!eth_state.selected);
    assert_eq!(page.touched_count(), 1);
}

#[tokio::test]
async fn marking_an_unknown_symbol_is_rejected_before_any_request() {
    let (api, http) = scripted_api();
    respond_ok(&http, symbols_payload());

    let mut page = SymbolsPage::new(DataSource::Binance);
    page.activate(&api).await.expect("activation succeeds");

    let err = page
        .mark_selected(&symbol("DOGEUSDT"), true)
        .expect_err("unknown symbol must be rejected");
    assert!(matches!(err, CliError::UnknownSymbol { .. }));

    // Only the activation GET ever went out.
    assert_eq!(http.request_count(), 1);
}

#[tokio::test]
async fn symbol_filtering_matches_substrings_and_skips_selected_suggestions() {
    // Given: An activated page with one selected and one unselected symbol
    let (api, http) = scripted_api();
    respond_ok(&http, symbols_payload());

    let mut page = SymbolsPage::new(DataSource::Binance);
    page.activate(&api).await.expect("activation succeeds");

    // Then: The table filter is a case-insensitive substring match
    let hits = page.filter_symbols("eth");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name.as_str(), "ETHUSDT");

    // And: Picker suggestions exclude already-selected symbols
    let suggestions = page.picker_suggestions("usdt");
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].as_str(), "ETHUSDT");

    // And: The selected view contains only the flagged symbol
    let selected = page.selected_symbols();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].name.as_str(), "BTCUSDT");
}

#[tokio::test]
async fn switching_the_data_source_discards_state_and_refetches() {
    // Given: A page activated against binance
    let (api, http) = scripted_api();
    respond_ok(&http, symbols_payload());
    respond_ok(&http, r#"[{"name": "BTC-USD", "selected": false}]"#);

    let mut page = SymbolsPage::new(DataSource::Binance);
    page.activate(&api).await.expect("activation succeeds");
    assert_eq!(page.symbols().len(), 2);

    // When: The source switches to yfinance
    page.switch_source(&api, DataSource::Yfinance)
        .await
        .expect("switch succeeds");

    // Then: The collection was replaced from the other source's path
    assert_eq!(page.symbols().len(), 1);
    assert_eq!(page.symbols()[0].name.as_str(), "BTC-USD");

    let requests = http.recorded_requests();
    assert_eq!(requests[0].url, format!("{BASE_URL}/binance/symbols"));
    assert_eq!(requests[1].url, format!("{BASE_URL}/yfinance/symbols"));
}

// =============================================================================
// Models page: optimistic local patches after successful mutations
// =============================================================================

#[tokio::test]
async fn successful_training_trigger_transitions_the_local_model() {
    // Given: A page holding one idle model
    let (api, http) = scripted_api();
    respond_ok(&http, models_payload(&[model_payload(7, 0)]));
    respond_no_content(&http);

    let mut page = ModelsPage::new(DataSource::Binance);
    page.activate(&api).await.expect("activation succeeds");

    // When: Training starts with the default (omitted) range
    let stepper = TrainingStepper::new(
        Day::parse("2024-02-28").expect("day"),
        Day::parse("2024-03-01").expect("day"),
    );
    page.train(&api, 7, stepper.submit())
        .await
        .expect("training trigger succeeds");

    // Then: The local model reads IN_TRAINING without any refetch
    let model = page.model(7).expect("model present");
    assert_eq!(model.status, NNModelStatus::InTraining);

    // And: The PATCH body carried status and patience only
    let requests = http.recorded_requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].method, HttpMethod::Patch);
    assert_eq!(
        requests[1].body.as_deref(),
        Some(r#"{"status":1,"patience":60}"#)
    );
}

#[tokio::test]
async fn training_is_refused_while_a_run_is_in_flight() {
    // Given: A model already training
    let (api, http) = scripted_api();
    respond_ok(&http, models_payload(&[model_payload(7, 1)]));

    let mut page = ModelsPage::new(DataSource::Binance);
    page.activate(&api).await.expect("activation succeeds");

    // When: Another training trigger is attempted
    let stepper = TrainingStepper::new(
        Day::parse("2024-02-28").expect("day"),
        Day::parse("2024-03-01").expect("day"),
    );
    let err = page
        .train(&api, 7, stepper.submit())
        .await
        .expect_err("must be refused");

    // Then: The guard fires locally; no mutation request went out
    assert!(matches!(err, CliError::TrainingInFlight { id: 7 }));
    assert_eq!(http.request_count(), 1);
}

#[tokio::test]
async fn completed_prediction_is_appended_to_its_model() {
    // Given: A trained model
    let (api, http) = scripted_api();
    respond_ok(&http, models_payload(&[model_payload(3, 2)]));
    http.push_response(HttpResponse::created_json(
        prediction_payload(3, 0, "2024-03-01T12:00:00").to_string(),
    ));

    let mut page = ModelsPage::new(DataSource::Binance);
    page.activate(&api).await.expect("activation succeeds");

    // When: A prediction is requested
    let prediction = page.predict(&api, 3).await.expect("prediction succeeds");

    // Then: The result lands on the owning model without a refetch
    assert_eq!(prediction.result, PredictionResult::StrongBuy);
    let model = page.model(3).expect("model present");
    assert_eq!(model.predictions.len(), 1);
    assert_eq!(model.predictions[0].result, PredictionResult::StrongBuy);
}

#[tokio::test]
async fn prediction_requires_a_trained_model() {
    // Given: A freshly created model
    let (api, http) = scripted_api();
    respond_ok(&http, models_payload(&[model_payload(3, 0)]));

    let mut page = ModelsPage::new(DataSource::Binance);
    page.activate(&api).await.expect("activation succeeds");

    // When/Then: Inference is refused locally, before any request
    let err = page.predict(&api, 3).await.expect_err("must be refused");
    assert!(matches!(err, CliError::ModelNotTrained { id: 3 }));
    assert_eq!(http.request_count(), 1);
}

#[tokio::test]
async fn deleted_model_is_removed_locally() {
    // Given: Two models
    let (api, http) = scripted_api();
    respond_ok(
        &http,
        models_payload(&[model_payload(1, 2), model_payload(2, 0)]),
    );
    respond_no_content(&http);

    let mut page = ModelsPage::new(DataSource::Binance);
    page.activate(&api).await.expect("activation succeeds");

    // When: One is deleted
    let removed = page.delete(&api, 1).await.expect("deletion succeeds");

    // Then: Only the other remains, no refetch needed
    assert_eq!(removed.id, 1);
    assert_eq!(page.models().len(), 1);
    assert_eq!(page.models()[0].id, 2);
    assert_eq!(http.request_count(), 2);
}

// =============================================================================
// Bars panel: lazy expansion and freshness gating
// =============================================================================

#[tokio::test]
async fn expanding_the_same_symbol_fetches_its_bars_exactly_once() {
    // Given: A bars panel
    let (api, http) = scripted_api();
    respond_ok(&http, bars_payload("2024-03-01"));

    let mut panel = BarsPanel::new(DataSource::Binance);
    let btc = symbol("BTCUSDT");

    // When: The same symbol is expanded twice
    let fetched_first = panel.expand(&api, &btc).await.expect("expansion succeeds");
    let fetched_again = panel.expand(&api, &btc).await.expect("re-expansion is a no-op");

    // Then: Only the first expansion hit the backend
    assert!(fetched_first);
    assert!(!fetched_again);
    assert_eq!(http.request_count(), 1);
    assert_eq!(panel.bars().len(), 3);
    assert!(!panel.loading());
}

#[tokio::test]
async fn upstream_refresh_is_refused_while_the_series_is_current() {
    // Given: A series whose last bar is dated today (UTC)
    let (api, http) = scripted_api();
    let today = Day::today_utc().format_iso();
    respond_ok(&http, bars_payload(&today));

    let mut panel = BarsPanel::new(DataSource::Binance);
    panel
        .expand(&api, &symbol("BTCUSDT"))
        .await
        .expect("expansion succeeds");

    // When: An upstream refresh is requested the same day
    let err = panel
        .refresh_upstream(&api, Day::today_utc())
        .await
        .expect_err("must be refused");

    // Then: The freshness gate fires; no fetch request went out
    assert!(matches!(err, CliError::BarsUpToDate { .. }));
    assert!(panel.fetch_disabled(Day::today_utc()));
    assert_eq!(http.request_count(), 1);
}

#[tokio::test]
async fn upstream_refresh_proceeds_once_a_day_has_elapsed() {
    // Given: A series one whole day behind
    let (api, http) = scripted_api();
    respond_ok(&http, bars_payload("2024-03-01"));
    respond_ok(&http, bars_payload("2024-03-02"));

    let mut panel = BarsPanel::new(DataSource::Binance);
    panel
        .expand(&api, &symbol("BTCUSDT"))
        .await
        .expect("expansion succeeds");

    // When: A refresh runs on the following day
    let next_day = Day::parse("2024-03-02").expect("day");
    assert!(!panel.fetch_disabled(next_day));
    panel
        .refresh_upstream(&api, next_day)
        .await
        .expect("refresh succeeds");

    // Then: The fetch variant was called and the series replaced
    let requests = http.recorded_requests();
    assert_eq!(
        requests[1].url,
        format!("{BASE_URL}/binance/bars/BTCUSDT?fetch=true")
    );
    assert_eq!(panel.bars().last().map(|b| b.day), Day::parse("2024-03-02").ok());
}

// =============================================================================
// Steppers: cancellation produces nothing
// =============================================================================

#[tokio::test]
async fn cancelled_model_creation_issues_no_request() {
    // Given: A stepper abandoned before the prediction-window step
    let (api, http) = scripted_api();
    let mut stepper = CreateModelStepper::new();
    stepper.select_algorithm(cryptomate_core::BaseAlgorithm::Lstm);

    // When: The flow resolves empty
    let outcome = stepper.submit(symbol("BTCUSDT"));

    // Then: There is nothing to send, and nothing was sent
    assert!(outcome.is_none());
    let _ = api; // the caller never reaches the client with an empty result
    assert_eq!(http.request_count(), 0);
}

// =============================================================================
// History page: aggregation across models
// =============================================================================

#[tokio::test]
async fn history_aggregates_predictions_from_models_newest_first() {
    // Given: Two models with interleaved prediction dates
    let (api, http) = scripted_api();
    let mut btc_model = model_payload(1, 2);
    btc_model["predictions"] = serde_json::json!([
        prediction_payload(1, 2, "2024-02-01T10:00:00"),
        prediction_payload(1, 0, "2024-03-01T10:00:00"),
    ]);
    let mut eth_model = model_payload(2, 2);
    eth_model["symbol_name"] = serde_json::json!("ETHUSDT");
    eth_model["predictions"] =
        serde_json::json!([prediction_payload(2, 4, "2024-02-15T10:00:00")]);
    respond_ok(&http, models_payload(&[btc_model, eth_model]));

    // When: The history page loads
    let mut page = HistoryPage::new(DataSource::Binance);
    page.load(&api).await.expect("load succeeds");

    // Then: Predictions are flattened, stamped, and sorted newest first
    let predictions = page.predictions();
    assert_eq!(predictions.len(), 3);
    assert_eq!(
        predictions[0].symbol_name.as_ref().map(|s| s.as_str()),
        Some("BTCUSDT")
    );
    assert_eq!(predictions[0].result, PredictionResult::StrongBuy);
    assert_eq!(
        predictions[1].symbol_name.as_ref().map(|s| s.as_str()),
        Some("ETHUSDT")
    );
    assert_eq!(predictions[2].result, PredictionResult::Hold);

    // And: Only the models endpoint was consulted
    let requests = http.recorded_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, format!("{BASE_URL}/binance/models"));
}

#[tokio::test]
async fn history_filters_by_symbol_and_result() {
    let (api, http) = scripted_api();
    let mut btc_model = model_payload(1, 2);
    btc_model["predictions"] = serde_json::json!([
        prediction_payload(1, 0, "2024-03-01T10:00:00"),
        prediction_payload(1, 3, "2024-03-02T10:00:00"),
    ]);
    respond_ok(&http, models_payload(&[btc_model]));

    let mut page = HistoryPage::new(DataSource::Binance);
    page.load(&api).await.expect("load succeeds");

    let sells = page.filtered(&[symbol("BTCUSDT")], &[PredictionResult::Sell]);
    assert_eq!(sells.len(), 1);
    assert_eq!(sells[0].result, PredictionResult::Sell);

    let everything = page.filtered(&[], &[]);
    assert_eq!(everything.len(), 2);
}
