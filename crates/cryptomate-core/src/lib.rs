//! # cryptomate-core
//!
//! Domain models and a typed REST client for the cryptomate prediction
//! backend: browse instrument symbols, load historical daily bars, manage
//! neural-network prediction models, and read their predictions.
//!
//! The backend keeps one database per upstream data source; every endpoint
//! is parameterized by a [`DataSource`] path segment:
//!
//! ```text
//! {base_url}/{data_source}/{resource}
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Typed client for the symbols/bars/models/predictions resources |
//! | [`domain`] | Validated domain models and wire encodings |
//! | [`export`] | Client-side CSV export of bar series |
//! | [`freshness`] | Gating for upstream bar refreshes |
//! | [`http`] | Transport abstraction (reqwest + scripted test transport) |
//! | [`source`] | Data-source identifiers |
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cryptomate_core::{ApiClient, ApiConfig, DataSource, ReqwestHttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(ApiConfig::default(), Arc::new(ReqwestHttpClient::new()));
//!
//!     let symbols = client.symbols().list(DataSource::Binance).await?;
//!     for symbol in symbols.iter().filter(|s| s.selected) {
//!         println!("{}", symbol.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! Domain construction returns [`ValidationError`]; backend calls return
//! [`ApiError`] with a stable machine code per failure kind. Calls are
//! single-shot: no retries, no backoff, no deduplication.

pub mod api;
pub mod domain;
pub mod export;
pub mod freshness;
pub mod http;
pub mod source;

mod error;

pub use api::{
    ApiClient, ApiConfig, ApiError, BarsApi, CreateModelRequest, ModelPatch, ModelsApi,
    PredictionsApi, SymbolsApi,
};
pub use domain::{
    Bar, BaseAlgorithm, Day, NNAlgorithm, NNModel, NNModelStatus, Prediction, PredictionResult,
    PredictionWindow, Symbol, SymbolName, UtcDateTime,
};
pub use error::ValidationError;
pub use export::{bars_to_csv, export_file_name, write_bars_csv};
pub use freshness::{fetch_disabled, series_fetch_disabled};
pub use http::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient,
    ScriptedHttpClient,
};
pub use source::DataSource;
