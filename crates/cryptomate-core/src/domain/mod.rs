//! Domain types mirrored from the prediction backend.
//!
//! All construction validates invariants up front; the wire encodings
//! (int-coded enums, ISO days, RFC3339-or-naive timestamps) match what the
//! backend actually emits.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Tradeable symbol with its selection flag |
//! | [`Bar`] | Daily OHLC record with optional volume |
//! | [`NNModel`] | Prediction model metadata and embedded predictions |
//! | [`Prediction`] | Single inference result |
//! | [`SymbolName`] | Validated, uppercased symbol name |
//! | [`Day`] | Calendar day in UTC |
//! | [`UtcDateTime`] | Creation/update instant, normalized to UTC |

mod day;
mod enums;
mod models;
mod symbol_name;
mod timestamp;

pub use day::Day;
pub use enums::{BaseAlgorithm, NNAlgorithm, NNModelStatus, PredictionResult, PredictionWindow};
pub use models::{Bar, NNModel, Prediction, Symbol};
pub use symbol_name::SymbolName;
pub use timestamp::UtcDateTime;
