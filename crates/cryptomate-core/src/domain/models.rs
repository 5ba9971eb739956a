use serde::{Deserialize, Serialize};

use crate::domain::{
    Day, NNAlgorithm, NNModelStatus, PredictionResult, PredictionWindow, SymbolName, UtcDateTime,
};
use crate::ValidationError;

/// Tradeable symbol as mirrored from the backend.
///
/// `selected` is the only client-mutable field and is persisted with a single
/// PATCH; the bar span fields are maintained server-side as bars are fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: SymbolName,
    pub selected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bars_first_day: Option<Day>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bars_last_day: Option<Day>,
}

impl Symbol {
    pub fn new(name: SymbolName, selected: bool) -> Self {
        Self {
            name,
            selected,
            bars_first_day: None,
            bars_last_day: None,
        }
    }
}

/// Daily OHLC price record. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub day: Day,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl Bar {
    pub fn new(
        day: Day,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: Option<f64>,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("open", open)?;
        validate_non_negative("high", high)?;
        validate_non_negative("low", low)?;
        validate_non_negative("close", close)?;
        if let Some(volume) = volume {
            validate_non_negative("volume", volume)?;
        }

        if high < low {
            return Err(ValidationError::InvalidBarRange);
        }

        if open < low || open > high || close < low || close > high {
            return Err(ValidationError::InvalidBarBounds);
        }

        Ok(Self {
            day,
            open,
            high,
            low,
            close,
            volume,
        })
    }

    /// CSV column set, in declaration order.
    pub const FIELDS: [&'static str; 6] = ["day", "open", "high", "low", "close", "volume"];
}

/// Single inference result. Created server-side; read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub model_id: i64,
    pub result: PredictionResult,
    pub confidence: f64,
    pub created: UtcDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_name: Option<SymbolName>,
}

impl Prediction {
    pub fn new(
        model_id: i64,
        result: PredictionResult,
        confidence: f64,
        created: UtcDateTime,
    ) -> Result<Self, ValidationError> {
        if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
            return Err(ValidationError::ConfidenceOutOfRange { value: confidence });
        }

        Ok(Self {
            model_id,
            result,
            confidence,
            created,
            symbol_name: None,
        })
    }

    /// Human-readable summary of this prediction for a given model.
    pub fn summary(&self, symbol: &SymbolName, window: PredictionWindow) -> String {
        format!(
            "Based on the latest prediction ({}) {} is expected to {} in the following {} \
             with a confidence level of {:.2}.",
            self.created.day(),
            symbol,
            self.result.direction_phrase(),
            window.period_phrase(),
            self.confidence * 100.0
        )
    }
}

/// Neural-network model metadata, including its accumulated predictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NNModel {
    pub id: i64,
    pub algorithm: NNAlgorithm,
    pub symbol_name: SymbolName,
    pub status: NNModelStatus,
    pub prediction_window: PredictionWindow,
    #[serde(default)]
    pub predictions: Vec<Prediction>,
    pub created: UtcDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<UtcDateTime>,
}

impl NNModel {
    pub fn train_disabled(&self) -> bool {
        !self.status.can_train()
    }

    pub fn predict_disabled(&self) -> bool {
        !self.status.can_predict()
    }

    pub fn latest_prediction(&self) -> Option<&Prediction> {
        self.predictions.last()
    }

    /// Summary of the most recent prediction, if any.
    pub fn latest_prediction_summary(&self) -> Option<String> {
        self.latest_prediction()
            .map(|prediction| prediction.summary(&self.symbol_name, self.prediction_window))
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
