use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ValidationError;

/// The backend stores and emits these enums as bare integers; the codes are
/// part of the wire contract and must not be reordered.
macro_rules! int_coded_serde {
    ($name:ident) => {
        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_u8(self.code())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let code = i64::deserialize(deserializer)?;
                Self::from_code(code).map_err(D::Error::custom)
            }
        }
    };
}

/// Algorithm selectable in the create-model flow. The sequencing flag maps a
/// base algorithm onto its `*_SEQ` sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseAlgorithm {
    Lstm,
    Jordan,
}

impl BaseAlgorithm {
    pub const ALL: [Self; 2] = [Self::Lstm, Self::Jordan];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lstm => "LSTM",
            Self::Jordan => "JORDAN",
        }
    }

    pub const fn with_sequencing(self, sequencing: bool) -> NNAlgorithm {
        match (self, sequencing) {
            (Self::Lstm, false) => NNAlgorithm::Lstm,
            (Self::Jordan, false) => NNAlgorithm::Jordan,
            (Self::Lstm, true) => NNAlgorithm::LstmSeq,
            (Self::Jordan, true) => NNAlgorithm::JordanSeq,
        }
    }
}

impl Display for BaseAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaseAlgorithm {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "LSTM" => Ok(Self::Lstm),
            "JORDAN" => Ok(Self::Jordan),
            other => Err(ValidationError::UnknownEnumName {
                kind: "algorithm",
                value: other.to_owned(),
            }),
        }
    }
}

/// Full algorithm set as persisted by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NNAlgorithm {
    Lstm,
    Jordan,
    LstmSeq,
    JordanSeq,
}

impl NNAlgorithm {
    pub const ALL: [Self; 4] = [Self::Lstm, Self::Jordan, Self::LstmSeq, Self::JordanSeq];

    pub const fn code(self) -> u8 {
        match self {
            Self::Lstm => 0,
            Self::Jordan => 1,
            Self::LstmSeq => 2,
            Self::JordanSeq => 3,
        }
    }

    pub const fn from_code(code: i64) -> Result<Self, ValidationError> {
        match code {
            0 => Ok(Self::Lstm),
            1 => Ok(Self::Jordan),
            2 => Ok(Self::LstmSeq),
            3 => Ok(Self::JordanSeq),
            other => Err(ValidationError::UnknownEnumCode {
                kind: "algorithm",
                code: other,
            }),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lstm => "LSTM",
            Self::Jordan => "JORDAN",
            Self::LstmSeq => "LSTM_SEQ",
            Self::JordanSeq => "JORDAN_SEQ",
        }
    }

    pub const fn base(self) -> BaseAlgorithm {
        match self {
            Self::Lstm | Self::LstmSeq => BaseAlgorithm::Lstm,
            Self::Jordan | Self::JordanSeq => BaseAlgorithm::Jordan,
        }
    }

    pub const fn is_sequencing(self) -> bool {
        matches!(self, Self::LstmSeq | Self::JordanSeq)
    }
}

impl Display for NNAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NNAlgorithm {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "LSTM" => Ok(Self::Lstm),
            "JORDAN" => Ok(Self::Jordan),
            "LSTM_SEQ" => Ok(Self::LstmSeq),
            "JORDAN_SEQ" => Ok(Self::JordanSeq),
            other => Err(ValidationError::UnknownEnumName {
                kind: "algorithm",
                value: other.to_owned(),
            }),
        }
    }
}

int_coded_serde!(NNAlgorithm);

/// Horizon a model predicts over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredictionWindow {
    Tiny,
    Small,
    Medium,
}

impl PredictionWindow {
    pub const ALL: [Self; 3] = [Self::Tiny, Self::Small, Self::Medium];

    pub const fn code(self) -> u8 {
        match self {
            Self::Tiny => 0,
            Self::Small => 1,
            Self::Medium => 2,
        }
    }

    pub const fn from_code(code: i64) -> Result<Self, ValidationError> {
        match code {
            0 => Ok(Self::Tiny),
            1 => Ok(Self::Small),
            2 => Ok(Self::Medium),
            other => Err(ValidationError::UnknownEnumCode {
                kind: "prediction window",
                code: other,
            }),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tiny => "TINY",
            Self::Small => "SMALL",
            Self::Medium => "MEDIUM",
        }
    }

    /// Number of days the prediction spans.
    pub const fn period_days(self) -> u8 {
        match self {
            Self::Tiny => 1,
            Self::Small => 7,
            Self::Medium => 15,
        }
    }

    /// Period wording used in prediction summaries.
    pub const fn period_phrase(self) -> &'static str {
        match self {
            Self::Tiny => "day",
            Self::Small => "7 days",
            Self::Medium => "15 days",
        }
    }
}

impl Display for PredictionWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PredictionWindow {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "TINY" => Ok(Self::Tiny),
            "SMALL" => Ok(Self::Small),
            "MEDIUM" => Ok(Self::Medium),
            other => Err(ValidationError::UnknownEnumName {
                kind: "prediction window",
                value: other.to_owned(),
            }),
        }
    }
}

int_coded_serde!(PredictionWindow);

/// Model lifecycle as driven by the backend. The client only ever reflects
/// these, except for the optimistic CREATED/IN_TRAINING transitions after a
/// successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NNModelStatus {
    Created,
    InTraining,
    Trained,
    Errored,
}

impl NNModelStatus {
    pub const ALL: [Self; 4] = [Self::Created, Self::InTraining, Self::Trained, Self::Errored];

    pub const fn code(self) -> u8 {
        match self {
            Self::Created => 0,
            Self::InTraining => 1,
            Self::Trained => 2,
            Self::Errored => 3,
        }
    }

    pub const fn from_code(code: i64) -> Result<Self, ValidationError> {
        match code {
            0 => Ok(Self::Created),
            1 => Ok(Self::InTraining),
            2 => Ok(Self::Trained),
            3 => Ok(Self::Errored),
            other => Err(ValidationError::UnknownEnumCode {
                kind: "model status",
                code: other,
            }),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::InTraining => "IN_TRAINING",
            Self::Trained => "TRAINED",
            Self::Errored => "ERRORED",
        }
    }

    /// Training can be requested unless a run is already in flight.
    pub const fn can_train(self) -> bool {
        !matches!(self, Self::InTraining)
    }

    /// Predictions require a finished training run.
    pub const fn can_predict(self) -> bool {
        matches!(self, Self::Trained)
    }
}

impl Display for NNModelStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NNModelStatus {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "CREATED" => Ok(Self::Created),
            "IN_TRAINING" => Ok(Self::InTraining),
            "TRAINED" => Ok(Self::Trained),
            "ERRORED" => Ok(Self::Errored),
            other => Err(ValidationError::UnknownEnumName {
                kind: "model status",
                value: other.to_owned(),
            }),
        }
    }
}

int_coded_serde!(NNModelStatus);

/// Five-level signal produced by a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredictionResult {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl PredictionResult {
    pub const ALL: [Self; 5] = [
        Self::StrongBuy,
        Self::Buy,
        Self::Hold,
        Self::Sell,
        Self::StrongSell,
    ];

    pub const fn code(self) -> u8 {
        match self {
            Self::StrongBuy => 0,
            Self::Buy => 1,
            Self::Hold => 2,
            Self::Sell => 3,
            Self::StrongSell => 4,
        }
    }

    pub const fn from_code(code: i64) -> Result<Self, ValidationError> {
        match code {
            0 => Ok(Self::StrongBuy),
            1 => Ok(Self::Buy),
            2 => Ok(Self::Hold),
            3 => Ok(Self::Sell),
            4 => Ok(Self::StrongSell),
            other => Err(ValidationError::UnknownEnumCode {
                kind: "prediction result",
                code: other,
            }),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StrongBuy => "STRONG_BUY",
            Self::Buy => "BUY",
            Self::Hold => "HOLD",
            Self::Sell => "SELL",
            Self::StrongSell => "STRONG_SELL",
        }
    }

    /// Expected-movement wording used in prediction summaries.
    pub const fn direction_phrase(self) -> &'static str {
        match self {
            Self::StrongBuy => "go UP by more than 5%",
            Self::Buy => "go UP by more than 1%",
            Self::Hold => "STAGNATE with less than 1% change",
            Self::Sell => "go DOWN by more than 1%",
            Self::StrongSell => "go DOWN by more than 5%",
        }
    }
}

impl Display for PredictionResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PredictionResult {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "STRONG_BUY" => Ok(Self::StrongBuy),
            "BUY" => Ok(Self::Buy),
            "HOLD" => Ok(Self::Hold),
            "SELL" => Ok(Self::Sell),
            "STRONG_SELL" => Ok(Self::StrongSell),
            other => Err(ValidationError::UnknownEnumName {
                kind: "prediction result",
                value: other.to_owned(),
            }),
        }
    }
}

int_coded_serde!(PredictionResult);
