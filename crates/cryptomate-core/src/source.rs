use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Backend data-source identifiers.
///
/// Every request path is parameterized by one of these segments; the backend
/// keeps a fully separate database per source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Binance,
    Yfinance,
}

impl DataSource {
    pub const ALL: [Self; 2] = [Self::Binance, Self::Yfinance];

    /// Path segment used in endpoint URLs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Binance => "binance",
            Self::Yfinance => "yfinance",
        }
    }

    /// The other source; switching discards all page state.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Binance => Self::Yfinance,
            Self::Yfinance => Self::Binance,
        }
    }
}

impl Display for DataSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataSource {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "binance" => Ok(Self::Binance),
            "yfinance" => Ok(Self::Yfinance),
            other => Err(ValidationError::InvalidDataSource {
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        let parsed = DataSource::from_str(" YFinance ").expect("must parse");
        assert_eq!(parsed, DataSource::Yfinance);
    }

    #[test]
    fn rejects_unknown_source() {
        let err = DataSource::from_str("kraken").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDataSource { .. }));
    }

    #[test]
    fn serializes_as_path_segment() {
        let json = serde_json::to_string(&DataSource::Binance).expect("must serialize");
        assert_eq!(json, "\"binance\"");
    }
}
