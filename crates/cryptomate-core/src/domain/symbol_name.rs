use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MAX_SYMBOL_NAME_LEN: usize = 24;

/// Normalized instrument symbol as the backend stores it.
///
/// Binance pairs are bare concatenations (`BTCUSDT`, and some start with a
/// digit: `1INCHUSDT`); Yahoo Finance pairs are dash-suffixed (`BTC-USD`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SymbolName(String);

impl SymbolName {
    /// Parse and normalize a symbol name to uppercase.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptySymbolName);
        }

        let normalized = trimmed.to_ascii_uppercase();
        let len = normalized.chars().count();
        if len > MAX_SYMBOL_NAME_LEN {
            return Err(ValidationError::SymbolNameTooLong {
                len,
                max: MAX_SYMBOL_NAME_LEN,
            });
        }

        for (index, ch) in normalized.chars().enumerate() {
            let valid = ch.is_ascii_alphanumeric() || ch == '.' || ch == '-';
            if !valid {
                return Err(ValidationError::SymbolNameInvalidChar { ch, index });
            }
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SymbolName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for SymbolName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for SymbolName {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<SymbolName> for String {
    fn from(value: SymbolName) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes() {
        let parsed = SymbolName::parse(" btc-usd ").expect("must parse");
        assert_eq!(parsed.as_str(), "BTC-USD");
    }

    #[test]
    fn accepts_leading_digit() {
        let parsed = SymbolName::parse("1INCHUSDT").expect("must parse");
        assert_eq!(parsed.as_str(), "1INCHUSDT");
    }

    #[test]
    fn rejects_invalid_chars() {
        let err = SymbolName::parse("BTC/USDT").expect_err("must fail");
        assert!(matches!(err, ValidationError::SymbolNameInvalidChar { .. }));
    }

    #[test]
    fn rejects_empty() {
        let err = SymbolName::parse("   ").expect_err("must fail");
        assert!(matches!(err, ValidationError::EmptySymbolName));
    }
}
