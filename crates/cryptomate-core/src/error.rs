use thiserror::Error;

/// Validation and contract errors exposed by `cryptomate-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("symbol name cannot be empty")]
    EmptySymbolName,
    #[error("symbol name length {len} exceeds max {max}")]
    SymbolNameTooLong { len: usize, max: usize },
    #[error("symbol name contains invalid character '{ch}' at index {index}")]
    SymbolNameInvalidChar { ch: char, index: usize },

    #[error("invalid data source '{value}', expected one of binance, yfinance")]
    InvalidDataSource { value: String },

    #[error("invalid calendar day '{value}', expected YYYY-MM-DD")]
    InvalidDay { value: String },
    #[error("invalid timestamp '{value}', expected RFC3339")]
    InvalidTimestamp { value: String },

    #[error("unknown {kind} code {code}")]
    UnknownEnumCode { kind: &'static str, code: i64 },
    #[error("unknown {kind} name '{value}'")]
    UnknownEnumName { kind: &'static str, value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("bar high must be >= low")]
    InvalidBarRange,
    #[error("bar open/close must be within high/low range")]
    InvalidBarBounds,

    #[error("confidence {value} must be within [0, 1]")]
    ConfidenceOutOfRange { value: f64 },

    #[error("base url '{value}' must start with http:// or https://")]
    InvalidBaseUrl { value: String },
}
