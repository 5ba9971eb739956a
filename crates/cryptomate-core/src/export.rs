//! Client-side CSV export of a loaded bar series.
//!
//! Format: a header row derived from the bar field names, JSON-style quoting
//! for string values, bare numbers, absent values as empty strings, and CRLF
//! row separators.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::Bar;
use crate::DataSource;

/// `{data_source}-{symbol}-data.csv`
pub fn export_file_name(source: DataSource, symbol: &str) -> String {
    format!("{}-{}-data.csv", source.as_str(), symbol)
}

/// Render a bar series to CSV. Row count is `bars.len() + 1` for the header.
pub fn bars_to_csv(bars: &[Bar]) -> String {
    let mut rows = Vec::with_capacity(bars.len() + 1);
    rows.push(Bar::FIELDS.join(","));

    for bar in bars {
        let fields = [
            // ISO days contain no quotes or separators, so plain wrapping
            // matches JSON string quoting.
            format!("\"{}\"", bar.day.format_iso()),
            number_field(bar.open),
            number_field(bar.high),
            number_field(bar.low),
            number_field(bar.close),
            bar.volume.map(number_field).unwrap_or_default(),
        ];
        rows.push(fields.join(","));
    }

    rows.join("\r\n")
}

/// Write the series to `path`.
pub fn write_bars_csv(path: &Path, bars: &[Bar]) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bars_to_csv(bars).as_bytes())?;
    writer.flush()
}

fn number_field(value: f64) -> String {
    value.to_string()
}
