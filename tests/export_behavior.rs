//! Behavior tests for the client-side CSV export.

use cryptomate_core::{bars_to_csv, export_file_name, write_bars_csv, Bar, DataSource, Day};

fn bar(day: &str, volume: Option<f64>) -> Bar {
    Bar::new(
        Day::parse(day).expect("test day"),
        100.0,
        105.0,
        95.0,
        101.5,
        volume,
    )
    .expect("test bar")
}

#[test]
fn header_row_lists_bar_fields_in_declaration_order() {
    // Given: A loaded series
    let bars = vec![bar("2024-03-01", Some(1000.0))];

    // When: It is rendered to CSV
    let csv = bars_to_csv(&bars);

    // Then: The header is the field-name set in declaration order
    assert!(csv.starts_with("day,open,high,low,close,volume"));
}

#[test]
fn row_count_equals_bar_count_plus_header() {
    let bars = vec![
        bar("2024-03-01", Some(1000.0)),
        bar("2024-03-02", Some(1100.0)),
        bar("2024-03-03", None),
    ];

    let csv = bars_to_csv(&bars);
    let rows: Vec<&str> = csv.split("\r\n").collect();
    assert_eq!(rows.len(), bars.len() + 1);
}

#[test]
fn absent_volume_serializes_to_the_empty_string() {
    let csv = bars_to_csv(&[bar("2024-03-01", None)]);
    let data_row = csv.split("\r\n").nth(1).expect("data row");
    assert!(data_row.ends_with(','));
}

#[test]
fn day_values_are_quoted_and_numbers_are_bare() {
    let csv = bars_to_csv(&[bar("2024-03-01", Some(1000.0))]);
    let data_row = csv.split("\r\n").nth(1).expect("data row");
    assert_eq!(data_row, "\"2024-03-01\",100,105,95,101.5,1000");
}

#[test]
fn default_file_name_embeds_source_and_symbol() {
    assert_eq!(
        export_file_name(DataSource::Binance, "BTCUSDT"),
        "binance-BTCUSDT-data.csv"
    );
    assert_eq!(
        export_file_name(DataSource::Yfinance, "BTC-USD"),
        "yfinance-BTC-USD-data.csv"
    );
}

#[test]
fn written_file_round_trips_the_rendered_csv() {
    // Given: A series and a target directory
    let bars = vec![bar("2024-03-01", Some(1000.0)), bar("2024-03-02", None)];
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir
        .path()
        .join(export_file_name(DataSource::Binance, "BTCUSDT"));

    // When: The series is exported
    write_bars_csv(&path, &bars).expect("export succeeds");

    // Then: The file holds exactly the rendered document
    let written = std::fs::read_to_string(&path).expect("file readable");
    assert_eq!(written, bars_to_csv(&bars));
    assert_eq!(written.split("\r\n").count(), 3);
}
