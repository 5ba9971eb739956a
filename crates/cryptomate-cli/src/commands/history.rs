use std::str::FromStr;

use cryptomate_core::{ApiClient, DataSource, PredictionResult, SymbolName};
use serde_json::json;

use crate::cli::HistoryArgs;
use crate::error::CliError;
use crate::output::CommandOutput;
use crate::pages::HistoryPage;

pub async fn run(
    args: &HistoryArgs,
    api: &ApiClient,
    source: DataSource,
) -> Result<CommandOutput, CliError> {
    let mut page = HistoryPage::new(source);
    if args.remote {
        page.load_remote(api).await?;
    } else {
        page.load(api).await?;
    }

    let mut symbols = Vec::new();
    for raw in &args.symbol {
        symbols.push(SymbolName::parse(raw)?);
    }
    let mut results = Vec::new();
    for raw in &args.result {
        results.push(PredictionResult::from_str(raw)?);
    }

    let predictions = page.filtered(&symbols, &results);
    let rows = predictions
        .iter()
        .map(|prediction| {
            vec![
                prediction.created.to_string(),
                prediction
                    .symbol_name
                    .as_ref()
                    .map(|name| name.to_string())
                    .unwrap_or_default(),
                prediction.result.to_string(),
                format!("{:.2}", prediction.confidence),
                prediction.model_id.to_string(),
            ]
        })
        .collect();

    Ok(CommandOutput::json(json!({
        "data_source": page.source(),
        "count": predictions.len(),
        "predictions": predictions,
    }))
    .with_table(
        vec!["created", "symbol", "result", "confidence", "model"],
        rows,
    ))
}
