use cryptomate_core::{ApiClient, DataSource, Prediction, PredictionResult, SymbolName};

use crate::error::CliError;

/// History view state: all predictions for the active data source, newest
/// first.
pub struct HistoryPage {
    source: DataSource,
    predictions: Vec<Prediction>,
}

impl HistoryPage {
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            predictions: Vec::new(),
        }
    }

    pub fn source(&self) -> DataSource {
        self.source
    }

    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }

    /// Aggregate predictions by flattening the models listing, stamping each
    /// prediction with its model's symbol. One request covers the whole
    /// view; the direct predictions endpoint stays unused here.
    pub async fn load(&mut self, api: &ApiClient) -> Result<(), CliError> {
        let models = api.models().list(self.source).await?;

        let mut predictions = Vec::new();
        for model in models {
            let symbol = model.symbol_name.clone();
            for mut prediction in model.predictions {
                prediction.symbol_name = Some(symbol.clone());
                predictions.push(prediction);
            }
        }

        predictions.sort_by(|a, b| b.created.cmp(&a.created));
        self.predictions = predictions;
        Ok(())
    }

    /// Read the backend's own prediction listing instead of aggregating.
    pub async fn load_remote(&mut self, api: &ApiClient) -> Result<(), CliError> {
        let mut predictions = api.predictions().list(self.source).await?;
        predictions.sort_by(|a, b| b.created.cmp(&a.created));
        self.predictions = predictions;
        Ok(())
    }

    /// Switch the active data source: discard state and re-aggregate.
    pub async fn switch_source(
        &mut self,
        api: &ApiClient,
        source: DataSource,
    ) -> Result<(), CliError> {
        self.source = source;
        self.predictions.clear();
        self.load(api).await
    }

    /// Filter by symbol and/or result; empty criteria match all.
    pub fn filtered(
        &self,
        symbols: &[SymbolName],
        results: &[PredictionResult],
    ) -> Vec<&Prediction> {
        self.predictions
            .iter()
            .filter(|p| {
                let symbol_ok = symbols.is_empty()
                    || p.symbol_name
                        .as_ref()
                        .map(|name| symbols.contains(name))
                        .unwrap_or(false);
                let result_ok = results.is_empty() || results.contains(&p.result);
                symbol_ok && result_ok
            })
            .collect()
    }
}
