use cryptomate_core::{
    ApiClient, CreateModelRequest, DataSource, ModelPatch, NNAlgorithm, NNModel, NNModelStatus,
    Prediction, SymbolName,
};

use crate::dialog::TrainingConfig;
use crate::error::CliError;

/// Multi-select filter over the model collection; empty criteria match all.
#[derive(Debug, Clone, Default)]
pub struct ModelFilter {
    pub symbols: Vec<SymbolName>,
    pub algorithms: Vec<NNAlgorithm>,
    pub statuses: Vec<NNModelStatus>,
}

impl ModelFilter {
    fn matches(&self, model: &NNModel) -> bool {
        (self.symbols.is_empty() || self.symbols.contains(&model.symbol_name))
            && (self.algorithms.is_empty() || self.algorithms.contains(&model.algorithm))
            && (self.statuses.is_empty() || self.statuses.contains(&model.status))
    }
}

/// Models view state. Every mutation issues exactly one request and patches
/// the collection locally on success: created models are appended, a
/// training trigger flips the status to IN_TRAINING, predictions are
/// appended to their model, deletions remove the model.
pub struct ModelsPage {
    source: DataSource,
    models: Vec<NNModel>,
}

impl ModelsPage {
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            models: Vec::new(),
        }
    }

    pub fn source(&self) -> DataSource {
        self.source
    }

    pub fn models(&self) -> &[NNModel] {
        &self.models
    }

    pub fn model(&self, id: i64) -> Option<&NNModel> {
        self.models.iter().find(|m| m.id == id)
    }

    pub async fn activate(&mut self, api: &ApiClient) -> Result<(), CliError> {
        self.models = api.models().list(self.source).await?;
        Ok(())
    }

    /// Switch the active data source: discard state and refetch.
    pub async fn switch_source(
        &mut self,
        api: &ApiClient,
        source: DataSource,
    ) -> Result<(), CliError> {
        self.source = source;
        self.models.clear();
        self.activate(api).await
    }

    /// Distinct symbols present in the collection, in first-seen order.
    pub fn model_symbols(&self) -> Vec<SymbolName> {
        let mut seen = Vec::new();
        for model in &self.models {
            if !seen.contains(&model.symbol_name) {
                seen.push(model.symbol_name.clone());
            }
        }
        seen
    }

    pub fn filtered(&self, filter: &ModelFilter) -> Vec<&NNModel> {
        self.models.iter().filter(|m| filter.matches(m)).collect()
    }

    /// Create a model and append it locally.
    pub async fn create(
        &mut self,
        api: &ApiClient,
        request: CreateModelRequest,
    ) -> Result<NNModel, CliError> {
        let created = api.models().create(self.source, &request).await?;
        self.models.push(created.clone());
        Ok(created)
    }

    /// Trigger a training run. On success the local model transitions to
    /// IN_TRAINING immediately, without waiting for a server refresh.
    pub async fn train(
        &mut self,
        api: &ApiClient,
        model_id: i64,
        config: TrainingConfig,
    ) -> Result<(), CliError> {
        let model = self
            .model(model_id)
            .ok_or(CliError::UnknownModel { id: model_id })?;
        if model.train_disabled() {
            return Err(CliError::TrainingInFlight { id: model_id });
        }

        let mut patch = ModelPatch::status(NNModelStatus::InTraining).with_patience(config.patience);
        if let Some((start, end)) = config.data_range {
            patch = patch.with_data_range(start, end);
        }

        api.models().update(self.source, model_id, &patch).await?;
        tracing::info!(model_id, "training requested");

        if let Some(model) = self.models.iter_mut().find(|m| m.id == model_id) {
            model.status = NNModelStatus::InTraining;
        }
        Ok(())
    }

    /// Run inference and append the result to the owning model.
    pub async fn predict(
        &mut self,
        api: &ApiClient,
        model_id: i64,
    ) -> Result<Prediction, CliError> {
        let model = self
            .model(model_id)
            .ok_or(CliError::UnknownModel { id: model_id })?;
        if model.predict_disabled() {
            return Err(CliError::ModelNotTrained { id: model_id });
        }

        let prediction = api.predictions().create(self.source, model_id).await?;

        if let Some(model) = self.models.iter_mut().find(|m| m.id == model_id) {
            model.predictions.push(prediction.clone());
        }
        Ok(prediction)
    }

    /// Delete a model and remove it locally. Returns the removed model.
    pub async fn delete(&mut self, api: &ApiClient, model_id: i64) -> Result<NNModel, CliError> {
        if self.model(model_id).is_none() {
            return Err(CliError::UnknownModel { id: model_id });
        }

        api.models().delete(self.source, model_id).await?;

        let index = self
            .models
            .iter()
            .position(|m| m.id == model_id)
            .ok_or(CliError::UnknownModel { id: model_id })?;
        Ok(self.models.remove(index))
    }
}
