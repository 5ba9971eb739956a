use serde::Serialize;

use crate::api::{ApiClient, ApiError};
use crate::domain::{Day, NNAlgorithm, NNModel, NNModelStatus, PredictionWindow, SymbolName};
use crate::http::HttpMethod;
use crate::DataSource;

const RESOURCE: &str = "models";

/// Body of POST `/{ds}/models`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateModelRequest {
    pub symbol_name: SymbolName,
    pub algorithm: NNAlgorithm,
    pub prediction_window: PredictionWindow,
}

/// Partial update for PATCH `/{ds}/models/{id}`. Only set fields are sent;
/// the training flow sends status + patience, with the data range included
/// only when it deviates from the full loaded span.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModelPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NNModelStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_start: Option<Day>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_end: Option<Day>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patience: Option<u32>,
}

impl ModelPatch {
    pub fn status(status: NNModelStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn with_data_range(mut self, start: Day, end: Day) -> Self {
        self.data_start = Some(start);
        self.data_end = Some(end);
        self
    }

    pub fn with_patience(mut self, patience: u32) -> Self {
        self.patience = Some(patience);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.data_start.is_none()
            && self.data_end.is_none()
            && self.patience.is_none()
    }
}

/// Model CRUD plus the training trigger (a status PATCH).
pub struct ModelsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ModelsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// All models for the data source, each with its embedded predictions.
    pub async fn list(&self, source: DataSource) -> Result<Vec<NNModel>, ApiError> {
        self.client
            .get_json(self.client.resource_url(source, RESOURCE))
            .await
    }

    /// Create a model bound to one symbol. Returns the created resource.
    pub async fn create(
        &self,
        source: DataSource,
        request: &CreateModelRequest,
    ) -> Result<NNModel, ApiError> {
        self.client
            .send_json(
                HttpMethod::Post,
                self.client.resource_url(source, RESOURCE),
                request,
            )
            .await
    }

    /// Apply a partial update. Sending `IN_TRAINING` starts a training run
    /// server-side; the backend answers 409 if one is already in flight.
    pub async fn update(
        &self,
        source: DataSource,
        model_id: i64,
        patch: &ModelPatch,
    ) -> Result<(), ApiError> {
        let url = self
            .client
            .item_url(source, RESOURCE, &model_id.to_string());
        self.client
            .send_json_expect_success(HttpMethod::Patch, url, patch)
            .await
    }

    pub async fn delete(&self, source: DataSource, model_id: i64) -> Result<(), ApiError> {
        let url = self
            .client
            .item_url(source, RESOURCE, &model_id.to_string());
        self.client
            .send_expect_success(HttpMethod::Delete, url)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = ModelPatch::status(NNModelStatus::InTraining).with_patience(60);
        let json = serde_json::to_string(&patch).expect("must serialize");
        assert_eq!(json, r#"{"status":1,"patience":60}"#);
    }

    #[test]
    fn patch_with_range_includes_iso_days() {
        let start = Day::parse("2023-01-01").expect("day");
        let end = Day::parse("2023-06-30").expect("day");
        let patch = ModelPatch::status(NNModelStatus::InTraining)
            .with_data_range(start, end)
            .with_patience(30);

        let json = serde_json::to_string(&patch).expect("must serialize");
        assert_eq!(
            json,
            r#"{"status":1,"data_start":"2023-01-01","data_end":"2023-06-30","patience":30}"#
        );
    }
}
