use serde::Serialize;

use crate::api::{ApiClient, ApiError};
use crate::domain::Prediction;
use crate::http::HttpMethod;
use crate::DataSource;

const RESOURCE: &str = "predictions";

/// Prediction listing and creation.
pub struct PredictionsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PredictionsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Every prediction stored for the data source. The history view
    /// normally aggregates from models instead; this is the direct listing
    /// the contract also offers.
    pub async fn list(&self, source: DataSource) -> Result<Vec<Prediction>, ApiError> {
        self.client
            .get_json(self.client.resource_url(source, RESOURCE))
            .await
    }

    /// Run inference for a model and return the stored result.
    pub async fn create(
        &self,
        source: DataSource,
        model_id: i64,
    ) -> Result<Prediction, ApiError> {
        self.client
            .send_json(
                HttpMethod::Post,
                self.client.resource_url(source, RESOURCE),
                &CreatePredictionRequest { model_id },
            )
            .await
    }
}

#[derive(Debug, Serialize)]
struct CreatePredictionRequest {
    model_id: i64,
}
