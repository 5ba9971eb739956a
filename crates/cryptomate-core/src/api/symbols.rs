use serde::Serialize;

use crate::api::{ApiClient, ApiError};
use crate::domain::{Symbol, SymbolName};
use crate::http::HttpMethod;
use crate::DataSource;

const RESOURCE: &str = "symbols";

/// Symbol listing and selection.
pub struct SymbolsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SymbolsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Symbols currently known to the backend.
    pub async fn list(&self, source: DataSource) -> Result<Vec<Symbol>, ApiError> {
        self.client
            .get_json(self.client.resource_url(source, RESOURCE))
            .await
    }

    /// Ask the backend to pull fresh symbols from the upstream provider,
    /// then return the merged list.
    pub async fn refresh(&self, source: DataSource) -> Result<Vec<Symbol>, ApiError> {
        let url = format!("{}?fetch=true", self.client.resource_url(source, RESOURCE));
        self.client.get_json(url).await
    }

    /// Persist a symbol's selection flag. One PATCH per call.
    pub async fn set_selected(
        &self,
        source: DataSource,
        name: &SymbolName,
        selected: bool,
    ) -> Result<(), ApiError> {
        let url = self.client.item_url(source, RESOURCE, name.as_str());
        self.client
            .send_json_expect_success(HttpMethod::Patch, url, &SelectedPatch { selected })
            .await
    }
}

#[derive(Debug, Serialize)]
struct SelectedPatch {
    selected: bool,
}
