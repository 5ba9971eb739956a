use crate::api::{ApiClient, ApiError};
use crate::domain::{Bar, SymbolName};
use crate::DataSource;

const RESOURCE: &str = "bars";

/// Historical daily bars per symbol.
pub struct BarsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> BarsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Bars stored for a symbol, oldest first. Unknown symbols yield an
    /// empty list, mirroring the backend.
    pub async fn list(&self, source: DataSource, symbol: &SymbolName) -> Result<Vec<Bar>, ApiError> {
        self.client
            .get_json(self.client.item_url(source, RESOURCE, symbol.as_str()))
            .await
    }

    /// Ask the backend to pull new bars from the upstream market-data
    /// provider before returning the series.
    pub async fn refresh(
        &self,
        source: DataSource,
        symbol: &SymbolName,
    ) -> Result<Vec<Bar>, ApiError> {
        let url = format!(
            "{}?fetch=true",
            self.client.item_url(source, RESOURCE, symbol.as_str())
        );
        self.client.get_json(url).await
    }
}
