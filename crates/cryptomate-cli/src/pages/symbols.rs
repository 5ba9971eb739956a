use std::collections::BTreeMap;

use cryptomate_core::{ApiClient, DataSource, Symbol, SymbolName};

use crate::error::CliError;

const SUGGESTION_LIMIT: usize = 20;

/// Symbols view state: the full collection for the active data source plus
/// the set of pending selection changes.
///
/// Selection edits are staged in a touched-set and written out one PATCH per
/// symbol by [`save`](Self::save); each symbol's local flag flips only once
/// its PATCH succeeds.
pub struct SymbolsPage {
    source: DataSource,
    symbols: Vec<Symbol>,
    touched: BTreeMap<SymbolName, bool>,
}

impl SymbolsPage {
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            symbols: Vec::new(),
            touched: BTreeMap::new(),
        }
    }

    pub fn source(&self) -> DataSource {
        self.source
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Load the collection for the active source, dropping staged edits.
    pub async fn activate(&mut self, api: &ApiClient) -> Result<(), CliError> {
        self.symbols = api.symbols().list(self.source).await?;
        self.touched.clear();
        Ok(())
    }

    /// Switch the active data source: discard state and refetch.
    pub async fn switch_source(
        &mut self,
        api: &ApiClient,
        source: DataSource,
    ) -> Result<(), CliError> {
        self.source = source;
        self.symbols.clear();
        self.touched.clear();
        self.activate(api).await
    }

    /// Pull fresh symbols from the upstream provider.
    pub async fn refresh(&mut self, api: &ApiClient) -> Result<(), CliError> {
        self.symbols = api.symbols().refresh(self.source).await?;
        Ok(())
    }

    pub fn selected_symbols(&self) -> Vec<&Symbol> {
        self.symbols.iter().filter(|s| s.selected).collect()
    }

    /// Case-insensitive substring filter over the whole collection.
    pub fn filter_symbols(&self, query: &str) -> Vec<&Symbol> {
        let needle = query.trim().to_lowercase();
        self.symbols
            .iter()
            .filter(|s| s.name.as_str().to_lowercase().contains(&needle))
            .collect()
    }

    /// Picker suggestions: unselected symbols matching the query, capped.
    pub fn picker_suggestions(&self, query: &str) -> Vec<&SymbolName> {
        let needle = query.trim().to_lowercase();
        self.symbols
            .iter()
            .filter(|s| !s.selected && s.name.as_str().to_lowercase().contains(&needle))
            .take(SUGGESTION_LIMIT)
            .map(|s| &s.name)
            .collect()
    }

    fn find(&self, name: &SymbolName) -> Option<&Symbol> {
        self.symbols.iter().find(|s| &s.name == name)
    }

    /// Stage a selection change for a known symbol.
    pub fn mark_selected(&mut self, name: &SymbolName, selected: bool) -> Result<(), CliError> {
        if self.find(name).is_none() {
            return Err(CliError::UnknownSymbol {
                name: name.to_string(),
            });
        }

        self.touched.insert(name.clone(), selected);
        Ok(())
    }

    pub fn touched_count(&self) -> usize {
        self.touched.len()
    }

    /// Persist staged selection changes, one PATCH per touched symbol.
    ///
    /// Returns the names written. On a failed PATCH the error propagates
    /// and the failed entry (plus any not yet attempted) stays staged; the
    /// local flags of already-persisted symbols keep their new values.
    pub async fn save(&mut self, api: &ApiClient) -> Result<Vec<SymbolName>, CliError> {
        let pending: Vec<(SymbolName, bool)> = self
            .touched
            .iter()
            .map(|(name, selected)| (name.clone(), *selected))
            .collect();

        let mut written = Vec::with_capacity(pending.len());
        for (name, selected) in pending {
            api.symbols()
                .set_selected(self.source, &name, selected)
                .await?;

            if let Some(symbol) = self.symbols.iter_mut().find(|s| s.name == name) {
                symbol.selected = selected;
            }
            self.touched.remove(&name);
            written.push(name);
        }

        Ok(written)
    }
}
