use cryptomate_core::{freshness, ApiClient, Bar, DataSource, Day, SymbolName};

use crate::error::CliError;

/// Trailing window the chart shows by default.
pub const CANDLESTICK_WINDOW: usize = 90;

/// Detail view state for one symbol's bar series.
///
/// Expanding a symbol fetches its bars exactly once; re-expanding the same
/// symbol is a no-op. An upstream refresh is available on demand but refused
/// while the series is already current as of today (UTC).
pub struct BarsPanel {
    source: DataSource,
    expanded: Option<SymbolName>,
    bars: Vec<Bar>,
    loading: bool,
}

impl BarsPanel {
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            expanded: None,
            bars: Vec::new(),
            loading: false,
        }
    }

    pub fn source(&self) -> DataSource {
        self.source
    }

    pub fn expanded(&self) -> Option<&SymbolName> {
        self.expanded.as_ref()
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Expand a symbol, lazily fetching its series. Returns whether a fetch
    /// happened (false when the symbol was already expanded).
    pub async fn expand(
        &mut self,
        api: &ApiClient,
        symbol: &SymbolName,
    ) -> Result<bool, CliError> {
        if self.expanded.as_ref() == Some(symbol) {
            return Ok(false);
        }

        self.loading = true;
        let result = api.bars().list(self.source, symbol).await;
        self.loading = false;

        self.bars = result?;
        self.expanded = Some(symbol.clone());
        Ok(true)
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
        self.bars.clear();
    }

    /// Switch the active data source: discard the expansion entirely.
    pub fn switch_source(&mut self, source: DataSource) {
        self.source = source;
        self.collapse();
    }

    /// True when an upstream fetch would be redundant today.
    pub fn fetch_disabled(&self, today: Day) -> bool {
        freshness::series_fetch_disabled(&self.bars, today)
    }

    /// Pull new bars from the upstream provider for the expanded symbol.
    /// Refused while [`fetch_disabled`](Self::fetch_disabled) holds.
    pub async fn refresh_upstream(&mut self, api: &ApiClient, today: Day) -> Result<(), CliError> {
        let symbol = self
            .expanded
            .clone()
            .ok_or_else(|| CliError::Command(String::from("no symbol expanded")))?;

        if self.fetch_disabled(today) {
            return Err(CliError::BarsUpToDate {
                symbol: symbol.to_string(),
            });
        }

        self.loading = true;
        let result = api.bars().refresh(self.source, &symbol).await;
        self.loading = false;

        self.bars = result?;
        Ok(())
    }

    /// Default chart window: the most recent bars.
    pub fn candlestick_window(&self) -> &[Bar] {
        let start = self.bars.len().saturating_sub(CANDLESTICK_WINDOW);
        &self.bars[start..]
    }

    /// Bars within an inclusive day range.
    pub fn window_between(&self, start: Day, end: Day) -> Vec<&Bar> {
        self.bars
            .iter()
            .filter(|bar| bar.day >= start && bar.day <= end)
            .collect()
    }

    /// Day span of the loaded series, used to seed the training stepper.
    pub fn day_span(&self) -> Option<(Day, Day)> {
        match (self.bars.first(), self.bars.last()) {
            (Some(first), Some(last)) => Some((first.day, last.day)),
            _ => None,
        }
    }
}
