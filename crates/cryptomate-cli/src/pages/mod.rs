//! Page-level state objects.
//!
//! Each page owns the in-memory collection behind one view and repeats the
//! same cycle: fetch on activation, patch locally after a successful
//! mutation instead of refetching, and discard everything when the data
//! source switches. Mutations that fail leave the collection untouched, so
//! the local state never drifts ahead of the backend.

mod bars_panel;
mod history;
mod models;
mod symbols;

pub use bars_panel::BarsPanel;
pub use history::HistoryPage;
pub use models::{ModelFilter, ModelsPage};
pub use symbols::SymbolsPage;
