//! CLI argument definitions for cryptomate.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `symbols` | List, refresh, and select instrument symbols |
//! | `bars` | Show, refresh, and export historical daily bars |
//! | `models` | Manage neural-network prediction models |
//! | `history` | Review past predictions across models |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--data-source` | `binance` | Backend data source (binance, yfinance) |
//! | `--base-url` | `http://localhost:5000` | Backend base URL (`CRYPTOMATE_BASE_URL`) |
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | `10000` | Request timeout in ms |
//!
//! # Examples
//!
//! ```bash
//! # List selected symbols
//! cryptomate symbols list --selected
//!
//! # Export a bar series to CSV
//! cryptomate bars export BTCUSDT
//!
//! # Create and train a model
//! cryptomate models create BTCUSDT --algorithm lstm --window small
//! cryptomate models train 1 --patience 30
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// cryptomate - browse symbols, bars, and prediction models
///
/// A client for the cryptomate prediction backend. Every command targets one
/// of two backend data sources (Binance or Yahoo Finance) selected with
/// `--data-source`.
#[derive(Debug, Parser)]
#[command(
    name = "cryptomate",
    author,
    version,
    about = "Client for the cryptomate market-prediction backend"
)]
pub struct Cli {
    /// Backend data source the command targets.
    #[arg(long, short = 's', global = true, value_enum, default_value_t = SourceArg::Binance)]
    pub data_source: SourceArg,

    /// Base URL of the backend.
    #[arg(
        long,
        global = true,
        env = "CRYPTOMATE_BASE_URL",
        default_value = "http://localhost:5000"
    )]
    pub base_url: String,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 10_000)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// Backend data source selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    /// Binance spot pairs (e.g. BTCUSDT).
    Binance,
    /// Yahoo Finance pairs (e.g. BTC-USD).
    Yfinance,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON document.
    Json,
    /// ASCII table for terminal display.
    Table,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// 📇 List, refresh, and select instrument symbols.
    Symbols(SymbolsArgs),

    /// 📊 Show, refresh, and export historical daily bars.
    Bars(BarsArgs),

    /// 🧠 Manage neural-network prediction models.
    Models(ModelsArgs),

    /// 🗓 Review past predictions across models.
    History(HistoryArgs),
}

/// Arguments for the `symbols` command group.
#[derive(Debug, Args)]
pub struct SymbolsArgs {
    #[command(subcommand)]
    pub command: SymbolsCommand,
}

#[derive(Debug, Subcommand)]
pub enum SymbolsCommand {
    /// List symbols known to the backend.
    ///
    /// # Examples
    ///
    ///   cryptomate symbols list
    ///   cryptomate symbols list --selected --filter btc
    List(SymbolsListArgs),

    /// Pull fresh symbols from the upstream provider, then list the result.
    Refresh,

    /// Mark symbols as selected for model building.
    ///
    /// Issues one update per symbol name given.
    Select(SymbolsSelectArgs),

    /// Clear the selection flag on symbols.
    Deselect(SymbolsSelectArgs),
}

/// Arguments for `symbols list`.
#[derive(Debug, Args)]
pub struct SymbolsListArgs {
    /// Only show selected symbols.
    #[arg(long, default_value_t = false)]
    pub selected: bool,

    /// Case-insensitive substring filter on the symbol name.
    #[arg(long)]
    pub filter: Option<String>,
}

/// Arguments for `symbols select` / `symbols deselect`.
#[derive(Debug, Args)]
pub struct SymbolsSelectArgs {
    /// One or more symbol names (e.g. BTCUSDT, ETH-USD).
    #[arg(required = true, num_args = 1..)]
    pub names: Vec<String>,
}

/// Arguments for the `bars` command group.
#[derive(Debug, Args)]
pub struct BarsArgs {
    #[command(subcommand)]
    pub command: BarsCommand,
}

#[derive(Debug, Subcommand)]
pub enum BarsCommand {
    /// Show the stored bar series for a symbol.
    ///
    /// Without a range, the most recent 90 bars are shown (the candlestick
    /// window); `--start`/`--end` select an inclusive day range instead.
    ///
    /// # Examples
    ///
    ///   cryptomate bars show BTCUSDT
    ///   cryptomate bars show BTCUSDT --start 2024-01-01 --end 2024-03-01
    ///   cryptomate bars show BTCUSDT --all
    Show(BarsShowArgs),

    /// Pull new bars from the upstream market-data provider.
    ///
    /// Refused while the stored series is already current (the last bar is
    /// dated today, UTC).
    Refresh(BarsSymbolArgs),

    /// Export the stored bar series to CSV.
    ///
    /// Writes `{data_source}-{symbol}-data.csv` unless `--output` is given.
    Export(BarsExportArgs),
}

/// Arguments for `bars show`.
#[derive(Debug, Args)]
pub struct BarsShowArgs {
    /// Symbol to show bars for.
    pub symbol: String,

    /// First day of the range (YYYY-MM-DD), inclusive.
    #[arg(long)]
    pub start: Option<String>,

    /// Last day of the range (YYYY-MM-DD), inclusive.
    #[arg(long)]
    pub end: Option<String>,

    /// Show the full series instead of the trailing window.
    #[arg(long, default_value_t = false)]
    pub all: bool,
}

/// Arguments for bar commands that only take a symbol.
#[derive(Debug, Args)]
pub struct BarsSymbolArgs {
    /// Symbol to operate on.
    pub symbol: String,
}

/// Arguments for `bars export`.
#[derive(Debug, Args)]
pub struct BarsExportArgs {
    /// Symbol whose series is exported.
    pub symbol: String,

    /// Output file path; defaults to `{data_source}-{symbol}-data.csv` in
    /// the working directory.
    #[arg(long)]
    pub output: Option<String>,
}

/// Arguments for the `models` command group.
#[derive(Debug, Args)]
pub struct ModelsArgs {
    #[command(subcommand)]
    pub command: ModelsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ModelsCommand {
    /// List models with their status and latest prediction.
    ///
    /// # Examples
    ///
    ///   cryptomate models list
    ///   cryptomate models list --symbol BTCUSDT --status trained
    List(ModelsListArgs),

    /// Create a model bound to one symbol.
    ///
    /// The algorithm is one of the base networks (lstm, jordan);
    /// `--sequencing` switches to its sequence-to-sequence variant.
    ///
    /// # Examples
    ///
    ///   cryptomate models create BTCUSDT --algorithm lstm --window tiny
    ///   cryptomate models create ETH-USD --algorithm jordan --window medium --sequencing
    Create(ModelsCreateArgs),

    /// Start a training run for a model.
    ///
    /// The training range defaults to the full stored bar span; passing
    /// `--start`/`--end` narrows it.
    Train(ModelsTrainArgs),

    /// Run inference on a trained model.
    Predict(ModelsIdArgs),

    /// Delete a model and its predictions.
    Delete(ModelsIdArgs),
}

/// Arguments for `models list`.
#[derive(Debug, Args)]
pub struct ModelsListArgs {
    /// Only models for these symbols.
    #[arg(long)]
    pub symbol: Vec<String>,

    /// Only models using these algorithms (lstm, jordan, lstm_seq, jordan_seq).
    #[arg(long)]
    pub algorithm: Vec<String>,

    /// Only models in these statuses (created, in_training, trained, errored).
    #[arg(long)]
    pub status: Vec<String>,
}

/// Arguments for `models create`.
#[derive(Debug, Args)]
pub struct ModelsCreateArgs {
    /// Symbol the model predicts.
    pub symbol: String,

    /// Base network algorithm (lstm, jordan).
    #[arg(long)]
    pub algorithm: String,

    /// Prediction window (tiny = 1 day, small = 7 days, medium = 15 days).
    #[arg(long)]
    pub window: String,

    /// Use the sequence-to-sequence variant of the algorithm.
    #[arg(long, default_value_t = false)]
    pub sequencing: bool,
}

/// Arguments for `models train`.
#[derive(Debug, Args)]
pub struct ModelsTrainArgs {
    /// Model id.
    pub id: i64,

    /// First day of training data (YYYY-MM-DD); defaults to the oldest bar.
    #[arg(long)]
    pub start: Option<String>,

    /// Last day of training data (YYYY-MM-DD); defaults to the newest bar.
    #[arg(long)]
    pub end: Option<String>,

    /// Early-stopping patience in epochs.
    #[arg(long, default_value_t = 60)]
    pub patience: u32,
}

/// Arguments for model commands that only take an id.
#[derive(Debug, Args)]
pub struct ModelsIdArgs {
    /// Model id.
    pub id: i64,
}

/// Arguments for the `history` command.
#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Only predictions for these symbols.
    #[arg(long)]
    pub symbol: Vec<String>,

    /// Only predictions with these results (strong_buy, buy, hold, sell, strong_sell).
    #[arg(long)]
    pub result: Vec<String>,

    /// Read the backend's prediction listing directly instead of
    /// aggregating from models.
    #[arg(long, default_value_t = false)]
    pub remote: bool,
}
