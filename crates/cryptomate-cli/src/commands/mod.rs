mod bars;
mod history;
mod models;
mod symbols;

use std::sync::Arc;

use cryptomate_core::{ApiClient, ApiConfig, DataSource, ReqwestHttpClient};

use crate::cli::{Cli, Command, SourceArg};
use crate::error::CliError;
use crate::output::CommandOutput;

pub async fn run(cli: &Cli) -> Result<CommandOutput, CliError> {
    let config = ApiConfig::new(&cli.base_url)?.with_timeout_ms(cli.timeout_ms);
    let api = ApiClient::new(config, Arc::new(ReqwestHttpClient::new()));
    let source = to_data_source(cli.data_source);

    match &cli.command {
        Command::Symbols(args) => symbols::run(&args.command, &api, source).await,
        Command::Bars(args) => bars::run(&args.command, &api, source).await,
        Command::Models(args) => models::run(&args.command, &api, source).await,
        Command::History(args) => history::run(args, &api, source).await,
    }
}

const fn to_data_source(source: SourceArg) -> DataSource {
    match source {
        SourceArg::Binance => DataSource::Binance,
        SourceArg::Yfinance => DataSource::Yfinance,
    }
}
