use std::path::PathBuf;

use cryptomate_core::{
    export, ApiClient, Bar, DataSource, Day, SymbolName,
};
use serde_json::json;

use crate::cli::{BarsCommand, BarsExportArgs, BarsShowArgs, BarsSymbolArgs};
use crate::error::CliError;
use crate::output::CommandOutput;
use crate::pages::BarsPanel;

pub async fn run(
    command: &BarsCommand,
    api: &ApiClient,
    source: DataSource,
) -> Result<CommandOutput, CliError> {
    let mut panel = BarsPanel::new(source);

    match command {
        BarsCommand::Show(args) => show(&mut panel, api, args).await,
        BarsCommand::Refresh(args) => refresh(&mut panel, api, args).await,
        BarsCommand::Export(args) => export_csv(&mut panel, api, args).await,
    }
}

async fn show(
    panel: &mut BarsPanel,
    api: &ApiClient,
    args: &BarsShowArgs,
) -> Result<CommandOutput, CliError> {
    let symbol = SymbolName::parse(&args.symbol)?;
    panel.expand(api, &symbol).await?;

    let window: Vec<&Bar> = match (&args.start, &args.end) {
        (None, None) if args.all => panel.bars().iter().collect(),
        (None, None) => panel.candlestick_window().iter().collect(),
        (start, end) => {
            let start = match start {
                Some(raw) => Day::parse(raw)?,
                None => panel
                    .day_span()
                    .map(|(first, _)| first)
                    .ok_or_else(|| CliError::NoBars {
                        symbol: symbol.to_string(),
                    })?,
            };
            let end = match end {
                Some(raw) => Day::parse(raw)?,
                None => panel
                    .day_span()
                    .map(|(_, last)| last)
                    .ok_or_else(|| CliError::NoBars {
                        symbol: symbol.to_string(),
                    })?,
            };
            panel.window_between(start, end)
        }
    };

    let rows = window
        .iter()
        .map(|bar| {
            vec![
                bar.day.to_string(),
                bar.open.to_string(),
                bar.high.to_string(),
                bar.low.to_string(),
                bar.close.to_string(),
                bar.volume.map(|v| v.to_string()).unwrap_or_default(),
            ]
        })
        .collect();

    Ok(CommandOutput::json(json!({
        "data_source": panel.source(),
        "symbol": symbol,
        "count": window.len(),
        "total_stored": panel.bars().len(),
        "fetch_disabled": panel.fetch_disabled(Day::today_utc()),
        "bars": window,
    }))
    .with_table(
        vec!["day", "open", "high", "low", "close", "volume"],
        rows,
    ))
}

async fn refresh(
    panel: &mut BarsPanel,
    api: &ApiClient,
    args: &BarsSymbolArgs,
) -> Result<CommandOutput, CliError> {
    let symbol = SymbolName::parse(&args.symbol)?;
    panel.expand(api, &symbol).await?;
    panel.refresh_upstream(api, Day::today_utc()).await?;

    let span = panel.day_span();
    Ok(CommandOutput::json(json!({
        "data_source": panel.source(),
        "symbol": symbol,
        "count": panel.bars().len(),
        "first_day": span.map(|(first, _)| first),
        "last_day": span.map(|(_, last)| last),
    })))
}

async fn export_csv(
    panel: &mut BarsPanel,
    api: &ApiClient,
    args: &BarsExportArgs,
) -> Result<CommandOutput, CliError> {
    let symbol = SymbolName::parse(&args.symbol)?;
    panel.expand(api, &symbol).await?;

    if panel.bars().is_empty() {
        return Err(CliError::NoBars {
            symbol: symbol.to_string(),
        });
    }

    let path = match &args.output {
        Some(output) => PathBuf::from(output),
        None => PathBuf::from(export::export_file_name(panel.source(), symbol.as_str())),
    };

    export::write_bars_csv(&path, panel.bars())?;
    tracing::info!(path = %path.display(), rows = panel.bars().len(), "bar series exported");

    Ok(CommandOutput::json(json!({
        "data_source": panel.source(),
        "symbol": symbol,
        "output": path.display().to_string(),
        "rows_exported": panel.bars().len(),
    })))
}
