use cryptomate_core::{ApiClient, DataSource, Symbol, SymbolName};
use serde_json::json;

use crate::cli::{SymbolsCommand, SymbolsListArgs};
use crate::error::CliError;
use crate::output::CommandOutput;
use crate::pages::SymbolsPage;

pub async fn run(
    command: &SymbolsCommand,
    api: &ApiClient,
    source: DataSource,
) -> Result<CommandOutput, CliError> {
    let mut page = SymbolsPage::new(source);

    match command {
        SymbolsCommand::List(args) => {
            page.activate(api).await?;
            Ok(list_output(&page, args))
        }
        SymbolsCommand::Refresh => {
            page.refresh(api).await?;
            let args = SymbolsListArgs {
                selected: false,
                filter: None,
            };
            Ok(list_output(&page, &args))
        }
        SymbolsCommand::Select(args) => set_selected(&mut page, api, &args.names, true).await,
        SymbolsCommand::Deselect(args) => set_selected(&mut page, api, &args.names, false).await,
    }
}

fn list_output(page: &SymbolsPage, args: &SymbolsListArgs) -> CommandOutput {
    let filtered: Vec<&Symbol> = match &args.filter {
        Some(query) => page.filter_symbols(query),
        None => page.symbols().iter().collect(),
    };
    let visible: Vec<&Symbol> = filtered
        .into_iter()
        .filter(|s| !args.selected || s.selected)
        .collect();

    let rows = visible
        .iter()
        .map(|symbol| {
            vec![
                symbol.name.to_string(),
                symbol.selected.to_string(),
                symbol
                    .bars_first_day
                    .map(|day| day.to_string())
                    .unwrap_or_default(),
                symbol
                    .bars_last_day
                    .map(|day| day.to_string())
                    .unwrap_or_default(),
            ]
        })
        .collect();

    CommandOutput::json(json!({
        "data_source": page.source(),
        "count": visible.len(),
        "symbols": visible,
    }))
    .with_table(vec!["name", "selected", "first_bar", "last_bar"], rows)
}

async fn set_selected(
    page: &mut SymbolsPage,
    api: &ApiClient,
    names: &[String],
    selected: bool,
) -> Result<CommandOutput, CliError> {
    page.activate(api).await?;

    for raw in names {
        let name = SymbolName::parse(raw)?;
        page.mark_selected(&name, selected)?;
    }

    let written = page.save(api).await?;
    let rows = written
        .iter()
        .map(|name| vec![name.to_string(), selected.to_string()])
        .collect();

    Ok(CommandOutput::json(json!({
        "data_source": page.source(),
        "selected": selected,
        "updated": written,
    }))
    .with_table(vec!["name", "selected"], rows))
}
