use std::str::FromStr;

use cryptomate_core::{
    ApiClient, BaseAlgorithm, DataSource, Day, NNAlgorithm, NNModel, NNModelStatus,
    PredictionWindow, SymbolName,
};
use serde_json::json;

use crate::cli::{
    ModelsCommand, ModelsCreateArgs, ModelsIdArgs, ModelsListArgs, ModelsTrainArgs,
};
use crate::dialog::{CreateModelStepper, TrainingStepper};
use crate::error::CliError;
use crate::output::CommandOutput;
use crate::pages::{ModelFilter, ModelsPage};

pub async fn run(
    command: &ModelsCommand,
    api: &ApiClient,
    source: DataSource,
) -> Result<CommandOutput, CliError> {
    let mut page = ModelsPage::new(source);

    match command {
        ModelsCommand::List(args) => {
            page.activate(api).await?;
            list(&page, args)
        }
        ModelsCommand::Create(args) => create(&mut page, api, args).await,
        ModelsCommand::Train(args) => train(&mut page, api, args).await,
        ModelsCommand::Predict(args) => predict(&mut page, api, args).await,
        ModelsCommand::Delete(args) => delete(&mut page, api, args).await,
    }
}

fn list(page: &ModelsPage, args: &ModelsListArgs) -> Result<CommandOutput, CliError> {
    let mut filter = ModelFilter::default();
    for raw in &args.symbol {
        filter.symbols.push(SymbolName::parse(raw)?);
    }
    for raw in &args.algorithm {
        filter.algorithms.push(NNAlgorithm::from_str(raw)?);
    }
    for raw in &args.status {
        filter.statuses.push(NNModelStatus::from_str(raw)?);
    }

    let models = page.filtered(&filter);
    let rows = models.iter().map(|model| model_row(model)).collect();

    Ok(CommandOutput::json(json!({
        "data_source": page.source(),
        "count": models.len(),
        "symbols": page.model_symbols(),
        "models": models,
    }))
    .with_table(
        vec![
            "id",
            "symbol",
            "algorithm",
            "status",
            "window",
            "predictions",
            "created",
        ],
        rows,
    ))
}

fn model_row(model: &NNModel) -> Vec<String> {
    vec![
        model.id.to_string(),
        model.symbol_name.to_string(),
        model.algorithm.to_string(),
        model.status.to_string(),
        model.prediction_window.to_string(),
        model.predictions.len().to_string(),
        model.created.to_string(),
    ]
}

async fn create(
    page: &mut ModelsPage,
    api: &ApiClient,
    args: &ModelsCreateArgs,
) -> Result<CommandOutput, CliError> {
    let symbol = SymbolName::parse(&args.symbol)?;

    let mut stepper = CreateModelStepper::new();
    stepper
        .select_algorithm(BaseAlgorithm::from_str(&args.algorithm)?)
        .select_window(PredictionWindow::from_str(&args.window)?)
        .set_sequencing(args.sequencing);

    let request = stepper
        .submit(symbol)
        .ok_or_else(|| CliError::Command(String::from("model creation cancelled")))?;

    let created = page.create(api, request).await?;

    Ok(CommandOutput::json(json!({
        "data_source": page.source(),
        "message": "Model created! Review it with `cryptomate models list`.",
        "model": created,
    })))
}

async fn train(
    page: &mut ModelsPage,
    api: &ApiClient,
    args: &ModelsTrainArgs,
) -> Result<CommandOutput, CliError> {
    page.activate(api).await?;

    let model = page
        .model(args.id)
        .ok_or(CliError::UnknownModel { id: args.id })?;
    let symbol = model.symbol_name.clone();

    // The training range is seeded with the full span of the stored series,
    // which means fetching it first.
    let bars = api.bars().list(page.source(), &symbol).await?;
    let (first_day, last_day) = match (bars.first(), bars.last()) {
        (Some(first), Some(last)) => (first.day, last.day),
        _ => {
            return Err(CliError::NoBars {
                symbol: symbol.to_string(),
            })
        }
    };

    let mut stepper = TrainingStepper::new(first_day, last_day);
    if let Some(raw) = &args.start {
        stepper.set_start(Day::parse(raw)?);
    }
    if let Some(raw) = &args.end {
        stepper.set_end(Day::parse(raw)?);
    }
    stepper.set_patience(args.patience);

    page.train(api, args.id, stepper.submit()).await?;

    let model = page
        .model(args.id)
        .ok_or(CliError::UnknownModel { id: args.id })?;
    Ok(CommandOutput::json(json!({
        "data_source": page.source(),
        "model_id": args.id,
        "status": model.status,
        "message": format!("Training started for {symbol} (patience {})", args.patience),
    })))
}

async fn predict(
    page: &mut ModelsPage,
    api: &ApiClient,
    args: &ModelsIdArgs,
) -> Result<CommandOutput, CliError> {
    page.activate(api).await?;

    let prediction = page.predict(api, args.id).await?;
    let summary = page
        .model(args.id)
        .and_then(|model| model.latest_prediction_summary());

    Ok(CommandOutput::json(json!({
        "data_source": page.source(),
        "prediction": prediction,
        "summary": summary,
    })))
}

async fn delete(
    page: &mut ModelsPage,
    api: &ApiClient,
    args: &ModelsIdArgs,
) -> Result<CommandOutput, CliError> {
    page.activate(api).await?;

    let removed = page.delete(api, args.id).await?;
    Ok(CommandOutput::json(json!({
        "data_source": page.source(),
        "deleted": removed,
        "remaining": page.models().len(),
    })))
}
