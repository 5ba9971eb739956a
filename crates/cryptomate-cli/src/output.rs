use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Tabular projection of a command result.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// Uniform command result: a JSON document plus an optional table view.
#[derive(Debug)]
pub struct CommandOutput {
    pub data: Value,
    pub table: Option<Table>,
}

impl CommandOutput {
    pub fn json(data: Value) -> Self {
        Self { data, table: None }
    }

    pub fn with_table(mut self, headers: Vec<&'static str>, rows: Vec<Vec<String>>) -> Self {
        self.table = Some(Table { headers, rows });
        self
    }
}

pub fn render(output: &CommandOutput, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(&output.data)?
            } else {
                serde_json::to_string(&output.data)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => match &output.table {
            Some(table) => render_table(table),
            None => {
                // Not every result tabulates; fall back to readable JSON.
                let payload = serde_json::to_string_pretty(&output.data)?;
                println!("{payload}");
            }
        },
    }

    Ok(())
}

fn render_table(table: &Table) {
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.len()).collect();
    for row in &table.rows {
        for (index, cell) in row.iter().enumerate() {
            if index < widths.len() {
                widths[index] = widths[index].max(cell.len());
            }
        }
    }

    let header_line: Vec<String> = table
        .headers
        .iter()
        .enumerate()
        .map(|(index, header)| format!("{header:<width$}", width = widths[index]))
        .collect();
    println!("{}", header_line.join("  "));

    let separator: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    println!("{}", separator.join("  "));

    for row in &table.rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                let width = widths.get(index).copied().unwrap_or(cell.len());
                format!("{cell:<width$}")
            })
            .collect();
        println!("{}", cells.join("  "));
    }
}
