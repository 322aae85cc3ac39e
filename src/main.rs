//! Ledger-match command-line entrypoint.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mimalloc::MiMalloc;

use ledgermatch::accounts::{Category, CategorySelection, Subcategory};
use ledgermatch::chart::AccountTable;
use ledgermatch::config::{Config, MatchingMode};
use ledgermatch::embedding::SentenceEncoder;
use ledgermatch::pipeline::{MatchRequest, MatchingPipeline};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser, Debug)]
#[command(
    name = "ledger-match",
    about = "Find the closest existing ledger accounts for a newly described account"
)]
struct Cli {
    /// Top-level category (bilanz or guv)
    #[arg(long)]
    category: Category,

    /// Optional subcategory (aktiva, passiva, ertrag, aufwand, ...)
    #[arg(long)]
    subcategory: Option<Subcategory>,

    /// Name of the new account
    #[arg(long)]
    name: String,

    /// Free-text description of the new account
    #[arg(long, default_value = "")]
    description: String,

    /// Chart-of-accounts workbook
    #[arg(long, env = "LEDGER_MATCH_TABLE")]
    table: Option<PathBuf>,

    /// Result workbook
    #[arg(long, env = "LEDGER_MATCH_OUTPUT")]
    output: Option<PathBuf>,

    /// Matching preset (basic or cascading)
    #[arg(long, env = "LEDGER_MATCH_MODE")]
    mode: Option<MatchingMode>,

    /// Skip writing the result workbook
    #[arg(long, default_value_t = false)]
    no_export: bool,

    /// Print the result table as JSON instead of a text preview
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::from_env_with_mode(cli.mode)?;
    if let Some(table) = cli.table {
        config.table_path = table;
    }
    if let Some(output) = cli.output {
        config.output_path = output;
    }
    config.validate()?;

    tracing::info!(
        mode = %config.mode,
        model = %config.model,
        thresholds = %config.thresholds,
        fallback_k = config.fallback_k,
        subcategories = config.subcategories,
        "Ledger matcher starting"
    );

    let table = AccountTable::load(&config.table_path)
        .with_context(|| format!("loading {}", config.table_path.display()))?;
    tracing::info!(
        path = %config.table_path.display(),
        accounts = table.len(),
        "Chart of accounts loaded"
    );

    let encoder = SentenceEncoder::load(config.encoder_config()?)?;
    let pipeline = MatchingPipeline::new(encoder, config.pipeline_options());

    let selection = CategorySelection::new(cli.category, cli.subcategory)?;
    let request = MatchRequest::new(cli.name, cli.description, selection);
    let report = pipeline.run(table.records(), &request)?;

    println!("{}", report.status);
    if cli.json {
        println!("{}", report.table.to_json()?);
    } else {
        println!("{}", report.table.to_text());
    }

    if !cli.no_export {
        report.table.write_xlsx(&config.output_path)?;
        tracing::info!(
            path = %config.output_path.display(),
            rows = report.table.len(),
            "Result workbook written"
        );
    }

    Ok(())
}
