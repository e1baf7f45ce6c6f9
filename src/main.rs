use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use mxexport::services::export;
use mxexport::types::model::ExportMode;

#[derive(Parser, Debug)]
#[command(
    name = "mxexport",
    version,
    about = "Export the model inside Mendix .mpr project files to a YAML document tree"
)]
struct Cli {
    /// Directory scanned recursively for .mpr files
    #[arg(short, long, value_name = "DIR")]
    input: PathBuf,

    /// Directory the document tree is written into
    #[arg(short, long, value_name = "DIR")]
    output: PathBuf,

    /// Keep volatile internal attributes instead of pruning them
    #[arg(long)]
    raw: bool,

    /// Export mode; "advanced" enriches microflow documents, anything
    /// else behaves as "basic"
    #[arg(long, default_value_t = ExportMode::Basic)]
    mode: ExportMode,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();

    let report = export::export_model_tree(&cli.input, &cli.output, cli.raw, cli.mode)
        .await
        .with_context(|| format!("exporting models under {}", cli.input.display()))?;

    log::info!("Exported {} model file(s)", report.exported.len());
    if !report.all_succeeded() {
        anyhow::bail!("{} model file(s) failed to export", report.failed.len());
    }
    Ok(())
}
