use clap::Parser;
use learnflow::data::storage::DataDirectory;
use learnflow::{App, LaunchOptions, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "learnflow")]
#[command(about = "Pick the learning domains for your learnflow account")]
struct Args {
    /// Path to the data directory (default: ~/.learnflow/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// YAML catalog to pick from instead of the data directory's catalog.yaml
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Minimum number of domains required to finish
    #[arg(short, long)]
    min_domains: Option<usize>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(DataDirectory::default_path);

    init_logging(&data_dir, &args.log_level)?;

    let options = LaunchOptions {
        catalog: args.catalog,
        min_domains: args.min_domains,
    };
    let mut app = App::with_data_dir(data_dir, options);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
