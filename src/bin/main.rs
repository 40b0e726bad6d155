//! Retail Insights CLI - Serve the dashboard or run catalog queries directly
//!
//! Usage:
//!   retail-insights serve [--port <port>] [--open]
//!   retail-insights list
//!   retail-insights run <label> [--out <chart.svg>]
//!
//! Examples:
//!   retail-insights serve --port 8714 --open
//!   retail-insights run "10. Total revenue generated per year" --out revenue.svg

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use retail_insights::{Dashboard, MySqlStore, QueryCatalog, Settings};
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "retail-insights")]
#[command(about = "Retail order analytics dashboard over a fixed query catalog")]
#[command(version)]
struct Cli {
    /// Path to a config file (defaults to the standard search locations)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard web server
    Serve {
        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Open the browser once the server is up
        #[arg(long)]
        open: bool,
    },

    /// List the catalog labels in order
    List,

    /// Run one catalog query and print the result table
    Run {
        /// The query label, exactly as `list` prints it
        label: String,

        /// Write the rendered chart to this SVG file
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("retail_insights=info")),
        )
        .init();

    let cli = Cli::parse();

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Serve { port, open } => cmd_serve(settings, port, open).await,
        Commands::List => cmd_list(settings),
        Commands::Run { label, out } => cmd_run(settings, &label, out.as_deref()).await,
    }
}

fn load_settings(path: Option<&std::path::Path>) -> Result<Settings, retail_insights::SettingsError> {
    match path {
        Some(p) => Settings::from_file(p),
        None => Settings::load(),
    }
}

async fn cmd_serve(mut settings: Settings, port: Option<u16>, open: bool) -> ExitCode {
    if let Some(port) = port {
        settings.server.port = port;
    }

    match retail_insights::web::serve(settings, open).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_list(settings: Settings) -> ExitCode {
    let catalog = QueryCatalog::new(settings.catalog.variant);
    for label in catalog.labels() {
        println!("{label}");
    }
    ExitCode::SUCCESS
}

async fn cmd_run(settings: Settings, label: &str, out: Option<&std::path::Path>) -> ExitCode {
    let store = match settings.store.resolved() {
        Ok(resolved) => Arc::new(MySqlStore::new(&resolved)),
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let dashboard = Dashboard::new(
        QueryCatalog::new(settings.catalog.variant),
        store,
        settings.viz.ruleset.rules(),
    );

    let selection = match dashboard.select(label).await {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut builder = Builder::default();
    builder.push_record(selection.table.columns.clone());
    for row in selection.table.display_rows() {
        builder.push_record(row);
    }
    let mut table = builder.build();
    table.with(Style::sharp());
    println!("{table}");

    if let Some(path) = out {
        if let Err(e) = std::fs::write(path, &selection.figure.svg) {
            eprintln!("Failed to write chart: {e}");
            return ExitCode::FAILURE;
        }
        println!(
            "Wrote {} chart to {}",
            selection.directive.kind.as_str(),
            path.display()
        );
    }

    ExitCode::SUCCESS
}
