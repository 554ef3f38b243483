use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sales_report::report::{self, ClientOrder, ReportOptions};
use sales_report::server::{self, ServerConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the upload service
    Serve(ServerConfig),

    /// Build a report from a local file
    Generate {
        /// Spreadsheet with Region, Client and Amount columns
        input: PathBuf,

        /// Where to write the report workbook (.xlsx)
        output: PathBuf,

        /// Order of clients inside each region sheet
        #[arg(long, value_enum, default_value_t = ClientOrder::Sorted)]
        client_order: ClientOrder,

        /// Print the report summary as JSON to stdout
        #[arg(long, short = 'j')]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve(config) => server::serve(config).await,
        Command::Generate {
            input,
            output,
            client_order,
            json,
        } => {
            let options = ReportOptions { client_order };
            let summary = report::generate_report(&input, &output, &options)
                .with_context(|| format!("Report generation failed for {}", input.display()))?;

            if json {
                let json_string = serde_json::to_string_pretty(&summary)
                    .context("Failed to serialize report summary to JSON")?;
                println!("{}", json_string);
            } else {
                for sheet in &summary.sheets {
                    println!(
                        "{:<31}  {:>4} clients  total {:>14.2}{}",
                        sheet.sheet_name,
                        sheet.clients,
                        sheet.total,
                        if sheet.chart { "" } else { "  (no chart)" }
                    );
                }
                println!("Wrote {}", output.display());
            }

            Ok(())
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sales_report=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
