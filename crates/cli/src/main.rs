use clap::{Parser, Subcommand};
use ferrous_arp_domain::CliOverrides;
use tracing::{debug, error};

mod bootstrap;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "ferrous-arp")]
#[command(version)]
#[command(about = "Ferrous ARP - Resolve MAC addresses from the OS neighbor cache")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Give up on ping/arp after this many seconds
    #[arg(short = 't', long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ping IP once, then print its MAC address from the neighbor cache
    Mac {
        /// Address to resolve
        ip: String,
    },

    /// Print the neighbor cache, optionally only the entry for IP
    Table {
        /// Restrict the dump to this address
        ip: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        command_timeout_secs: cli.timeout,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    debug!("Starting Ferrous ARP v{}", env!("CARGO_PKG_VERSION"));

    let use_cases = di::UseCases::new(&config).inspect_err(|e| {
        error!(error = %e, "Failed to initialize neighbor table");
    })?;

    let rendered = match &cli.command {
        Command::Mac { ip } => {
            let record = use_cases.resolve_mac.execute(ip).await?;
            output::render_mac(&record, cli.json)?
        }
        Command::Table { ip } => {
            let records = use_cases.resolve_table.execute(ip.as_deref()).await?;
            output::render_table(&records, cli.json)?
        }
    };

    println!("{}", rendered);
    Ok(())
}
