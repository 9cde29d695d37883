use anyhow::Result;
use clap::{Parser, Subcommand};
use palitha::cli::{ContactArgs, SubscribeArgs};

/// palitha - Palitha Aluminium website backend
#[derive(Parser)]
#[command(name = "palitha")]
#[command(about = "Contact and newsletter submissions for the Palitha Aluminium website", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Send a contact request to a running server
    Contact(ContactArgs),
    /// Subscribe an address to the newsletter on a running server
    Subscribe(SubscribeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = palitha::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    palitha::observability::init_observability(&config.logging.level, &config.logging.format)?;

    match cli.command {
        Commands::Serve { host, port } => palitha::cli::serve(config, host, port).await,
        Commands::Contact(args) => palitha::cli::contact(config, args).await,
        Commands::Subscribe(args) => palitha::cli::subscribe(config, args).await,
    }
}
