use clap::{Parser, Subcommand};
use rootwalk_domain::{CliOverrides, RecordType};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "rootwalk")]
#[command(version)]
#[command(about = "Rootwalk - iterative DNS resolver walking down from the root servers")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Root server to start from (ip:port)
    #[arg(long, global = true)]
    root_server: Option<String>,

    /// Per-query read deadline in milliseconds
    #[arg(long, value_name = "MS", global = true)]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Answer UDP queries by resolving them iteratively
    Serve {
        /// Bind address
        #[arg(short = 'b', long)]
        bind: Option<String>,

        /// DNS server port
        #[arg(short = 'd', long)]
        dns_port: Option<u16>,
    },
    /// Resolve a name from the root and print the final response
    Resolve {
        name: String,

        /// Record type, by mnemonic or TYPEnnn
        #[arg(short = 't', long = "type", default_value = "A")]
        record_type: RecordType,
    },
    /// Ask one server for a name's address, recursion desired
    Lookup {
        /// Server address, ip or ip:port
        server: String,
        name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (bind_address, dns_port) = match &cli.command {
        Command::Serve { bind, dns_port } => (bind.clone(), *dns_port),
        _ => (None, None),
    };
    let cli_overrides = CliOverrides {
        dns_port,
        bind_address,
        root_server: cli.root_server.clone(),
        query_timeout_ms: cli.timeout,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting Rootwalk v{}", env!("CARGO_PKG_VERSION"));

    let shutdown = CancellationToken::new();
    let on_ctrl_c = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received, cancelling");
            on_ctrl_c.cancel();
        }
    });

    let services = di::DnsServices::new(&config, shutdown.clone())?;

    let result = match cli.command {
        Command::Serve { .. } => commands::run_serve(&config, services, shutdown).await,
        Command::Resolve { name, record_type } => {
            commands::run_resolve(&services, &name, record_type).await
        }
        Command::Lookup { server, name } => tokio::select! {
            _ = shutdown.cancelled() => Err(anyhow::anyhow!("lookup cancelled")),
            result = commands::run_lookup(&services, &server, &name) => result,
        },
    };

    if let Err(e) = &result {
        error!(error = %e, "Command failed");
    }
    result
}
