use clap::Parser;
use netlab_dns_domain::{DomainError, RecordType};
use std::net::IpAddr;
use std::path::PathBuf;
use tracing::info;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "netlab-dns")]
#[command(version)]
#[command(about = "Simulated DNS resolution over a virtual network topology")]
struct Cli {
    /// Topology file path
    #[arg(short = 't', long, value_name = "FILE")]
    topology: PathBuf,

    /// Name to resolve
    name: String,

    /// Record type to ask for
    #[arg(short = 'r', long, default_value = "A")]
    record_type: RecordType,

    /// Starting server address (defaults to the first server in the topology)
    #[arg(short = 's', long)]
    server: Option<IpAddr>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    bootstrap::init_logging(&cli.log_level);

    let config = bootstrap::load_topology(&cli.topology)?;
    let simulation = di::Simulation::new(&config).await?;

    let start = match cli.server.or_else(|| config.servers.first().map(|s| s.address)) {
        Some(address) => address,
        None => anyhow::bail!("topology has no servers and no --server was given"),
    };

    info!(name = %cli.name, record_type = %cli.record_type, server = %start, "Resolving");

    match simulation.resolve(&cli.name, cli.record_type, start).await {
        Ok(message) if message.is_empty() => {
            println!("{}: no such record", cli.name);
        }
        Ok(message) => {
            for record in &message.answers {
                println!("{}", record);
            }
        }
        Err(DomainError::QueryTimeout { server }) => {
            anyhow::bail!("could not resolve {}: no response from {}", cli.name, server);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
