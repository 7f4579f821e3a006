use anyhow::Context;
use netlab_dns_domain::TopologyConfig;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub fn load_topology(path: &Path) -> anyhow::Result<TopologyConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading topology file {}", path.display()))?;
    let config: TopologyConfig =
        toml::from_str(&raw).with_context(|| format!("parsing topology file {}", path.display()))?;
    Ok(config)
}
