use anyhow::Result;
use tracing_subscriber::EnvFilter;
use worklog::commands::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    Cli::menu()
}
