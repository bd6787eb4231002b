use anyhow::Result;
use clap::Parser;
use lexis::{run, Cli, Config};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    let config = Config::from(Cli::parse());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)?;
    Ok(())
}
